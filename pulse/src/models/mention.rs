use serde::{Deserialize, Serialize};

/// Origin of a mention. The set is closed; each platform carries a fixed
/// display name that is reported as the mention `source`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Twitter,
    Reddit,
    News,
    Blog,
    Forum,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Twitter,
        Platform::Reddit,
        Platform::News,
        Platform::Blog,
        Platform::Forum,
    ];

    /// Human-readable source name shown alongside the platform id.
    pub fn source_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Reddit => "Reddit",
            Self::News => "News",
            Self::Blog => "Blog",
            Self::Forum => "Forum",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Twitter => write!(f, "twitter"),
            Self::Reddit => write!(f, "reddit"),
            Self::News => write!(f, "news"),
            Self::Blog => write!(f, "blog"),
            Self::Forum => write!(f, "forum"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twitter" => Ok(Self::Twitter),
            "reddit" => Ok(Self::Reddit),
            "news" => Ok(Self::News),
            "blog" => Ok(Self::Blog),
            "forum" => Ok(Self::Forum),
            _ => Err(format!("Unknown platform: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// Candidate payload produced by a mention source, before scoring and id
/// assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct MentionDraft {
    pub platform: Platform,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl MentionDraft {
    pub fn new(platform: Platform, text: impl Into<String>, timestamp: i64) -> Self {
        Self {
            platform,
            text: text.into(),
            timestamp,
        }
    }
}

/// A scored mention as admitted into the store. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub id: String,
    pub source: String,
    pub platform: Platform,
    pub text: String,
    pub timestamp: i64,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
}
