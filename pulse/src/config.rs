use serde::Deserialize;
use std::env;

pub const DEFAULT_KEYWORDS: &[&str] = &["rapidquest", "product", "launch", "issue", "update"];

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(var: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Ignoring.", val, var, e);
                None
            }
        },
        Err(_) => None,
    }
}

/// Parse `TRACKED_KEYWORDS`.
/// Format: comma-separated list, e.g. `rapidquest,launch,pricing`
fn parse_keywords() -> Vec<String> {
    match env::var("TRACKED_KEYWORDS") {
        Ok(val) if !val.trim().is_empty() => val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub pipeline: PipelineConfig,
    pub clustering: ClusteringConfig,
    pub spike: SpikeConfig,
    pub simulator: SimulatorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Capacity of the mention store; older mentions are evicted FIFO.
    pub max_store: usize,
    /// Upper bound on mentions returned by a single query.
    pub max_returned_mentions: usize,
    pub export_limit: usize,
    pub broadcast_capacity: usize,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusteringConfig {
    /// How many of the most recent (filtered) mentions get clustered per query.
    pub batch_size: usize,
    pub similarity_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpikeConfig {
    pub window_secs: u64,
    pub threshold_multiplier: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulatorConfig {
    pub enabled: bool,
    pub interval_ms: u64,
    pub seed_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_store: 5000,
            max_returned_mentions: 500,
            export_limit: 1000,
            broadcast_capacity: 256,
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            batch_size: 30,
            similarity_threshold: 0.32,
        }
    }
}

impl Default for SpikeConfig {
    fn default() -> Self {
        Self {
            window_secs: 60,
            threshold_multiplier: 3.0,
        }
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 2200,
            seed_count: 40,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let pipeline = PipelineConfig::default();
        let clustering = ClusteringConfig::default();
        let spike = SpikeConfig::default();
        let simulator = SimulatorConfig::default();

        Self {
            server: ServerConfig {
                host: env::var("PULSE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PULSE_PORT", 3000),
            },
            pipeline: PipelineConfig {
                max_store: parse_env_or("MAX_STORE", pipeline.max_store).max(1),
                max_returned_mentions: parse_env_or(
                    "MAX_RETURNED_MENTIONS",
                    pipeline.max_returned_mentions,
                ),
                export_limit: parse_env_or("EXPORT_LIMIT", pipeline.export_limit),
                broadcast_capacity: parse_env_or("BROADCAST_CAPACITY", pipeline.broadcast_capacity)
                    .max(1),
                keywords: parse_keywords(),
            },
            clustering: ClusteringConfig {
                batch_size: parse_env_or("CLUSTER_BATCH_SIZE", clustering.batch_size),
                similarity_threshold: parse_env_or(
                    "CLUSTER_SIMILARITY_THRESHOLD",
                    clustering.similarity_threshold,
                ),
            },
            spike: SpikeConfig {
                window_secs: parse_env_or("SPIKE_WINDOW_SECS", spike.window_secs).max(1),
                threshold_multiplier: parse_env_or(
                    "SPIKE_THRESHOLD_MULTIPLIER",
                    spike.threshold_multiplier,
                ),
            },
            simulator: SimulatorConfig {
                enabled: parse_env_or("SIMULATOR_ENABLED", simulator.enabled),
                interval_ms: parse_env_or("SIMULATE_INTERVAL_MS", simulator.interval_ms).max(1),
                seed_count: parse_env_opt("SEED_MENTIONS").unwrap_or(simulator.seed_count),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
