use std::collections::HashMap;

/// Sparse term-frequency vector: token to occurrence count.
pub type TermVector = HashMap<String, u32>;

pub fn vectorize<S: AsRef<str>>(tokens: &[S]) -> TermVector {
    let mut tf = TermVector::new();
    for token in tokens {
        *tf.entry(token.as_ref().to_string()).or_insert(0) += 1;
    }
    tf
}

fn dot(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, &count)| large.get(term).map(|&other| f64::from(count) * f64::from(other)))
        .sum()
}

fn magnitude(v: &TermVector) -> f64 {
    v.values()
        .map(|&count| f64::from(count) * f64::from(count))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two term vectors; 0.0 when either is empty.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let denom = magnitude(a) * magnitude(b);
    if denom == 0.0 {
        return 0.0;
    }
    dot(a, b) / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::utils::tokenize;

    fn vec_of(text: &str) -> TermVector {
        vectorize(&tokenize(text))
    }

    #[test]
    fn test_vectorize_counts_repeats() {
        let v = vec_of("bug bug outage");
        assert_eq!(v.get("bug"), Some(&2));
        assert_eq!(v.get("outage"), Some(&1));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_identical_texts_have_similarity_one() {
        let a = vec_of("Support fixed my issue quickly");
        let b = vec_of("Support fixed my issue quickly");
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_texts_have_similarity_zero() {
        let a = vec_of("great pricing");
        let b = vec_of("signup flow failing");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_empty_vector_similarity_is_zero() {
        let a = vec_of("");
        let b = vec_of("anything");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // a = {x:1, y:1}, b = {x:1, z:1} -> 1 / (sqrt2 * sqrt2) = 0.5
        let a = vec_of("x y");
        let b = vec_of("x z");
        assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-9);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }
}
