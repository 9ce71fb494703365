//! Dense embedding provider seam and vector similarity

use crate::error::{RelevanceError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Abstraction over a dense text embedding backend.
///
/// Implementations wrap an in-process model or a remote inference service;
/// the engine only needs one vector per text. Providers are optional: when
/// none is configured the semantic component is skipped and its weight is
/// redistributed.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Run an embedding call with a hard deadline. An overrun surfaces as an
/// `Embedding` error so the scorer can degrade instead of hanging.
pub async fn embed_with_timeout(
    provider: &dyn EmbeddingProvider,
    text: &str,
    timeout_ms: u64,
) -> Result<Vec<f32>> {
    match tokio::time::timeout(Duration::from_millis(timeout_ms), provider.embed(text)).await {
        Ok(result) => result,
        Err(_) => Err(RelevanceError::Embedding(format!(
            "embedding call exceeded {}ms",
            timeout_ms
        ))),
    }
}

/// Cosine similarity between two embedding vectors, mapped to [0, 1].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RelevanceError::Embedding(format!(
            "embedding dimension mismatch: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    if a.is_empty() {
        return Err(RelevanceError::Embedding(
            "embedding vectors are empty".to_string(),
        ));
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x as f64 * y as f64;
        norm_a += x as f64 * x as f64;
        norm_b += y as f64 * y as f64;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    // Raw cosine is in [-1, 1]; shift into the engine's [0, 1] scale.
    let cosine = dot / (norm_a.sqrt() * norm_b.sqrt());
    Ok(((cosine + 1.0) / 2.0).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProvider(Vec<f32>);

    #[async_trait]
    impl EmbeddingProvider for FixedProvider {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl EmbeddingProvider for SlowProvider {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![0.0])
        }
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5f32, -0.25, 1.0];
        let score = cosine_similarity(&v, &v).unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_opposite_vectors() {
        let a = vec![1.0f32, 0.0];
        let b = vec![-1.0f32, 0.0];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!(score.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0f32, 0.0];
        let b = vec![0.0f32, 1.0];
        let score = cosine_similarity(&a, &b).unwrap();
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_dimension_mismatch() {
        let a = vec![1.0f32, 2.0];
        let b = vec![1.0f32, 2.0, 3.0];
        assert!(matches!(
            cosine_similarity(&a, &b),
            Err(RelevanceError::Embedding(_))
        ));
    }

    #[test]
    fn test_cosine_zero_vector_scores_zero() {
        let a = vec![0.0f32, 0.0];
        let b = vec![1.0f32, 2.0];
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_embedding_error() {
        let provider = SlowProvider;
        let result = embed_with_timeout(&provider, "text", 10).await;
        match result {
            Err(RelevanceError::Embedding(message)) => assert!(message.contains("10ms")),
            other => panic!("expected embedding timeout error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fast_provider_returns_within_timeout() {
        let provider = FixedProvider(vec![1.0, 2.0, 3.0]);
        let vector = embed_with_timeout(&provider, "text", 1_000).await.unwrap();
        assert_eq!(vector, vec![1.0, 2.0, 3.0]);
    }
}
