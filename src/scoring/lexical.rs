//! Lexical text similarity: TF-IDF vectors with cosine distance

use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizes text and computes TF-IDF cosine similarity between a resume
/// and a job description. Unigrams and bigrams, lowercased, stop words
/// removed.
pub struct TextAnalyzer {
    stop_words: HashSet<&'static str>,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Lowercased word tokens with stop words and single characters removed.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|w| w.to_lowercase())
            .filter(|w| w.len() > 1 && !self.stop_words.contains(w.as_str()))
            .filter(|w| w.chars().any(|c| c.is_alphabetic()))
            .collect()
    }

    /// Unigram + bigram terms for vectorization.
    fn terms(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let mut terms = tokens.clone();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }

    /// TF-IDF cosine similarity between two texts, in [0, 1].
    /// Returns 0.0 when either text is empty or yields no terms.
    pub fn text_similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let terms_a = self.terms(text_a);
        let terms_b = self.terms(text_b);
        if terms_a.is_empty() || terms_b.is_empty() {
            return 0.0;
        }

        let tf_a = term_frequencies(&terms_a);
        let tf_b = term_frequencies(&terms_b);

        // Smoothed IDF over the two-document corpus.
        let idf = |term: &str| -> f64 {
            let df = tf_a.contains_key(term) as u32 + tf_b.contains_key(term) as u32;
            ((1.0 + 2.0) / (1.0 + df as f64)).ln() + 1.0
        };

        let mut dot = 0.0;
        let mut norm_a = 0.0;
        let mut norm_b = 0.0;

        for (term, &count_a) in &tf_a {
            let weight = idf(term);
            let value_a = count_a as f64 * weight;
            norm_a += value_a * value_a;
            if let Some(&count_b) = tf_b.get(term) {
                dot += value_a * (count_b as f64 * weight);
            }
        }
        for (term, &count_b) in &tf_b {
            let value_b = count_b as f64 * idf(term);
            norm_b += value_b * value_b;
        }

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
    }
}

fn term_frequencies(terms: &[String]) -> HashMap<&str, u32> {
    let mut freq = HashMap::new();
    for term in terms {
        *freq.entry(term.as_str()).or_insert(0) += 1;
    }
    freq
}

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can", "could", "did", "do",
    "does", "for", "from", "had", "has", "have", "he", "her", "his", "how", "if", "in", "into",
    "is", "it", "its", "may", "more", "most", "must", "no", "not", "of", "on", "or", "our",
    "she", "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
    "there", "these", "they", "this", "to", "was", "we", "well", "were", "what", "when",
    "where", "which", "while", "who", "will", "with", "would", "you", "your",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let analyzer = TextAnalyzer::new();
        let text = "Senior backend engineer building Rust services on Kubernetes";
        let score = analyzer.text_similarity(text, text);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrelated_texts_score_low() {
        let analyzer = TextAnalyzer::new();
        let score = analyzer.text_similarity(
            "gardening tulips watering flowerbeds pruning roses",
            "distributed consensus raft replication quorum leases",
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let analyzer = TextAnalyzer::new();
        assert_eq!(analyzer.text_similarity("", "some job text"), 0.0);
        assert_eq!(analyzer.text_similarity("some resume", ""), 0.0);
        assert_eq!(analyzer.text_similarity("", ""), 0.0);
    }

    #[test]
    fn test_overlapping_texts_score_between_bounds() {
        let analyzer = TextAnalyzer::new();
        let score = analyzer.text_similarity(
            "python developer with django experience and postgresql",
            "looking for a python developer familiar with flask and postgresql",
        );
        assert!(score > 0.0 && score < 1.0);
    }

    #[test]
    fn test_stop_words_removed() {
        let analyzer = TextAnalyzer::new();
        let tokens = analyzer.tokenize("the quick brown fox is in the barn");
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"is".to_string()));
        assert!(tokens.contains(&"quick".to_string()));
    }

    #[test]
    fn test_bigrams_included_in_terms() {
        let analyzer = TextAnalyzer::new();
        let terms = analyzer.terms("machine learning engineer");
        assert!(terms.contains(&"machine learning".to_string()));
        assert!(terms.contains(&"learning engineer".to_string()));
    }
}
