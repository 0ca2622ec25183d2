//! Lexicon polarity scorer.
//!
//! Each scored word contributes its lexicon value, optionally boosted by a
//! preceding intensifier or flipped by a preceding negator. The text score is
//! the mean over scored words, so unscored filler does not dilute it.

use unicode_segmentation::UnicodeSegmentation;

use super::SentimentAnalyzer;

const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("bright", 0.7),
    ("brilliant", 0.9),
    ("delightful", 1.0),
    ("epic", 0.5),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("incredible", 0.9),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("sweet", 0.35),
    ("warm", 0.6),
    ("wonderful", 1.0),
    ("cool", 0.35),
    ("soft", 0.1),
    ("chill", 0.25),
    ("smooth", 0.4),
    // Negative
    ("awful", -1.0),
    ("bad", -0.7),
    ("bitter", -0.1),
    ("boring", -1.0),
    ("broken", -0.4),
    ("cold", -0.6),
    ("dark", -0.15),
    ("dull", -0.3),
    ("heavy", -0.2),
    ("hopeless", -0.8),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("lonely", -0.5),
    ("lost", -0.3),
    ("miserable", -1.0),
    ("painful", -0.7),
    ("poor", -0.4),
    ("stressed", -0.5),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("upset", -0.6),
    ("worst", -1.0),
    ("worried", -0.5),
    ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.4),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "isn't", "isnt", "aren't", "wasn't", "can't",
    "cannot", "won't", "doesn't", "didn't",
];

/// Polarity damping applied to a negated word.
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        LexiconSentiment
    }
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|(_, v)| *v)
}

impl SentimentAnalyzer for LexiconSentiment {
    fn polarity(&self, text: &str) -> f64 {
        let lower = text.to_lowercase();
        let mut scores: Vec<f64> = Vec::new();
        let mut boost = 1.0;
        let mut negated = false;

        for word in lower.unicode_words() {
            if let Some(factor) = lookup(INTENSIFIERS, word) {
                boost = factor;
                continue;
            }
            if NEGATORS.contains(&word) {
                negated = true;
                continue;
            }
            if let Some(value) = lookup(LEXICON, word) {
                let mut score = (value * boost).clamp(-1.0, 1.0);
                if negated {
                    score *= NEGATION_FACTOR;
                }
                scores.push(score);
            }
            boost = 1.0;
            negated = false;
        }

        if scores.is_empty() {
            return 0.0;
        }
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
