//! Linguistic capabilities the interpreter depends on.
//!
//! The interpreter only sees these traits, so tests can swap in fixed
//! token streams or fixed polarities without running any analysis.

pub mod lemma;
pub mod sentiment;

pub use lemma::RuleLemmatizer;
pub use sentiment::LexiconSentiment;

/// A word from the input together with its normalized base form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lemma: String,
}

impl Token {
    pub fn new(text: impl Into<String>, lemma: impl Into<String>) -> Self {
        Token { text: text.into(), lemma: lemma.into() }
    }
}

pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, text: &str) -> Vec<Token>;
}

/// Produces a polarity score in `[-1.0, 1.0]` for the whole text.
pub trait SentimentAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}
