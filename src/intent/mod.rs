pub mod tables;

use std::fmt;

use tracing::{debug, trace};

use crate::nlp::{Lemmatizer, LexiconSentiment, RuleLemmatizer, SentimentAnalyzer};

pub use self::tables::{Mood, Situation};
use self::tables::{language_for_lemma, mood_for_lemma, situation_for_lemma, LOVE_LEMMAS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoodSource {
    Keyword,
    Sentiment(f64),
}

/// What the interpreter understood from one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedIntent {
    pub mood: Option<Mood>,
    pub mood_source: Option<MoodSource>,
    pub situation: Option<Situation>,
    pub language: Option<&'static str>,
    pub love_related: bool,
}

impl fmt::Display for ParsedIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.mood, self.mood_source) {
            (Some(mood), Some(MoodSource::Sentiment(p))) => write!(f, "mood: {mood} (sentiment {p:+.2})")?,
            (Some(mood), _) => write!(f, "mood: {mood}")?,
            (None, _) => write!(f, "mood: ?")?,
        }
        if let Some(situation) = self.situation {
            write!(f, " · situation: {situation}")?;
        }
        if let Some(lang) = self.language {
            write!(f, " · language: {lang}")?;
        }
        if self.love_related {
            write!(f, " · ♥")?;
        }
        Ok(())
    }
}

/// Maps free text onto mood/situation/language using the fixed tables, with
/// a sentiment fallback for the mood.
pub struct Interpreter {
    lemmatizer: Box<dyn Lemmatizer>,
    sentiment: Box<dyn SentimentAnalyzer>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new(Box::new(RuleLemmatizer::new()), Box::new(LexiconSentiment::new()))
    }
}

impl Interpreter {
    pub fn new(lemmatizer: Box<dyn Lemmatizer>, sentiment: Box<dyn SentimentAnalyzer>) -> Self {
        Interpreter { lemmatizer, sentiment }
    }

    pub fn interpret(&self, text: &str) -> ParsedIntent {
        let mut mood = None;
        let mut situation = None;
        let mut language = None;
        let mut love_related = false;

        // Later tokens overwrite earlier matches.
        for token in self.lemmatizer.lemmatize(text) {
            let lemma = token.lemma.as_str();
            trace!(text = %token.text, lemma, "token");
            if let Some(m) = mood_for_lemma(lemma) {
                mood = Some(m);
            }
            if let Some(s) = situation_for_lemma(lemma) {
                situation = Some(s);
            }
            if LOVE_LEMMAS.contains(&lemma) {
                love_related = true;
            }
            if let Some(code) = language_for_lemma(lemma) {
                language = Some(code);
            }
        }

        let mut mood_source = mood.map(|_| MoodSource::Keyword);
        if mood.is_none() {
            let polarity = self.sentiment.polarity(text);
            mood = Mood::from_polarity(polarity);
            mood_source = Some(MoodSource::Sentiment(polarity));
        }

        let intent = ParsedIntent { mood, mood_source, situation, language, love_related };
        debug!(?intent, "Interpreted query");
        intent
    }
}

/// The user's text, filtered by language when one was named.
pub fn search_string(text: &str, intent: &ParsedIntent) -> String {
    match intent.language {
        Some(code) => format!("{text} language:{code}"),
        None => text.to_string(),
    }
}

/// Situation beats mood; with neither, the search string goes out bare.
pub fn select_template(intent: &ParsedIntent, search: &str) -> String {
    if let Some(situation) = intent.situation {
        format!("{} {search}", situation.template_prefix())
    } else if let Some(mood) = intent.mood {
        format!("{mood} {search}")
    } else {
        search.to_string()
    }
}
