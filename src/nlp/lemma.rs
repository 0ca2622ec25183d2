use unicode_segmentation::UnicodeSegmentation;

use super::{Lemmatizer, Token};

/// Forms the suffix rules would get wrong, or that need a verb/noun base.
const IRREGULAR: &[(&str, &str)] = &[
    ("loving", "love"),
    ("loved", "love"),
    ("loves", "love"),
    ("songs", "song"),
    ("parties", "party"),
    ("partying", "party"),
    ("studying", "study"),
    ("studies", "study"),
    ("exercising", "exercise"),
    ("exercises", "exercise"),
    ("traveling", "travel"),
    ("travelling", "travel"),
    ("journeys", "journey"),
    ("sleeping", "sleep"),
    ("working", "work"),
    ("workouts", "workout"),
    ("raining", "rain"),
    ("storms", "storm"),
    ("weddings", "wedding"),
    ("beaches", "beach"),
    ("celebrations", "celebration"),
    ("ceremonies", "ceremony"),
    ("lullabies", "lullaby"),
    ("oceans", "ocean"),
    ("summers", "summer"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("was", "be"),
    ("were", "be"),
    ("is", "be"),
    ("am", "be"),
    ("are", "be"),
];

/// Lemmatizer built from word segmentation, a small table of irregular
/// forms and plural stripping.
///
/// Adjectival participles ("relaxed", "inspired", "excited") are kept as-is:
/// the mood vocabulary is written in that form.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        RuleLemmatizer
    }

    fn lemma_of(word: &str) -> String {
        let lower = word.to_lowercase();
        if let Some((_, base)) = IRREGULAR.iter().find(|(form, _)| *form == lower) {
            return (*base).to_string();
        }
        strip_plural(&lower)
    }
}

fn strip_plural(word: &str) -> String {
    let len = word.chars().count();
    if len <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, text: &str) -> Vec<Token> {
        text.unicode_words()
            .map(|w| Token::new(w, Self::lemma_of(w)))
            .collect()
    }
}
