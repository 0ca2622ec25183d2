use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Calm,
    Energetic,
    Romantic,
    Angry,
    Nostalgic,
    Anxious,
    Bored,
    Motivated,
    /// Only reachable through the sentiment fallback.
    Neutral,
}

impl Mood {
    /// Bucket a sentiment polarity into a mood.
    ///
    /// The ranges cover every finite value; NaN matches none and yields `None`.
    pub fn from_polarity(polarity: f64) -> Option<Mood> {
        if polarity > 0.6 {
            Some(Mood::Happy)
        } else if polarity > 0.4 && polarity <= 0.6 {
            Some(Mood::Energetic)
        } else if polarity > 0.2 && polarity <= 0.4 {
            Some(Mood::Calm)
        } else if polarity > -0.2 && polarity <= 0.2 {
            Some(Mood::Neutral)
        } else if polarity > -0.4 && polarity <= -0.2 {
            Some(Mood::Anxious)
        } else if polarity > -0.6 && polarity <= -0.4 {
            Some(Mood::Sad)
        } else if polarity <= -0.6 {
            Some(Mood::Angry)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Situation {
    Party,
    Workout,
    Study,
    Sleep,
    Travel,
    Breakup,
    Wedding,
    #[strum(to_string = "rainy day")]
    RainyDay,
    Beach,
    Spiritual,
}

impl Situation {
    /// Keywords prepended to the search string when this situation matched.
    pub fn template_prefix(&self) -> &'static str {
        match self {
            Situation::Party => "party",
            Situation::Workout => "workout",
            Situation::Study => "study music",
            Situation::Sleep => "sleep music",
            Situation::Travel => "travel music",
            Situation::Breakup => "breakup songs",
            Situation::Wedding => "wedding music",
            Situation::RainyDay => "rainy day music",
            Situation::Beach => "beach music",
            Situation::Spiritual => "spiritual music",
        }
    }
}

/// Scanned in order; the first entry containing a lemma wins for that token.
pub static MOOD_TABLE: &[(Mood, &[&str])] = &[
    (Mood::Happy, &["happy", "joyful", "excited", "fun", "cheerful", "upbeat"]),
    (Mood::Sad, &["sad", "depressed", "unhappy", "melancholy", "gloomy"]),
    (Mood::Calm, &["calm", "relaxed", "peaceful", "serene", "tranquil"]),
    (Mood::Energetic, &["energetic", "lively", "dynamic"]),
    (Mood::Romantic, &["romantic", "love", "passionate", "affectionate"]),
    (Mood::Angry, &["angry", "frustrated", "furious", "rage"]),
    (Mood::Nostalgic, &["nostalgic", "reminiscent", "sentimental"]),
    (Mood::Anxious, &["anxious", "nervous", "tense"]),
    (Mood::Bored, &["bored", "disinterested", "apathetic"]),
    (Mood::Motivated, &["motivated", "inspired", "driven"]),
];

/// "road trip" spans two tokens, so it never matches a single lemma.
pub static SITUATION_TABLE: &[(Situation, &[&str])] = &[
    (Situation::Party, &["party", "celebration", "festive"]),
    (Situation::Workout, &["workout", "exercise", "fitness", "gym"]),
    (Situation::Study, &["study", "focus", "concentration", "work"]),
    (Situation::Sleep, &["sleep", "bedtime", "lullaby"]),
    (Situation::Travel, &["travel", "journey", "road trip"]),
    (Situation::Breakup, &["breakup", "heartbreak", "separation"]),
    (Situation::Wedding, &["wedding", "marriage", "ceremony"]),
    (Situation::RainyDay, &["rainy", "rain", "cloudy", "storm"]),
    (Situation::Beach, &["beach", "summer", "sunny", "ocean"]),
    (Situation::Spiritual, &["spiritual", "meditation", "yoga"]),
];

pub static LOVE_LEMMAS: &[&str] = &["love", "loving"];

/// Language name to the code used in the `language:` search filter.
pub static LANGUAGE_TABLE: &[(&str, &str)] = &[
    ("Hindi", "hi"),
    ("Telugu", "te"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Chinese", "zh"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Russian", "ru"),
    ("Arabic", "ar"),
    ("Turkish", "tr"),
    ("Dutch", "nl"),
    ("Swedish", "sv"),
    ("Danish", "da"),
    ("Norwegian", "no"),
    ("Finnish", "fi"),
    ("Greek", "el"),
    ("Hebrew", "he"),
    ("Thai", "th"),
    ("Vietnamese", "vi"),
    ("Indonesian", "id"),
    ("Malay", "ms"),
    ("Bengali", "bn"),
    ("Punjabi", "pa"),
    ("Marathi", "mr"),
    ("Gujarati", "gu"),
    ("Kannada", "kn"),
    ("Tamil", "ta"),
    ("Urdu", "ur"),
    ("Swahili", "sw"),
    ("Filipino", "tl"),
    ("Hungarian", "hu"),
    ("Czech", "cs"),
    ("Polish", "pl"),
    ("Romanian", "ro"),
    ("Ukrainian", "uk"),
];

pub fn mood_for_lemma(lemma: &str) -> Option<Mood> {
    MOOD_TABLE
        .iter()
        .find(|(_, words)| words.contains(&lemma))
        .map(|(mood, _)| *mood)
}

pub fn situation_for_lemma(lemma: &str) -> Option<Situation> {
    SITUATION_TABLE
        .iter()
        .find(|(_, words)| words.contains(&lemma))
        .map(|(situation, _)| *situation)
}

pub fn language_for_lemma(lemma: &str) -> Option<&'static str> {
    LANGUAGE_TABLE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(lemma))
        .map(|(_, code)| *code)
}
