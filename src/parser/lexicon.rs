// File: src/parser/lexicon.rs
//! Per-locale keyword tables. The extractor is a single implementation
//! polymorphic over these tables; picking a `Lexicon` is all that
//! distinguishes the English and Chinese paths.

use chrono::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl PartOfDay {
    /// Default start hour when a part-of-day keyword appears without an
    /// explicit clock time.
    pub fn default_start(self) -> (u32, u32) {
        match self {
            PartOfDay::Morning => (9, 0),
            PartOfDay::Afternoon => (14, 0),
            PartOfDay::Evening => (18, 0),
            PartOfDay::Night => (20, 0),
        }
    }

    pub fn is_pm(self) -> bool {
        !matches!(self, PartOfDay::Morning)
    }
}

/// Keyword tables for one locale. Relative-day entries are ordered longest
/// first so that e.g. 大后天 wins over its 后天 substring and
/// "day after tomorrow" wins over "tomorrow".
pub struct Lexicon {
    pub relative_days: &'static [(&'static str, i64, Option<PartOfDay>)],
    pub periods: &'static [(&'static str, PartOfDay)],
}

pub const EN: Lexicon = Lexicon {
    relative_days: &[
        ("day after tomorrow", 2, None),
        ("this evening", 0, Some(PartOfDay::Evening)),
        ("yesterday", -1, None),
        ("tomorrow", 1, None),
        ("tonight", 0, Some(PartOfDay::Night)),
        ("today", 0, None),
    ],
    periods: &[
        ("morning", PartOfDay::Morning),
        ("afternoon", PartOfDay::Afternoon),
        ("evening", PartOfDay::Evening),
        ("tonight", PartOfDay::Night),
        ("night", PartOfDay::Night),
    ],
};

pub const ZH: Lexicon = Lexicon {
    relative_days: &[
        ("大后天", 3, None),
        ("后天", 2, None),
        ("后日", 2, None),
        ("明天", 1, None),
        ("明日", 1, None),
        ("今天", 0, None),
        ("今日", 0, None),
        ("昨天", -1, None),
        ("昨日", -1, None),
        ("前天", -2, None),
        ("前日", -2, None),
    ],
    periods: &[
        ("上午", PartOfDay::Morning),
        ("早上", PartOfDay::Morning),
        ("早晨", PartOfDay::Morning),
        ("下午", PartOfDay::Afternoon),
        ("中午", PartOfDay::Afternoon),
        ("午后", PartOfDay::Afternoon),
        ("晚上", PartOfDay::Evening),
        ("傍晚", PartOfDay::Evening),
    ],
};

pub fn weekday_from_word(s: &str) -> Option<Weekday> {
    match s {
        "mo" | "mon" | "monday" => Some(Weekday::Mon),
        "tu" | "tue" | "tuesday" => Some(Weekday::Tue),
        "we" | "wed" | "wednesday" => Some(Weekday::Wed),
        "th" | "thu" | "thursday" => Some(Weekday::Thu),
        "fr" | "fri" | "friday" => Some(Weekday::Fri),
        "sa" | "sat" | "saturday" => Some(Weekday::Sat),
        "su" | "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

pub fn month_from_word(s: &str) -> Option<u32> {
    match s {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "sept" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Command verbs stripped by the normalizer (English path).
pub const COMMAND_VERBS: &[&str] = &["add", "schedule", "create", "book", "make", "set", "please"];

/// Words that never make a title substantive on their own.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "my", "and", "or", "but", "with", "to", "on", "in", "for", "at", "of", "is",
];

/// Connectors that link two clock times into a range.
pub const RANGE_CONNECTORS: &[&str] = &["to", "until", "till", "-"];

/// Prepositions dropped when they directly precede a temporal token.
pub const TEMPORAL_PREPOSITIONS: &[&str] = &["at", "from", "to", "until", "till", "on", "in", "for"];

pub const HOUR_UNITS: &[&str] = &["hour", "hours", "hr", "hrs"];
pub const MINUTE_UNITS: &[&str] = &["minute", "minutes", "min", "mins"];

/// Connective characters and words removed from Chinese utterances when
/// deriving a title (the temporal glue between two clock expressions).
pub const ZH_CONNECTIVES: &[&str] = &["开始", "结束", "到", "至", "从", "在"];

/// Splits on whitespace, trimming sentence punctuation from token edges.
/// Colons, slashes and hyphens survive; clock and date tokens need them.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c| matches!(c, ',' | '.' | '!' | '?' | ';' | '"' | '\'')))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

/// Substring search honoring word boundaries on both sides, so "night"
/// does not match inside "tonight".
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = text[from..].find(phrase) {
        let abs = from + pos;
        let before_ok = text[..abs]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after = abs + phrase.len();
        let after_ok = text[after..].chars().next().is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        from = abs + phrase.len();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_boundaries() {
        assert!(contains_phrase("see you tonight", "tonight"));
        assert!(!contains_phrase("see you tonight", "night"));
        assert!(contains_phrase("late at night", "night"));
        assert!(contains_phrase("明天开会", "明天"));
    }

    #[test]
    fn tokenizer_trims_punctuation() {
        assert_eq!(tokenize("Lunch, at 2:00pm!"), vec!["Lunch", "at", "2:00pm"]);
    }
}
