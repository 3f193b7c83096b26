// File: src/parser/normalize.rs
//! Lexical cleanup: command-phrase stripping, locale detection and title
//! derivation. Temporal tokens are removed so they never pollute the
//! title; the extractor re-scans the original utterance for them.

use crate::model::Locale;
use crate::parser::lexicon::{self, COMMAND_VERBS, STOP_WORDS};
use crate::parser::temporal;

const EN_FALLBACK_TITLE: &str = "Meeting";
const ZH_TRUNCATION_CHARS: usize = 20;

#[derive(Debug, Clone)]
pub struct Normalized {
    /// Lower-cased, whitespace-collapsed, with command and temporal
    /// phrases removed.
    pub cleaned_text: String,
    pub locale: Locale,
    pub title: String,
}

/// Script heuristic: any CJK unified ideograph selects the Chinese tables.
pub fn detect_locale(text: &str) -> Locale {
    if text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c)) {
        Locale::Zh
    } else {
        Locale::En
    }
}

pub fn normalize(text: &str, locale: Locale) -> Normalized {
    match locale {
        Locale::En => normalize_en(text),
        Locale::Zh => normalize_zh(text),
    }
}

fn normalize_en(text: &str) -> Normalized {
    let lower = text.to_lowercase();
    let tokens = lexicon::tokenize(&lower);
    let scan = temporal::scan_en(&lower, &tokens);
    let mut drop = scan.temporal_tokens;

    let mut i = 0;
    while i < tokens.len() {
        if drop[i] {
            i += 1;
            continue;
        }
        let tok = tokens[i].as_str();

        // Command verbs take the article right after them along.
        if COMMAND_VERBS.contains(&tok) {
            drop[i] = true;
            let mut j = i + 1;
            if tok == "set" && j < tokens.len() && tokens[j] == "up" {
                drop[j] = true;
                j += 1;
            }
            if j < tokens.len() && matches!(tokens[j].as_str(), "a" | "an" | "the") {
                drop[j] = true;
                j += 1;
            }
            i = j;
            continue;
        }

        // Calendar-surface phrases: "to/on/in my calendar", "in google
        // calendar". Domain nouns like "meeting" stay: they are often the
        // only title-bearing words the utterance has.
        if matches!(tok, "to" | "on" | "in")
            && i + 2 < tokens.len()
            && matches!(tokens[i + 1].as_str(), "my" | "the" | "google")
            && tokens[i + 2] == "calendar"
        {
            for k in 0..3 {
                drop[i + k] = true;
            }
            i += 3;
            continue;
        }
        if tok == "calendar" {
            drop[i] = true;
        }
        i += 1;
    }

    let mut remainder: Vec<&str> = tokens
        .iter()
        .zip(&drop)
        .filter(|(_, dropped)| !**dropped)
        .map(|(t, _)| t.as_str())
        .collect();

    // Stripped phrases can leave stop-words dangling at the edges
    // ("meeting in the <morning>"); interior ones stay ("meeting with
    // the ceo").
    while remainder.first().is_some_and(|w| STOP_WORDS.contains(w)) {
        remainder.remove(0);
    }
    while remainder.last().is_some_and(|w| STOP_WORDS.contains(w)) {
        remainder.pop();
    }

    let cleaned_text = remainder.join(" ");
    // The stop-word filter only decides whether anything substantive is
    // left; the emitted title keeps the full remainder.
    let substantive = remainder
        .iter()
        .any(|w| !STOP_WORDS.contains(w) && w.chars().count() > 2);
    let title = if substantive {
        title_case(&remainder)
    } else {
        EN_FALLBACK_TITLE.to_string()
    };

    Normalized { cleaned_text, locale: Locale::En, title }
}

fn normalize_zh(text: &str) -> Normalized {
    let scan = temporal::scan_zh(text);
    let residue = scan.residue;

    // The zh give-up path truncates the original utterance instead of
    // substituting a canned word; both locales' fallbacks are preserved
    // as independently evolved.
    let title = if residue.chars().count() >= 2 {
        residue.clone()
    } else {
        let total = text.chars().count();
        if total > ZH_TRUNCATION_CHARS {
            let head: String = text.chars().take(ZH_TRUNCATION_CHARS).collect();
            format!("{}...", head)
        } else {
            text.to_string()
        }
    };

    Normalized { cleaned_text: residue, locale: Locale::Zh, title }
}

fn title_case(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_detection_is_script_based() {
        assert_eq!(detect_locale("add a meeting tomorrow"), Locale::En);
        assert_eq!(detect_locale("明天开会"), Locale::Zh);
        assert_eq!(detect_locale("meeting 明天"), Locale::Zh);
    }

    #[test]
    fn title_casing() {
        assert_eq!(title_case(&["meeting", "with", "the", "ceo"]), "Meeting With The Ceo");
    }

    #[test]
    fn dangling_stop_words_are_trimmed() {
        let n = normalize_en("schedule a meeting in the morning");
        assert_eq!(n.title, "Meeting");
        assert_eq!(n.cleaned_text, "meeting");
    }
}
