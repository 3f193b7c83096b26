// File: src/parser/mod.rs
//! The utterance-to-event extraction pipeline.
//!
//! Title fields come from the normalized text, temporal fields from a
//! re-scan of the original utterance. Extraction never fails once input
//! is non-empty: every unmatched rule falls through to a documented
//! default, and the `*_explicit` flags plus `confidence` record when that
//! happened.

pub mod lexicon;
pub mod normalize;
pub mod numerals;
pub mod temporal;

pub use normalize::{Normalized, detect_locale};
pub use temporal::{DEFAULT_DURATION_MINS, FALLBACK_START, TemporalSpan};

use crate::model::{Locale, ParsedEvent};
use anyhow::{Result, bail};
use chrono::{Local, NaiveDateTime};
use uuid::Uuid;

/// Parses an utterance against the current wall clock.
pub fn parse_utterance(text: &str) -> Result<ParsedEvent> {
    parse_utterance_at(text, Local::now().naive_local(), None)
}

/// Parses an utterance against an explicit reference instant. `now` is
/// consulted exactly once, so re-running on the same input and instant is
/// idempotent.
pub fn parse_utterance_at(
    text: &str,
    now: NaiveDateTime,
    locale_override: Option<Locale>,
) -> Result<ParsedEvent> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        bail!("no input provided");
    }

    let locale = locale_override.unwrap_or_else(|| normalize::detect_locale(trimmed));
    let norm = normalize::normalize(trimmed, locale);
    let span = temporal::resolve(trimmed, locale, now);

    let confidence = match (span.date_explicit, span.time_explicit) {
        (true, true) => 1.0,
        (false, false) => 0.4,
        _ => 0.7,
    };

    let event = ParsedEvent {
        uid: Uuid::new_v4().to_string(),
        title: norm.title,
        date: span.date,
        start: span.start,
        end: span.end,
        duration_minutes: span.duration_minutes(),
        confidence,
        date_explicit: span.date_explicit,
        time_explicit: span.time_explicit,
        locale,
        raw_text: trimmed.to_string(),
    };
    log::debug!(
        "parsed '{}' -> '{}' at {} (confidence {:.1})",
        trimmed,
        event.title,
        event.slot_description(),
        confidence
    );
    Ok(event)
}
