// File: src/model/event.rs
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

fn default_uid() -> String {
    Uuid::new_v4().to_string()
}

/// Which keyword/numeral tables apply to an utterance.
/// Detected from the script of the input; a config override wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// The canonical output of the extraction pipeline: a normalized event
/// ready for submission to the scheduling collaborator. This is also the
/// payload shape any transport (HTTP, socket, CLI) emits to its client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEvent {
    #[serde(default = "default_uid")]
    pub uid: String,
    /// Never empty. Falls back to "Meeting" (en) or a truncation of the
    /// utterance (zh) when extraction yields nothing usable.
    pub title: String,
    pub date: NaiveDate,
    /// Invariant: `end` is strictly after `start` in wall-clock terms.
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i64,
    /// 1.0 when both date and time were explicitly matched, degraded when
    /// either was defaulted. Informational only; nothing branches on it.
    pub confidence: f32,
    /// Whether the date was matched by a rule rather than defaulted.
    pub date_explicit: bool,
    /// Whether a clock time was matched rather than defaulted.
    pub time_explicit: bool,
    pub locale: Locale,
    pub raw_text: String,
}

impl ParsedEvent {
    /// Human-readable slot, used in conflict and confirmation messages.
    pub fn slot_description(&self) -> String {
        format!(
            "{} from {} to {}",
            self.date,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}
