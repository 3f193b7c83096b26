// File: src/scheduler.rs
//! The scheduling collaborator seam. The real surface (a browser-driven
//! third-party calendar UI) lives outside this crate; the core only needs
//! the submit/retry contract. `SimulatedCalendar` is the in-process
//! implementation used by the CLI and the tests.

use crate::model::ParsedEvent;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Outcome of one submit/retry call. `conflict` is a normal branch of the
/// protocol, not an error; transport failures surface as `Err` instead.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitOutcome {
    pub ok: bool,
    pub conflict: bool,
    pub message: String,
}

impl SubmitOutcome {
    pub fn booked(message: String) -> Self {
        Self { ok: true, conflict: false, message }
    }

    pub fn conflict(message: String) -> Self {
        Self { ok: false, conflict: true, message }
    }
}

/// External scheduling collaborator. Called at most once per
/// schedule/reschedule invocation; the session wraps every call in a
/// timeout and treats `Err` as a recoverable outage.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn submit(&self, event: &ParsedEvent) -> Result<SubmitOutcome>;

    /// Resubmission after a conflict. Collaborators that make no
    /// distinction simply submit again.
    async fn retry(&self, event: &ParsedEvent) -> Result<SubmitOutcome> {
        self.submit(event).await
    }
}

#[derive(Debug, Clone)]
struct BookedSlot {
    title: String,
    start: NaiveTime,
    end: NaiveTime,
}

/// In-memory calendar with same-day overlap detection and an optional
/// random "busy" dice for demo realism.
#[derive(Default)]
pub struct SimulatedCalendar {
    days: Mutex<HashMap<NaiveDate, Vec<BookedSlot>>>,
    busy_chance: f32,
}

impl SimulatedCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// `chance` in [0, 1]: probability that a free slot is still reported
    /// busy, mimicking an externally owned calendar the core cannot see.
    pub fn with_busy_chance(chance: f32) -> Self {
        Self { days: Mutex::new(HashMap::new()), busy_chance: chance.clamp(0.0, 1.0) }
    }

    pub async fn booked_count(&self) -> usize {
        self.days.lock().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl Scheduler for SimulatedCalendar {
    async fn submit(&self, event: &ParsedEvent) -> Result<SubmitOutcome> {
        let mut days = self.days.lock().await;
        let slots = days.entry(event.date).or_default();

        if let Some(existing) = slots
            .iter()
            .find(|s| s.start < event.end && event.start < s.end)
        {
            log::info!(
                "conflict on {}: '{}' overlaps '{}'",
                event.date,
                event.title,
                existing.title
            );
            return Ok(SubmitOutcome::conflict(format!(
                "'{}' already occupies {} from {} to {}.",
                existing.title,
                event.date,
                existing.start.format("%H:%M"),
                existing.end.format("%H:%M")
            )));
        }

        if self.busy_chance > 0.0 && fastrand::f32() < self.busy_chance {
            return Ok(SubmitOutcome::conflict(format!(
                "The slot {} is marked busy.",
                event.slot_description()
            )));
        }

        slots.push(BookedSlot {
            title: event.title.clone(),
            start: event.start,
            end: event.end,
        });
        log::info!("booked '{}' ({}) at {}", event.title, event.uid, event.slot_description());
        Ok(SubmitOutcome::booked(format!(
            "Scheduled '{}' on {}.",
            event.title,
            event.slot_description()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_utterance;

    #[tokio::test]
    async fn overlap_is_reported_as_conflict() {
        let cal = SimulatedCalendar::new();
        let a = parse_utterance("team sync tomorrow at 10 am").unwrap();
        let b = parse_utterance("one on one tomorrow 10:30 to 11:30").unwrap();
        let c = parse_utterance("lunch tomorrow at noon").unwrap();

        assert!(cal.submit(&a).await.unwrap().ok);
        let outcome = cal.submit(&b).await.unwrap();
        assert!(outcome.conflict);
        assert!(outcome.message.contains("Team Sync"));
        assert!(cal.submit(&c).await.unwrap().ok);
        assert_eq!(cal.booked_count().await, 2);
    }
}
