// File: src/session.rs
//! Dialogue state machine. One pending conflict at most: a fresh schedule
//! request supersedes whatever was waiting, and a reschedule inherits the
//! unstated fields of the pending event.

use crate::model::{Locale, ParsedEvent};
use crate::parser;
use crate::scheduler::Scheduler;
use anyhow::Result;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// The event last rejected with a conflict, held until the user answers.
#[derive(Debug, Clone)]
pub struct PendingConflict {
    pub event: ParsedEvent,
    pub attempts: u32,
}

/// User-facing outcome of one dialogue turn.
#[derive(Debug, Clone)]
pub enum Response {
    Scheduled { event: ParsedEvent, message: String },
    Conflict { event: ParsedEvent, message: String },
    NothingPending { message: String },
    RetriesExhausted { message: String },
    Unavailable { message: String },
    EmptyInput { message: String },
}

impl Response {
    pub fn message(&self) -> &str {
        match self {
            Response::Scheduled { message, .. }
            | Response::Conflict { message, .. }
            | Response::NothingPending { message }
            | Response::RetriesExhausted { message }
            | Response::Unavailable { message }
            | Response::EmptyInput { message } => message,
        }
    }

    pub fn event(&self) -> Option<&ParsedEvent> {
        match self {
            Response::Scheduled { event, .. } | Response::Conflict { event, .. } => Some(event),
            _ => None,
        }
    }
}

pub struct Session {
    scheduler: Arc<dyn Scheduler>,
    pending: Mutex<Option<PendingConflict>>,
    submit_timeout: Duration,
    /// `None` means the user may answer conflicts indefinitely.
    max_reschedule_attempts: Option<u32>,
    locale_override: Option<Locale>,
}

impl Session {
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            pending: Mutex::new(None),
            submit_timeout: Duration::from_secs(30),
            max_reschedule_attempts: None,
            locale_override: None,
        }
    }

    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    pub fn with_max_reschedule_attempts(mut self, limit: Option<u32>) -> Self {
        self.max_reschedule_attempts = limit;
        self
    }

    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        self.locale_override = locale;
        self
    }

    pub async fn pending(&self) -> Option<PendingConflict> {
        self.pending.lock().await.clone()
    }

    /// Handles a fresh scheduling utterance. Any conflict still waiting
    /// for an answer is discarded first.
    pub async fn schedule(&self, input: &str) -> Result<Response> {
        if input.trim().is_empty() {
            return Ok(Response::EmptyInput {
                message: "I didn't catch that. What would you like to schedule?".to_string(),
            });
        }

        {
            let mut pending = self.pending.lock().await;
            if let Some(old) = pending.take() {
                log::debug!("superseding pending conflict for '{}'", old.event.title);
            }
        }

        let event =
            parser::parse_utterance_at(input, Local::now().naive_local(), self.locale_override)?;
        self.submit_new(event).await
    }

    async fn submit_new(&self, event: ParsedEvent) -> Result<Response> {
        let outcome =
            tokio::time::timeout(self.submit_timeout, self.scheduler.submit(&event)).await;
        match outcome {
            Ok(Ok(res)) if res.ok => Ok(Response::Scheduled { message: res.message, event }),
            Ok(Ok(res)) => {
                let message = format!(
                    "{} '{}' could not be booked at {}. When should I try instead?",
                    res.message,
                    event.title,
                    event.slot_description()
                );
                let mut pending = self.pending.lock().await;
                *pending = Some(PendingConflict { event: event.clone(), attempts: 0 });
                Ok(Response::Conflict { event, message })
            }
            Ok(Err(err)) => {
                log::warn!("scheduler error: {err:#}");
                Ok(Response::Unavailable {
                    message: "The calendar is not reachable right now. Please try again."
                        .to_string(),
                })
            }
            Err(_) => {
                log::warn!("scheduler timed out after {:?}", self.submit_timeout);
                Ok(Response::Unavailable {
                    message: "The calendar took too long to answer. Please try again.".to_string(),
                })
            }
        }
    }

    /// Handles the answer to a conflict prompt. The reply usually names
    /// only a new time ("3 pm instead"), so unstated fields carry over
    /// from the pending event.
    pub async fn reschedule(&self, input: &str) -> Result<Response> {
        if input.trim().is_empty() {
            return Ok(Response::EmptyInput {
                message: "I didn't catch that. When should I move it to?".to_string(),
            });
        }

        let Some(waiting) = self.pending.lock().await.clone() else {
            return Ok(Response::NothingPending {
                message: "There is no conflicted event to move.".to_string(),
            });
        };

        let fresh =
            parser::parse_utterance_at(input, Local::now().naive_local(), self.locale_override)?;
        let event = merge_pending(&waiting.event, fresh);

        let outcome = tokio::time::timeout(self.submit_timeout, self.scheduler.retry(&event)).await;
        match outcome {
            Ok(Ok(res)) if res.ok => {
                *self.pending.lock().await = None;
                Ok(Response::Scheduled { message: res.message, event })
            }
            Ok(Ok(res)) => {
                let attempts = waiting.attempts + 1;
                if let Some(limit) = self.max_reschedule_attempts
                    && attempts >= limit
                {
                    *self.pending.lock().await = None;
                    return Ok(Response::RetriesExhausted {
                        message: format!(
                            "Still no luck after {attempts} attempts. I've set '{}' aside; \
                             start over whenever you like.",
                            event.title
                        ),
                    });
                }
                let message = format!(
                    "{} '{}' still conflicts at {}. When should I try instead?",
                    res.message,
                    event.title,
                    event.slot_description()
                );
                *self.pending.lock().await =
                    Some(PendingConflict { event: event.clone(), attempts });
                Ok(Response::Conflict { event, message })
            }
            Ok(Err(err)) => {
                // Pending survives an outage; the user can answer again.
                log::warn!("scheduler error during reschedule: {err:#}");
                Ok(Response::Unavailable {
                    message: "The calendar is not reachable right now. Please try again."
                        .to_string(),
                })
            }
            Err(_) => {
                log::warn!("scheduler timed out after {:?}", self.submit_timeout);
                Ok(Response::Unavailable {
                    message: "The calendar took too long to answer. Please try again.".to_string(),
                })
            }
        }
    }
}

/// A reschedule reply overrides only what it states. The title always
/// comes from the pending event; a reply like "3 pm instead" would
/// otherwise rename the meeting to its own residue.
fn merge_pending(pending: &ParsedEvent, fresh: ParsedEvent) -> ParsedEvent {
    let mut event = fresh;
    event.uid = pending.uid.clone();
    event.title = pending.title.clone();
    if !event.date_explicit {
        event.date = pending.date;
        event.date_explicit = pending.date_explicit;
    }
    if !event.time_explicit {
        event.start = pending.start;
        event.end = pending.end;
        event.duration_minutes = pending.duration_minutes;
        event.time_explicit = pending.time_explicit;
    }
    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(title: &str, date: (i32, u32, u32), start: (u32, u32), end: (u32, u32)) -> ParsedEvent {
        let start = chrono::NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap();
        let end = chrono::NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap();
        ParsedEvent {
            uid: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
            confidence: 1.0,
            date_explicit: true,
            time_explicit: true,
            locale: Locale::En,
            raw_text: String::new(),
        }
    }

    #[test]
    fn merge_keeps_title_and_unstated_date() {
        let pending = event("Board Review", (2024, 5, 7), (10, 0), (11, 0));
        let mut reply = event("Instead", (2024, 1, 1), (15, 0), (16, 0));
        reply.date_explicit = false;

        let merged = merge_pending(&pending, reply);
        assert_eq!(merged.title, "Board Review");
        assert_eq!(merged.date, pending.date);
        assert_eq!(merged.start, chrono::NaiveTime::from_hms_opt(15, 0, 0).unwrap());
        assert_eq!(merged.uid, pending.uid);
    }

    #[test]
    fn merge_keeps_slot_when_only_date_changes() {
        let pending = event("Board Review", (2024, 5, 7), (10, 0), (11, 0));
        let mut reply = event("", (2024, 5, 9), (10, 0), (11, 0));
        reply.time_explicit = false;

        let merged = merge_pending(&pending, reply);
        assert_eq!(merged.date, NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
        assert_eq!(merged.start, pending.start);
        assert_eq!(merged.end, pending.end);
    }
}
