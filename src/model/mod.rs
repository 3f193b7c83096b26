// File: src/model/mod.rs
mod event;

pub use event::{Locale, ParsedEvent};
