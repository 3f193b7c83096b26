// Crate root library declaration and module exports.
pub mod config;
pub mod context;
pub mod model;
pub mod parser;
pub mod scheduler;
pub mod session;
