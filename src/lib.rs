pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{GenerateError, SaveOutcome, SermonStore, StoreError};
