//! Typed library surface shared by the CLI commands.

mod error;
mod store;

pub use error::{GenerateError, StoreError};
pub use store::{SaveOutcome, SermonStore};
