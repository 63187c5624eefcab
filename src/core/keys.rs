//! The API-key slot.
//!
//! Storage failures here are logged and never surfaced to the caller; the
//! slot degrades to "no value available".

use std::fs;
use std::io::ErrorKind;

use super::storage::AppCtx;

/// Persist the API key in its slot.
pub fn save_api_key(ctx: &AppCtx, key: &str) {
    match fs::write(&ctx.key_path, key) {
        Ok(()) => log::info!("API key saved"),
        Err(e) => log::warn!("failed to save API key: {}", e),
    }
}

/// Load the API key. Absence and read failures both yield `None`.
pub fn load_api_key(ctx: &AppCtx) -> Option<String> {
    match fs::read_to_string(&ctx.key_path) {
        Ok(key) => {
            let key = key.trim().to_string();
            if key.is_empty() {
                None
            } else {
                Some(key)
            }
        }
        Err(e) => {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("failed to load API key: {}", e);
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppCtx::at(dir.path()).unwrap();

        assert_eq!(load_api_key(&ctx), None);
        save_api_key(&ctx, "sk-test-key");
        assert_eq!(load_api_key(&ctx), Some("sk-test-key".to_string()));
    }

    #[test]
    fn blank_key_counts_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppCtx::at(dir.path()).unwrap();

        save_api_key(&ctx, "   ");
        assert_eq!(load_api_key(&ctx), None);
    }
}
