use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::config::{load_config, AppConfig};
use super::render::SafeHtml;
use super::utils::ensure_dir;
use crate::api::StoreError;

/// A saved sermon. The collection is serialized camelCase as one JSON array,
/// matching the shape the source system kept in browser storage.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SermonRecord {
    pub id: String,
    pub title: String,
    pub content: SafeHtml,
    pub bible_verse: String,
    pub target_audience: String,
    pub sermon_length: u32,
}

/// The working draft: the not-yet-persisted sermon the commands operate on.
/// Replaced wholesale when a saved record is loaded.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SermonDraft {
    pub title: String,
    pub bible_verse: String,
    pub target_audience: String,
    pub sermon_length: u32,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub prompt: String,
    pub raw_text: String,
    pub content: SafeHtml,
    pub file_name: String,
}

impl SermonDraft {
    /// Turn a saved record back into the working draft. The stored HTML
    /// becomes the editable raw text; re-rendering it is idempotent apart
    /// from constructs the sanitizer rejects.
    pub fn from_record(record: &SermonRecord) -> Self {
        SermonDraft {
            title: record.title.clone(),
            bible_verse: record.bible_verse.clone(),
            target_audience: record.target_audience.clone(),
            sermon_length: record.sermon_length,
            model: String::new(),
            prompt: String::new(),
            raw_text: record.content.as_str().to_string(),
            content: record.content.clone(),
            file_name: record.title.clone(),
        }
    }
}

/// Runtime context holding the store paths and loaded configuration.
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub sermons_path: PathBuf,
    pub draft_path: PathBuf,
    pub key_path: PathBuf,
    pub config: AppConfig,
}

impl AppCtx {
    pub fn init() -> Result<Self, String> {
        let home =
            env::var("HOME").map_err(|_| "Unable to determine HOME directory".to_string())?;
        Self::at(&PathBuf::from(home).join(".sermon-studio"))
    }

    /// Open (creating if needed) a store rooted at an explicit directory.
    pub fn at(base_dir: &Path) -> Result<Self, String> {
        ensure_dir(base_dir)?;
        let config = load_config(base_dir)?;
        Ok(Self {
            base_dir: base_dir.to_path_buf(),
            sermons_path: base_dir.join("sermons.json"),
            draft_path: base_dir.join("draft.json"),
            key_path: base_dir.join("api_key"),
            config,
        })
    }
}

/// Read the whole collection blob. A missing file is an empty collection.
pub(crate) fn read_collection(path: &Path) -> Result<Vec<SermonRecord>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write the whole collection blob back.
pub(crate) fn write_collection(path: &Path, records: &[SermonRecord]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(records)?;
    fs::write(path, raw)?;
    Ok(())
}

pub(crate) fn read_draft(path: &Path) -> Result<Option<SermonDraft>, StoreError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

pub(crate) fn write_draft(path: &Path, draft: &SermonDraft) -> Result<(), StoreError> {
    let raw = serde_json::to_string(draft)?;
    fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::sanitize;

    #[test]
    fn record_serializes_camel_case() {
        let record = SermonRecord {
            id: "1700000000000".to_string(),
            title: "Test".to_string(),
            content: sanitize("<p>본문</p>"),
            bible_verse: "요 3:16".to_string(),
            target_audience: "성도".to_string(),
            sermon_length: 10,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"bibleVerse\""));
        assert!(json.contains("\"targetAudience\""));
        assert!(json.contains("\"sermonLength\""));
    }

    #[test]
    fn missing_collection_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppCtx::at(dir.path()).unwrap();
        assert!(read_collection(&ctx.sermons_path).unwrap().is_empty());
        assert!(read_draft(&ctx.draft_path).unwrap().is_none());
    }
}
