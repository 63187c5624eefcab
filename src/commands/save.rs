use console::style;

use crate::api::{SaveOutcome, SermonStore};
use crate::core::storage::{AppCtx, SermonRecord};
use crate::core::utils::new_record_id;

/// Persist the working draft. Titles act as upsert keys: an existing title
/// is overwritten in place, a new one is prepended.
pub fn run(ctx: &AppCtx, title: Option<&str>) -> Result<(), String> {
    let store = SermonStore::new(ctx);
    let draft = store
        .draft()
        .map_err(|e| e.to_string())?
        .ok_or("No working draft to save. Generate a sermon first.")?;

    let title = title
        .map(str::to_string)
        .unwrap_or_else(|| draft.file_name.clone());
    let title = if title.trim().is_empty() {
        "제목 없음".to_string()
    } else {
        title
    };
    let bible_verse = if draft.bible_verse.trim().is_empty() {
        "성경 구절 없음".to_string()
    } else {
        draft.bible_verse.clone()
    };
    let target_audience = if draft.target_audience.trim().is_empty() {
        "대상 없음".to_string()
    } else {
        draft.target_audience.clone()
    };

    let record = SermonRecord {
        id: new_record_id(),
        title: title.clone(),
        content: draft.content.clone(),
        bible_verse,
        target_audience,
        sermon_length: draft.sermon_length,
    };

    match store.save(record).map_err(|e| e.to_string())? {
        SaveOutcome::Created => println!(
            "{} sermon saved with title '{}'",
            style("•").green().bold(),
            title
        ),
        SaveOutcome::Updated => println!(
            "{} existing sermon '{}' overwritten",
            style("•").green().bold(),
            title
        ),
    }
    Ok(())
}
