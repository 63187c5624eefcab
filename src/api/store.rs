//! The main entry point for interacting with the sermon store.

use crate::core::storage::{
    read_collection, read_draft, write_collection, write_draft, AppCtx, SermonDraft, SermonRecord,
};

use super::error::StoreError;

/// Outcome of a save: the title either matched an existing record (which was
/// replaced in place) or was new (prepended).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

/// Typed facade over the persisted collection and the working-draft slot.
///
/// Every collection operation reads and rewrites the whole JSON blob. The
/// store assumes a single user in a single process, like the source system's
/// single-tab assumption.
pub struct SermonStore<'a> {
    ctx: &'a AppCtx,
}

impl<'a> SermonStore<'a> {
    pub fn new(ctx: &'a AppCtx) -> Self {
        Self { ctx }
    }

    /// All saved sermons in stored order (most recently created first).
    pub fn list(&self) -> Result<Vec<SermonRecord>, StoreError> {
        read_collection(&self.ctx.sermons_path)
    }

    /// Look a sermon up by ID.
    pub fn find(&self, id: &str) -> Result<SermonRecord, StoreError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Upsert by title: an exact title match is replaced in place, keeping
    /// its position and the collection length; a novel title is prepended.
    pub fn save(&self, record: SermonRecord) -> Result<SaveOutcome, StoreError> {
        let mut records = self.list()?;
        let outcome = match records.iter_mut().find(|r| r.title == record.title) {
            Some(existing) => {
                *existing = record;
                SaveOutcome::Updated
            }
            None => {
                records.insert(0, record);
                SaveOutcome::Created
            }
        };
        write_collection(&self.ctx.sermons_path, &records)?;
        Ok(outcome)
    }

    /// Remove a sermon by ID. An absent ID leaves the collection untouched
    /// and returns `false`.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Ok(false);
        }
        write_collection(&self.ctx.sermons_path, &records)?;
        Ok(true)
    }

    /// The working draft, if one exists.
    pub fn draft(&self) -> Result<Option<SermonDraft>, StoreError> {
        read_draft(&self.ctx.draft_path)
    }

    /// Replace the working draft.
    pub fn save_draft(&self, draft: &SermonDraft) -> Result<(), StoreError> {
        write_draft(&self.ctx.draft_path, draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::sanitize;
    use crate::core::storage::AppCtx;

    fn scratch() -> (tempfile::TempDir, AppCtx) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppCtx::at(dir.path()).unwrap();
        (dir, ctx)
    }

    fn record(id: &str, title: &str, body: &str) -> SermonRecord {
        SermonRecord {
            id: id.to_string(),
            title: title.to_string(),
            content: sanitize(body),
            bible_verse: "요 3:16".to_string(),
            target_audience: "성도".to_string(),
            sermon_length: 10,
        }
    }

    #[test]
    fn novel_titles_prepend() {
        let (_dir, ctx) = scratch();
        let store = SermonStore::new(&ctx);

        assert_eq!(store.save(record("1", "첫째", "<p>a</p>")).unwrap(), SaveOutcome::Created);
        assert_eq!(store.save(record("2", "둘째", "<p>b</p>")).unwrap(), SaveOutcome::Created);

        let records = store.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "둘째");
        assert_eq!(records[1].title, "첫째");
    }

    #[test]
    fn matching_title_overwrites_in_place() {
        let (_dir, ctx) = scratch();
        let store = SermonStore::new(&ctx);

        store.save(record("1", "첫째", "<p>a</p>")).unwrap();
        store.save(record("2", "둘째", "<p>b</p>")).unwrap();
        assert_eq!(
            store.save(record("3", "첫째", "<p>새 본문</p>")).unwrap(),
            SaveOutcome::Updated
        );

        let records = store.list().unwrap();
        assert_eq!(records.len(), 2);
        // The overwritten record keeps its position but carries the new body.
        assert_eq!(records[1].title, "첫째");
        assert_eq!(records[1].id, "3");
        assert_eq!(records[1].content.as_str(), "<p>새 본문</p>");
    }

    #[test]
    fn delete_removes_exactly_one() {
        let (_dir, ctx) = scratch();
        let store = SermonStore::new(&ctx);

        store.save(record("1", "첫째", "<p>a</p>")).unwrap();
        store.save(record("2", "둘째", "<p>b</p>")).unwrap();

        assert!(store.delete("1").unwrap());
        let records = store.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "2");
    }

    #[test]
    fn deleting_an_absent_id_changes_nothing() {
        let (_dir, ctx) = scratch();
        let store = SermonStore::new(&ctx);

        store.save(record("1", "첫째", "<p>a</p>")).unwrap();
        assert!(!store.delete("999").unwrap());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn saved_records_round_trip() {
        let (_dir, ctx) = scratch();
        let store = SermonStore::new(&ctx);

        let original = record("1700000000000", "은혜", "<h1>제목</h1><p>본문</p>");
        store.save(original.clone()).unwrap();

        let loaded = store.find("1700000000000").unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn find_unknown_id_is_not_found() {
        let (_dir, ctx) = scratch();
        let store = SermonStore::new(&ctx);
        assert!(matches!(
            store.find("nope"),
            Err(StoreError::NotFound(id)) if id == "nope"
        ));
    }

    #[test]
    fn draft_slot_round_trips() {
        let (_dir, ctx) = scratch();
        let store = SermonStore::new(&ctx);

        assert!(store.draft().unwrap().is_none());

        let draft = SermonDraft {
            title: "하나님의 사랑".to_string(),
            bible_verse: String::new(),
            target_audience: "성도".to_string(),
            sermon_length: 10,
            model: "gpt-4.1-mini".to_string(),
            prompt: "프롬프트".to_string(),
            raw_text: "# 제목".to_string(),
            content: sanitize("<h1>제목</h1>"),
            file_name: "제목: 하나님의 사랑".to_string(),
        };
        store.save_draft(&draft).unwrap();

        let loaded = store.draft().unwrap().unwrap();
        assert_eq!(loaded.title, draft.title);
        assert_eq!(loaded.raw_text, draft.raw_text);
        assert_eq!(loaded.content, draft.content);
    }
}
