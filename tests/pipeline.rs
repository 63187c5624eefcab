//! The full drafting pipeline, exercised with a canned completion in place
//! of the network call.

use sermon_studio::core::prompt::{build_prompt, Audience, PromptInput, SermonSource};
use sermon_studio::core::render::render_markdown;
use sermon_studio::core::storage::{AppCtx, SermonDraft, SermonRecord};
use sermon_studio::core::utils::new_record_id;
use sermon_studio::{SaveOutcome, SermonStore};

#[test]
fn topic_to_saved_record() {
    // Prompt construction.
    let input = PromptInput {
        source: SermonSource::Topic,
        topic: "하나님의 사랑".to_string(),
        verse: String::new(),
        length_minutes: 10,
        audience: Audience::Congregation,
    };
    let prompt = build_prompt(&input);
    assert!(prompt.contains("하나님의 사랑"));
    assert!(prompt.contains("5000"));

    // A canned model reply stands in for the completion client.
    let reply = "# Title\n\nBody";
    let content = render_markdown(reply);
    assert!(content.as_str().contains("<h1>Title</h1>"));
    assert!(content.as_str().contains("<p>Body</p>"));

    // Saving with a fresh title prepends exactly one record.
    let dir = tempfile::tempdir().unwrap();
    let ctx = AppCtx::at(dir.path()).unwrap();
    let store = SermonStore::new(&ctx);

    let record = SermonRecord {
        id: new_record_id(),
        title: "Test".to_string(),
        content,
        bible_verse: "성경 구절 없음".to_string(),
        target_audience: "성도".to_string(),
        sermon_length: 10,
    };
    assert_eq!(store.save(record).unwrap(), SaveOutcome::Created);

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Test");
    assert_eq!(listed[0].sermon_length, 10);
}

#[test]
fn loaded_record_becomes_the_draft_and_reedits_safely() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = AppCtx::at(dir.path()).unwrap();
    let store = SermonStore::new(&ctx);

    let content = render_markdown("# 은혜\n\n말씀 본문");
    let record = SermonRecord {
        id: new_record_id(),
        title: "은혜".to_string(),
        content: content.clone(),
        bible_verse: "엡 2:8".to_string(),
        target_audience: "성도".to_string(),
        sermon_length: 15,
    };
    store.save(record.clone()).unwrap();

    // Load: the stored HTML becomes the editable raw text.
    let draft = SermonDraft::from_record(&record);
    store.save_draft(&draft).unwrap();
    let loaded = store.draft().unwrap().unwrap();
    assert_eq!(loaded.title, "은혜");
    assert_eq!(loaded.raw_text, content.as_str());

    // Re-rendering the loaded HTML is a no-op apart from sanitization.
    let rerendered = render_markdown(&loaded.raw_text);
    assert_eq!(rerendered, content);
}
