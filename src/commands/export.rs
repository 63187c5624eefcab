use std::fs;

use console::style;

use crate::api::SermonStore;
use crate::core::document::word_document;
use crate::core::storage::AppCtx;

/// Export a sermon to a `.doc`-labeled HTML document.
pub fn run(ctx: &AppCtx, id: Option<&str>, out: Option<&str>) -> Result<(), String> {
    let store = SermonStore::new(ctx);
    let (title, content, file_name) = match id {
        Some(id) => {
            let record = store.find(id).map_err(|e| e.to_string())?;
            (record.title.clone(), record.content, record.title)
        }
        None => {
            let draft = store
                .draft()
                .map_err(|e| e.to_string())?
                .ok_or("No working draft to export. Generate a sermon first.")?;
            (draft.title, draft.content, draft.file_name)
        }
    };

    let out_path = out
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.doc", file_name));
    let document = word_document(&title, &content);
    fs::write(&out_path, document).map_err(|e| format!("Write error: {}", e))?;

    println!("{} exported to {}", style("•").green().bold(), out_path);
    Ok(())
}
