use console::style;
use dialoguer::Editor;

use crate::api::SermonStore;
use crate::core::render::render_markdown;
use crate::core::storage::AppCtx;

/// Edit the working draft's text, then re-render it through the sanitizer.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let store = SermonStore::new(ctx);
    let mut draft = store
        .draft()
        .map_err(|e| e.to_string())?
        .ok_or("No working draft. Generate or load a sermon first.")?;

    match Editor::new()
        .edit(&draft.raw_text)
        .map_err(|e| format!("Editor error: {}", e))?
    {
        Some(text) => {
            draft.raw_text = text;
            draft.content = render_markdown(&draft.raw_text);
            store.save_draft(&draft).map_err(|e| e.to_string())?;
            println!("{} draft updated", style("•").green().bold());
        }
        None => println!("{} edit aborted, draft unchanged", style("•").yellow().bold()),
    }
    Ok(())
}
