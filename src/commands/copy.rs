use console::style;
use copypasta::{ClipboardContext, ClipboardProvider};

use crate::api::SermonStore;
use crate::core::storage::AppCtx;

/// Copy sermon text to clipboard.
pub fn run(ctx: &AppCtx, id: Option<&str>) -> Result<(), String> {
    let store = SermonStore::new(ctx);
    let text = match id {
        Some(id) => store
            .find(id)
            .map_err(|e| e.to_string())?
            .content
            .into_string(),
        None => {
            store
                .draft()
                .map_err(|e| e.to_string())?
                .ok_or("No working draft to copy. Generate a sermon first.")?
                .raw_text
        }
    };

    let mut ctx_clip = ClipboardContext::new().map_err(|e| format!("Clipboard error: {}", e))?;
    ctx_clip
        .set_contents(text)
        .map_err(|e| format!("Clipboard set error: {}", e))?;

    println!("{} copied to clipboard", style("•").green().bold());
    Ok(())
}
