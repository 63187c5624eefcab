use std::fs;

use console::style;

use crate::api::SermonStore;
use crate::core::document::print_document;
use crate::core::storage::AppCtx;

/// Write the print-ready page and open it in the default browser.
pub fn run(ctx: &AppCtx, id: Option<&str>) -> Result<(), String> {
    let store = SermonStore::new(ctx);
    let (title, content) = match id {
        Some(id) => {
            let record = store.find(id).map_err(|e| e.to_string())?;
            (record.title, record.content)
        }
        None => {
            let draft = store
                .draft()
                .map_err(|e| e.to_string())?
                .ok_or("No working draft to print. Generate a sermon first.")?;
            (draft.title, draft.content)
        }
    };

    let path = ctx.base_dir.join("print_preview.html");
    fs::write(&path, print_document(&title, &content)).map_err(|e| format!("Write error: {}", e))?;

    if let Err(e) = open::that(&path) {
        eprintln!(
            "{} could not open a browser: {}",
            style("•").yellow().bold(),
            e
        );
        println!("Open {} manually to print.", path.display());
    } else {
        println!(
            "{} print page opened; use the browser's print dialog",
            style("•").green().bold()
        );
    }
    Ok(())
}
