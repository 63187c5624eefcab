use console::style;

use crate::api::SermonStore;
use crate::core::storage::{AppCtx, SermonDraft};

/// Load a saved sermon into the working draft, replacing it wholesale.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let store = SermonStore::new(ctx);
    let record = store.find(id).map_err(|e| e.to_string())?;

    let draft = SermonDraft::from_record(&record);
    store.save_draft(&draft).map_err(|e| e.to_string())?;

    println!(
        "{} '{}' loaded into the working draft",
        style("•").green().bold(),
        record.title
    );
    Ok(())
}
