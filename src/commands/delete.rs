use console::style;

use crate::api::SermonStore;
use crate::core::storage::AppCtx;

/// Delete a sermon.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    if SermonStore::new(ctx).delete(id).map_err(|e| e.to_string())? {
        println!("{} sermon {} deleted", style("•").green().bold(), id);
        Ok(())
    } else {
        Err(format!("No sermon with ID {}", id))
    }
}
