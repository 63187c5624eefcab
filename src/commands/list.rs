use console::style;

use crate::api::SermonStore;
use crate::core::storage::AppCtx;

/// List every saved sermon.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let records = SermonStore::new(ctx).list().map_err(|e| e.to_string())?;

    if records.is_empty() {
        println!("{}", style("No saved sermons").green().bold());
        return Ok(());
    }

    println!("{}", style("Saved Sermons:").green().bold());
    for record in records {
        println!(
            "  {} {} - {}",
            style("•").green(),
            style(record.id).yellow(),
            record.title
        );
    }
    Ok(())
}
