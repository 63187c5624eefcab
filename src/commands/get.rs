use console::style;

use crate::api::SermonStore;
use crate::core::storage::AppCtx;

/// Display a saved sermon.
pub fn run(ctx: &AppCtx, id: &str) -> Result<(), String> {
    let record = SermonStore::new(ctx).find(id).map_err(|e| e.to_string())?;

    println!("{} {}", style("Title:").green().bold(), record.title);
    println!("{} {}", style("Verse:").green().bold(), record.bible_verse);
    println!(
        "{} {}",
        style("Audience:").green().bold(),
        record.target_audience
    );
    println!(
        "{} {}분",
        style("Length:").green().bold(),
        record.sermon_length
    );
    println!("{}", style("Content:").green().bold());
    println!("{}", record.content);
    Ok(())
}
