use std::fs;

use console::style;

use crate::core::storage::AppCtx;

/// The HTML syntax primer shipped with the app.
const GUIDE_HTML: &str = include_str!("../../assets/basic_html.html");

/// Write the bundled primer next to the store and open it in the browser.
pub fn run(ctx: &AppCtx) -> Result<(), String> {
    let path = ctx.base_dir.join("basic_html.html");
    fs::write(&path, GUIDE_HTML).map_err(|e| format!("Write error: {}", e))?;

    if let Err(e) = open::that(&path) {
        eprintln!(
            "{} could not open a browser: {}",
            style("•").yellow().bold(),
            e
        );
        println!("Open {} manually.", path.display());
    } else {
        println!("{} syntax guide opened", style("•").green().bold());
    }
    Ok(())
}
