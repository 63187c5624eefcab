use console::style;
use dialoguer::{theme::ColorfulTheme, Password};

use crate::core::keys::{load_api_key, save_api_key};
use crate::core::storage::AppCtx;

/// Save the API key. Slot failures are logged, not surfaced; the slot simply
/// reads back as empty on the next load.
pub fn set(ctx: &AppCtx, value: Option<&str>) -> Result<(), String> {
    let key = match value {
        Some(v) => v.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("API Key")
            .interact()
            .map_err(|e| format!("Input error: {}", e))?,
    };
    if key.trim().is_empty() {
        return Err("API key cannot be empty".to_string());
    }

    save_api_key(ctx, key.trim());
    println!("{} API key saved", style("•").green().bold());
    Ok(())
}

/// Show the saved API key.
pub fn show(ctx: &AppCtx) -> Result<(), String> {
    match load_api_key(ctx) {
        Some(key) => println!("{} {}", style("•").green().bold(), key),
        None => println!("{}", style("No API key saved").yellow()),
    }
    Ok(())
}
