use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use spinners::{Spinner, Spinners};

use crate::api::{GenerateError, SermonStore};
use crate::core::document::suggested_file_name;
use crate::core::keys::load_api_key;
use crate::core::llm::complete;
use crate::core::prompt::{build_prompt, Audience, GptModel, PromptInput, SermonSource};
use crate::core::render::render_markdown;
use crate::core::storage::{AppCtx, SermonDraft};

/// Generate a sermon and place it in the working draft.
pub async fn run(
    ctx: &AppCtx,
    topic: Option<String>,
    verse: Option<String>,
    length: Option<u32>,
    audience: Option<Audience>,
    model: Option<GptModel>,
    key: Option<String>,
) -> Result<(), String> {
    let api_key = key
        .or_else(|| load_api_key(ctx))
        .ok_or_else(|| GenerateError::MissingApiKey.to_string())?;

    let (source, topic, verse) = match (topic, verse) {
        (Some(topic), None) => (SermonSource::Topic, topic, String::new()),
        (None, Some(verse)) => (SermonSource::Verse, String::new(), verse),
        _ => ask_subject()?,
    };

    let length = length.unwrap_or(ctx.config.length);
    let audience = audience.unwrap_or(ctx.config.audience);
    let model = model.unwrap_or(ctx.config.model);

    let input = PromptInput {
        source,
        topic: topic.clone(),
        verse: verse.clone(),
        length_minutes: length,
        audience,
    };
    let prompt = build_prompt(&input);
    println!(
        "{} prompt prepared for {}",
        style("•").green().bold(),
        style(model.as_str()).yellow()
    );

    let mut sp = Spinner::new(Spinners::Dots9, "Waiting for the sermon...".into());
    let markdown = match complete(
        &prompt,
        &api_key,
        model,
        ctx.config.base_url.as_deref(),
        ctx.config.timeout,
    )
    .await
    {
        Ok(text) => {
            sp.stop_with_message("✔ Sermon received.".into());
            text
        }
        Err(e) => {
            sp.stop_with_message("✘ Request failed.".into());
            return Err(e.to_string());
        }
    };

    let content = render_markdown(&markdown);
    let title = match source {
        SermonSource::Topic => topic.clone(),
        SermonSource::Verse => verse.clone(),
    };
    let file_name = suggested_file_name(&topic, &verse, audience.label(), length);

    let draft = SermonDraft {
        title,
        bible_verse: verse,
        target_audience: audience.label().to_string(),
        sermon_length: length,
        model: model.as_str().to_string(),
        prompt,
        raw_text: markdown.clone(),
        content,
        file_name,
    };
    SermonStore::new(ctx)
        .save_draft(&draft)
        .map_err(|e| e.to_string())?;

    println!("\n{}", markdown);
    println!(
        "\n{} draft saved; use `edit`, `save`, `export`, or `print` next",
        style("•").green().bold()
    );
    Ok(())
}

/// Interactive prompt for the sermon subject when no flags are given.
fn ask_subject() -> Result<(SermonSource, String, String), String> {
    let theme = ColorfulTheme::default();
    let choice = Select::with_theme(&theme)
        .with_prompt("Anchor the sermon on")
        .items(&["Sermon topic", "Bible verse"])
        .default(0)
        .interact()
        .map_err(|e| format!("Selection error: {}", e))?;

    if choice == 0 {
        let topic: String = Input::with_theme(&theme)
            .with_prompt("Topic")
            .interact_text()
            .map_err(|e| format!("Topic error: {}", e))?;
        if topic.trim().is_empty() {
            return Err("Topic cannot be empty".to_string());
        }
        Ok((SermonSource::Topic, topic, String::new()))
    } else {
        let verse: String = Input::with_theme(&theme)
            .with_prompt("Verse")
            .interact_text()
            .map_err(|e| format!("Verse error: {}", e))?;
        if verse.trim().is_empty() {
            return Err("Verse cannot be empty".to_string());
        }
        Ok((SermonSource::Verse, String::new(), verse))
    }
}
