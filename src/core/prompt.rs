//! Prompt construction for sermon generation.

use std::collections::HashMap;

use clap::ValueEnum;
use regex::Regex;

/// The Korean sermon-writing instructions. `{{var}}` slots are filled by
/// [`build_prompt`]; keeping the text as an asset makes it easy to edit
/// without dealing with Rust string syntax.
const SERMON_PROMPT_TEMPLATE: &str = include_str!("sermon_prompt.txt");

/// Whether the sermon is anchored on a free topic or a scripture reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SermonSource {
    Topic,
    Verse,
}

/// The fixed audience options of the source system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Audience {
    Congregation,
    Toddlers,
    Children,
    Youth,
    YoungAdults,
    MiddleAged,
    Adults,
    Seniors,
    BibleSchool,
    YouthRetreat,
    NewBelievers,
    Revival,
}

impl Audience {
    /// The Korean label embedded in prompts and stored records.
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Congregation => "성도",
            Audience::Toddlers => "유아",
            Audience::Children => "어린이",
            Audience::Youth => "청소년",
            Audience::YoungAdults => "청년",
            Audience::MiddleAged => "중년",
            Audience::Adults => "장년",
            Audience::Seniors => "노년",
            Audience::BibleSchool => "어린이 성경학교",
            Audience::YouthRetreat => "청소년 수련회",
            Audience::NewBelievers => "새신자",
            Audience::Revival => "부흥회",
        }
    }

    /// Accepts either the CLI value name or the Korean label.
    pub fn parse(s: &str) -> Option<Audience> {
        if let Ok(audience) = <Audience as ValueEnum>::from_str(s, true) {
            return Some(audience);
        }
        Audience::value_variants()
            .iter()
            .copied()
            .find(|a| a.label() == s)
    }
}

/// The chat models the app may call; free-form ids are rejected at the CLI
/// boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GptModel {
    #[value(name = "gpt-4.1-mini")]
    Gpt41Mini,
    #[value(name = "gpt-4o-mini")]
    Gpt4oMini,
    #[value(name = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[value(name = "gpt-4.1")]
    Gpt41,
    #[value(name = "gpt-4o")]
    Gpt4o,
}

impl GptModel {
    /// The wire-level model identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            GptModel::Gpt41Mini => "gpt-4.1-mini",
            GptModel::Gpt4oMini => "gpt-4o-mini",
            GptModel::Gpt35Turbo => "gpt-3.5-turbo",
            GptModel::Gpt41 => "gpt-4.1",
            GptModel::Gpt4o => "gpt-4o",
        }
    }
}

/// Everything the prompt depends on. Exactly one of `topic`/`verse` is
/// embedded, chosen by `source`.
#[derive(Clone, Debug)]
pub struct PromptInput {
    pub source: SermonSource,
    pub topic: String,
    pub verse: String,
    pub length_minutes: u32,
    pub audience: Audience,
}

/// Render the sermon prompt: the chosen subject, the duration, a minimum
/// character count of `length_minutes * 500`, and the fixed structural
/// outline. Pure; no randomness, no external state.
pub fn build_prompt(input: &PromptInput) -> String {
    let subject = match input.source {
        SermonSource::Topic => format!("설교 주제: {}", input.topic),
        SermonSource::Verse => format!("성경 구절: {}", input.verse),
    };
    let min_chars = input.length_minutes.saturating_mul(500);

    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("subject", subject);
    vars.insert("length", input.length_minutes.to_string());
    vars.insert("audience", input.audience.label().to_string());
    vars.insert("min_chars", min_chars.to_string());

    let re = Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap();
    re.replace_all(SERMON_PROMPT_TEMPLATE, |caps: &regex::Captures| {
        vars.get(&caps[1]).cloned().unwrap_or_default()
    })
    .to_string()
}
