//! Defines the command-line interface structure using clap.

use clap::{Parser, Subcommand};

use crate::core::prompt::{Audience, GptModel};

#[derive(Parser)]
#[command(name = "sermon-studio", version, about = "Sermon drafting assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Generate a sermon draft from a topic or a scripture reference
    Generate {
        /// Sermon topic (exclusive with --verse)
        #[arg(long, conflicts_with = "verse")]
        topic: Option<String>,
        /// Scripture reference to anchor the sermon on
        #[arg(long)]
        verse: Option<String>,
        /// Sermon length in minutes
        #[arg(long)]
        length: Option<u32>,
        /// Target audience
        #[arg(long, value_enum)]
        audience: Option<Audience>,
        /// Chat model to use
        #[arg(long, value_enum)]
        model: Option<GptModel>,
        /// API key override (falls back to the saved key)
        #[arg(long, env = "OPENAI_API_KEY")]
        key: Option<String>,
    },
    /// Edit the working draft in $EDITOR and re-render it
    Edit,
    /// Save the working draft into the sermon store
    Save {
        #[arg(long, help = "Title to save under (defaults to the draft's file name)")]
        title: Option<String>,
    },
    /// List all saved sermons
    List,
    /// Display a saved sermon
    Get { id: String },
    /// Load a saved sermon into the working draft
    Load { id: String },
    /// Delete a sermon by ID
    Delete { id: String },
    /// Copy the working draft (or a saved sermon) to the clipboard
    Copy {
        #[arg(long, help = "ID of a saved sermon to copy instead of the draft")]
        id: Option<String>,
    },
    /// Export to a .doc file (an HTML document under the hood)
    Export {
        #[arg(long, help = "ID of a saved sermon to export instead of the draft")]
        id: Option<String>,
        #[arg(long, help = "Output file path")]
        out: Option<String>,
    },
    /// Open a print-ready page in the browser
    Print {
        #[arg(long, help = "ID of a saved sermon to print instead of the draft")]
        id: Option<String>,
    },
    /// Open the HTML syntax primer in the browser
    Guide,
    /// Manage the stored API key
    #[command(subcommand)]
    Key(KeyCmd),
    /// Start an interactive session (REPL)
    Interactive,
}

#[derive(Subcommand)]
pub enum KeyCmd {
    /// Save the API key (prompts with hidden input when omitted)
    Set { value: Option<String> },
    /// Show the saved API key
    Show,
}
