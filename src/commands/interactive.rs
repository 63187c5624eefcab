use std::future::Future;
use std::pin::Pin;

use clap::Parser;
use console::style;
use dialoguer::Input;

use crate::cli::Cli;
use crate::commands::dispatch;
use crate::core::storage::AppCtx;

/// Run the CLI in interactive REPL mode.
pub async fn run(ctx: &AppCtx) -> Result<(), String> {
    println!("Entering interactive mode. Type 'exit' or 'quit' to leave.");
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{}", style("sermon >").blue().bold()))
            .interact_text()
            .map_err(|e| format!("Input error: {}", e))?;

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let args = match shell_words::split(input) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("• Error parsing command: {}", e);
                continue;
            }
        };

        let full_args = std::iter::once("sermon-studio".to_string()).chain(args);

        match Cli::try_parse_from(full_args) {
            Ok(cli) => {
                // Boxed: the REPL recurses into the async dispatcher.
                let fut: Pin<Box<dyn Future<Output = Result<(), String>> + '_>> =
                    Box::pin(dispatch(cli.command, ctx));
                if let Err(e) = fut.await {
                    eprintln!("• {}", e);
                }
            }
            Err(e) => {
                e.print().unwrap_or(());
            }
        }
    }
    Ok(())
}
