use crate::cli::{Cmd, KeyCmd};
use crate::core::storage::AppCtx;

pub mod copy;
pub mod delete;
pub mod edit;
pub mod export;
pub mod generate;
pub mod get;
pub mod guide;
pub mod interactive;
pub mod key;
pub mod list;
pub mod load;
pub mod print;
pub mod save;

/// Dispatches the parsed command to the appropriate handler.
pub async fn dispatch(command: Cmd, ctx: &AppCtx) -> Result<(), String> {
    match command {
        Cmd::Generate {
            topic,
            verse,
            length,
            audience,
            model,
            key,
        } => generate::run(ctx, topic, verse, length, audience, model, key).await,
        Cmd::Edit => edit::run(ctx),
        Cmd::Save { title } => save::run(ctx, title.as_deref()),
        Cmd::List => list::run(ctx),
        Cmd::Get { id } => get::run(ctx, &id),
        Cmd::Load { id } => load::run(ctx, &id),
        Cmd::Delete { id } => delete::run(ctx, &id),
        Cmd::Copy { id } => copy::run(ctx, id.as_deref()),
        Cmd::Export { id, out } => export::run(ctx, id.as_deref(), out.as_deref()),
        Cmd::Print { id } => print::run(ctx, id.as_deref()),
        Cmd::Guide => guide::run(ctx),
        Cmd::Key(key_cmd) => match key_cmd {
            KeyCmd::Set { value } => key::set(ctx, value.as_deref()),
            KeyCmd::Show => key::show(ctx),
        },
        Cmd::Interactive => interactive::run(ctx).await,
    }
}
