use quiz_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnswerCommands;
use crate::commands::shared::parse::parse_fields;
use crate::commands::shared::{deleted, updated};
use crate::context::AppContext;
use crate::output::output;

/// Handle `quiz answer`.
pub async fn handle(
    action: &AnswerCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        AnswerCommands::Get { id } => output(&svc.answers().get_by_id(*id).await?, flags.format),
        AnswerCommands::Update { id, data } => {
            svc.update_answer(*id, parse_fields(data)?).await?;
            output(&updated(EntityKind::Answer), flags.format)
        }
        AnswerCommands::Delete { id } => {
            svc.answers().delete(*id).await?;
            output(&deleted(EntityKind::Answer), flags.format)
        }
    }
}
