use quiz_core::enums::EntityKind;
use quiz_core::responses::{CreatedResponse, QuestionView};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::commands::shared::parse::{parse_fields, with_parent};
use crate::commands::shared::read::settle;
use crate::commands::shared::{deleted, updated};
use crate::context::AppContext;
use crate::output::output;

/// Handle `quiz question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        QuestionCommands::Get { id, strict } => {
            let composed = svc.aggregator().question_with_answers(*id).await?;
            let (question, answers) = settle(composed, ctx.strict_reads(*strict))?;
            output(&QuestionView::new(question, answers), flags.format)
        }
        QuestionCommands::Update { id, data } => {
            svc.update_question(*id, parse_fields(data)?).await?;
            output(&updated(EntityKind::Question), flags.format)
        }
        QuestionCommands::Delete { id } => {
            svc.questions().delete(*id).await?;
            output(&deleted(EntityKind::Question), flags.format)
        }
        QuestionCommands::Answers { id } => {
            output(&svc.answers().get_by_question(*id).await?, flags.format)
        }
        QuestionCommands::AddAnswer { id, data } => {
            let fields = with_parent(parse_fields(data)?, "question_id", *id);
            let id = svc.create_answer(fields).await?;
            output(&CreatedResponse { id }, flags.format)
        }
    }
}
