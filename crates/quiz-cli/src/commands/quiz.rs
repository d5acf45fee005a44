use quiz_core::enums::EntityKind;
use quiz_core::responses::{CreatedResponse, QuizView};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuizCommands;
use crate::commands::shared::parse::{parse_fields, with_parent};
use crate::commands::shared::read::settle;
use crate::commands::shared::{deleted, updated};
use crate::context::AppContext;
use crate::output::output;

/// Handle `quiz quiz`.
pub async fn handle(
    action: &QuizCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        QuizCommands::List => output(&svc.quizzes().list().await?, flags.format),
        QuizCommands::Get { id, strict } => {
            let composed = svc.aggregator().quiz_with_questions(*id).await?;
            let (quiz, questions) = settle(composed, ctx.strict_reads(*strict))?;
            output(&QuizView::new(quiz, questions), flags.format)
        }
        QuizCommands::Create { data } => {
            let id = svc.create_quiz(parse_fields(data)?).await?;
            output(&CreatedResponse { id }, flags.format)
        }
        QuizCommands::Update { id, data } => {
            svc.update_quiz(*id, parse_fields(data)?).await?;
            output(&updated(EntityKind::Quiz), flags.format)
        }
        QuizCommands::Delete { id } => {
            svc.quizzes().delete(*id).await?;
            output(&deleted(EntityKind::Quiz), flags.format)
        }
        QuizCommands::Questions { id } => {
            output(&svc.questions().get_by_quiz(*id).await?, flags.format)
        }
        QuizCommands::AddQuestion { id, data } => {
            let fields = with_parent(parse_fields(data)?, "quiz_id", *id);
            let id = svc.create_question(fields).await?;
            output(&CreatedResponse { id }, flags.format)
        }
    }
}
