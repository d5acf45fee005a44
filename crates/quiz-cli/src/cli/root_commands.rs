use clap::{Args, Subcommand, ValueEnum};
use quiz_core::enums::EntityKind;

use crate::cli::subcommands::{AnswerCommands, QuestionCommands, QuizCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Quizzes.
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
    /// Questions.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Answers.
    Answer {
        #[command(subcommand)]
        action: AnswerCommands,
    },
    /// Import a quiz with nested questions and answers from a JSON file.
    Import(ImportArgs),
    /// Print the JSON schema of an entity.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path to the JSON document, or `-` for stdin.
    pub file: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub entity: EntityArg,
}

/// Entity names accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum EntityArg {
    Quiz,
    Question,
    Answer,
}

impl From<EntityArg> for EntityKind {
    fn from(value: EntityArg) -> Self {
        match value {
            EntityArg::Quiz => Self::Quiz,
            EntityArg::Question => Self::Question,
            EntityArg::Answer => Self::Answer,
        }
    }
}
