use clap::Subcommand;

/// Question commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// Get a question with its answers.
    Get {
        id: i64,
        /// Fail instead of omitting answers that cannot be read.
        #[arg(long)]
        strict: bool,
    },
    /// Update the given fields of a question.
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete a question. Its answers are kept.
    Delete { id: i64 },
    /// List the answers of a question.
    Answers { id: i64 },
    /// Create an answer under a question.
    AddAnswer {
        id: i64,
        #[arg(long)]
        data: String,
    },
}
