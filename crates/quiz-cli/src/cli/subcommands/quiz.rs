use clap::Subcommand;

/// Quiz commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// List all quizzes.
    List,
    /// Get a quiz with its questions.
    Get {
        id: i64,
        /// Fail instead of omitting questions that cannot be read.
        #[arg(long)]
        strict: bool,
    },
    /// Create a quiz from a JSON object.
    Create {
        #[arg(long)]
        data: String,
    },
    /// Update the given fields of a quiz.
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete a quiz. Its questions are kept.
    Delete { id: i64 },
    /// List the questions of a quiz.
    Questions { id: i64 },
    /// Create a question under a quiz.
    AddQuestion {
        id: i64,
        #[arg(long)]
        data: String,
    },
}
