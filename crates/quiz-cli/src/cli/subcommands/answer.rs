use clap::Subcommand;

/// Answer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnswerCommands {
    /// Get an answer.
    Get { id: i64 },
    /// Update the given fields of an answer.
    Update {
        id: i64,
        #[arg(long)]
        data: String,
    },
    /// Delete an answer.
    Delete { id: i64 },
}
