use std::io::Read;

use anyhow::Context;
use quiz_db::error::DatabaseError;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `quiz import`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_document(&args.file)?;
    let summary = ctx.service.import_document(document).await?;
    output(&summary, flags.format)
}

fn read_document(source: &str) -> anyhow::Result<Value> {
    let raw = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read import file '{source}'"))?
    };
    serde_json::from_str(&raw).map_err(|error| {
        anyhow::Error::from(DatabaseError::Validation(format!(
            "'{source}' is not valid JSON: {error}"
        )))
    })
}
