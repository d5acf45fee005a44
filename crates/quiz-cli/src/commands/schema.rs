use quiz_core::entities::{Answer, Question, Quiz};
use quiz_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `quiz schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&entity_schema(args.entity.into()), flags.format)
}

fn entity_schema(entity: EntityKind) -> schemars::Schema {
    match entity {
        EntityKind::Quiz => schemars::schema_for!(Quiz),
        EntityKind::Question => schemars::schema_for!(Question),
        EntityKind::Answer => schemars::schema_for!(Answer),
    }
}
