pub mod parse;
pub mod read;

use quiz_core::enums::EntityKind;
use quiz_core::responses::AckResponse;

pub fn updated(entity: EntityKind) -> AckResponse {
    AckResponse::new(format!("{} updated successfully", entity.label()))
}

pub fn deleted(entity: EntityKind) -> AckResponse {
    AckResponse::new(format!("{} deleted successfully", entity.label()))
}
