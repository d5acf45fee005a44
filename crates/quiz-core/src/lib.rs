//! # quiz-core
//!
//! Entity types and composed read responses shared by the quiz store crates.
//!
//! - Entity structs for quizzes, questions, and answers
//! - `EntityKind` for error reporting and table lookup
//! - Read responses that embed children under their parent

pub mod entities;
pub mod enums;
pub mod responses;
