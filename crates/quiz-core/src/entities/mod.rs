//! Entity structs for the quiz store.
//!
//! Each entity maps to one table. Identities are integer surrogate keys
//! assigned by the storage engine on insert and never changed afterwards.

mod answer;
mod question;
mod quiz;

pub use answer::Answer;
pub use question::Question;
pub use quiz::Quiz;
