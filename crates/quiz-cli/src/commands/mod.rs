pub mod answer;
pub mod dispatch;
pub mod import;
pub mod question;
pub mod quiz;
pub mod schema;
pub mod shared;
