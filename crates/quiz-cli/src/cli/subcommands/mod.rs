mod answer;
mod question;
mod quiz;

pub use answer::AnswerCommands;
pub use question::QuestionCommands;
pub use quiz::QuizCommands;
