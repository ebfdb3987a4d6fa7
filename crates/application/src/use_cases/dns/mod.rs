pub mod match_questions;

pub use match_questions::MatchQuestionsUseCase;
