pub mod header;
pub mod match_result;
pub mod question;

pub use header::{HeaderFlags, MessageHeader, HEADER_SIZE};
pub use match_result::MatchResult;
pub use question::{Question, QuestionName};
