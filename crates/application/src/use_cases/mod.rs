pub mod dns;
pub mod zone;

pub use dns::MatchQuestionsUseCase;
pub use zone::LoadZoneUseCase;
