pub mod load_zone;

pub use load_zone::LoadZoneUseCase;
