use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Truncated header: got {0} bytes, need 12")]
    TruncatedHeader(usize),

    #[error("Malformed question: {0}")]
    MalformedQuestion(String),

    #[error("Compression offset {0} does not fit in 14 bits")]
    CompressionOffsetOverflow(usize),

    #[error("Zone source I/O error: {0}")]
    StartupIo(String),

    #[error("Invalid zone data: {0}")]
    StartupData(String),
}
