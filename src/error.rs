use thiserror::Error;

/// Invalid command line input.
#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("Invalid hex color: {0} (expected RRGGBB, e.g. 1a1b26)")]
    InvalidColor(String),
    #[error("Invalid value for {option}: {value}")]
    InvalidValue { option: &'static str, value: String },
    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Fatal runtime failures. Nothing here is retried.
#[derive(Error, Debug)]
pub enum FireworksError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("no drawing surface: terminal is {cols}x{rows}")]
    NoSurface { cols: u16, rows: u16 },
    #[error("audio output unavailable: {0}")]
    Audio(String),
    #[error("cannot open log file: {0}")]
    Log(std::io::Error),
}

pub type Result<T> = std::result::Result<T, FireworksError>;
