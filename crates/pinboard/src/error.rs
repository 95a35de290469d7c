use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinboardError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Client error: {0}")]
    Client(#[from] pinboard_client::ClientError),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PinboardError>;
