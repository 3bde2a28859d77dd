use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while serving a prediction or starting the server.
///
/// Variants reached while handling a request display the underlying message
/// unchanged, since that text is returned to the caller as the failure detail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Model(String),

    #[error("{0}")]
    Decode(#[from] base64::DecodeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{}", error_chain(.0))]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }
}

/// Joins an error with its sources, `"outer: cause: root cause"`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
