use std::path::PathBuf;
use thiserror::Error;

/// Why a failed analysis happened, as far as recovery is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RateLimited,
    Timeout,
    Other,
}

impl ErrorKind {
    /// Parse the optional `kind` tag of an API error body.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "rate_limited" | "rate_limit" => Some(ErrorKind::RateLimited),
            "timeout" | "timed_out" => Some(ErrorKind::Timeout),
            _ => None,
        }
    }

    pub fn from_status(status: u16) -> Self {
        match status {
            429 => ErrorKind::RateLimited,
            408 | 504 => ErrorKind::Timeout,
            _ => ErrorKind::Other,
        }
    }

    /// Failures that steer the user towards pasting text instead of a URL.
    pub fn suggests_text_mode(self) -> bool {
        matches!(self, ErrorKind::RateLimited | ErrorKind::Timeout)
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("server error {status}: {message}")]
    Server {
        status: u16,
        message: String,
        kind: ErrorKind,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Timeout => ErrorKind::Timeout,
            ApiError::Server { kind, .. } => *kind,
            ApiError::Transport(_) | ApiError::Decode(_) => ErrorKind::Other,
        }
    }

    /// The error string supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Reasons `submit` refuses to produce a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a request is already in flight")]
    Busy,

    #[error("{0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),
}

impl Error {
    /// Exit code for headless runs.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Analysis(_) => 2,
            Error::Config(_) | Error::ConfigParse { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
