extern crate reqwest;
extern crate serde_json;

use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug)]
pub enum Error {
    Config(String),
    Network(reqwest::Error),
    Parse(String),
    Unsupported(&'static str, &'static str),
    Io(io::Error),
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Network(err) => write!(f, "Error sending request: {}", err),
            Self::Parse(msg) => write!(f, "Error parsing page: {}", msg),
            Self::Unsupported(site, what) => write!(f, "{} does not support {}", site, what),
            Self::Io(err) => write!(f, "Filesystem error: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Config(_) | Self::Parse(_) | Self::Unsupported(_, _) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
