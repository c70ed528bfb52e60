// SPDX-License-Identifier: MPL-2.0
use crate::application::port::SinkError;
use crate::domain::toast::ActionId;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// An action identifier was registered twice.
    DuplicateAction(ActionId),
    Sink(SinkError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::DuplicateAction(id) => write!(f, "Action already registered: {}", id),
            Error::Sink(e) => write!(f, "Toast Sink Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<SinkError> for Error {
    fn from(err: SinkError) -> Self {
        Error::Sink(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
