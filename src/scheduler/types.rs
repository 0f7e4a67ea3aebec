use std::fmt;
use thiserror::Error;

/// Source tabulaire fournie par l'appelant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Holidays,
    Roster,
    Directory,
    Config,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputSource::Holidays => "holidays",
            InputSource::Roster => "roster",
            InputSource::Directory => "directory",
            InputSource::Config => "config",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid {origin} input: {message}")]
    InputFormat {
        origin: InputSource,
        message: String,
    },
    #[error("export failed: {0}")]
    Export(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchedError {
    pub(crate) fn input<M: Into<String>>(origin: InputSource, message: M) -> Self {
        Self::InputFormat {
            origin,
            message: message.into(),
        }
    }
}
