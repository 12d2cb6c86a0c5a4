use std::fmt::{Display, Formatter};

/// Why a roster could not be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be reached or read.
    Transport(std::io::Error),
    /// The source answered with a non-success status.
    HttpStatus { status: u16 },
    /// The source answered with something that is not an HTTP response.
    MalformedResponse(String),
    /// The body is not a roster document.
    Parse(serde_json::Error),
    /// The configured source is neither `embedded`, an `http://` url nor a file path.
    UnsupportedSource(String),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Transport(err) => write!(f, "transport error: {}", err),
            LoadError::HttpStatus { status } => write!(f, "HTTP error! Status: {}", status),
            LoadError::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
            LoadError::Parse(err) => write!(f, "parse error: {}", err),
            LoadError::UnsupportedSource(source) => {
                write!(f, "unsupported roster source: {}", source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Transport(err) => Some(err),
            LoadError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Transport(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}
