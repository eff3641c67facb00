use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// No input path on the command line.
    Usage { program: String },
    /// The input could not be opened or decoded as UTF-8.
    Read(io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage { .. } | Error::Read(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage { program } => write!(f, "Usage: {} <go_file>", program),
            Error::Read(_) => write!(f, "Error: cannot read Go file"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Usage { .. } => None,
            Error::Read(e) => Some(e),
        }
    }
}
