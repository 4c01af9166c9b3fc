//! Where perft output is read from.

use std::convert::Infallible;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;
use std::{fmt, fs};

use anyhow::Context;

/// Spelling of [`Source::Stdin`] on the command line.
pub const STDIN: &str = "-";

/// A file with perft output or the standard input, e.g. when piping the engine
/// output directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    #[allow(missing_docs)]
    Stdin,
    #[allow(missing_docs)]
    File(PathBuf),
}

impl Source {
    /// Returns `true` for [`Source::Stdin`].
    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Reads the whole input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input can not be read or is not valid UTF-8.
    pub fn read(&self) -> anyhow::Result<String> {
        let mut contents = String::new();
        match self {
            Self::Stdin => {
                let _ = io::stdin()
                    .lock()
                    .read_to_string(&mut contents)
                    .context("failed to read perft output from standard input")?;
            },
            Self::File(path) => {
                contents = fs::read_to_string(path)
                    .with_context(|| format!("failed to read perft output from {self}"))?;
            },
        }
        log::debug!("read {} bytes from {self}", contents.len());
        Ok(contents)
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(match input {
            STDIN => Self::Stdin,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
