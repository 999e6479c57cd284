//! The errors that can occur while building, persisting or reloading a
//! tabulation.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for tabulation operations.
pub type TabResult<T> = Result<T, TabError>;

/// Error type for the crate.
#[derive(Debug)]
pub enum TabError {
    /// The requested grid cannot be built: non-finite bounds, an empty
    /// range, a non-positive step or fewer than two points.
    InvalidRange(String),
    /// IO error while creating the output directory or touching a file.
    FileSystem(io::Error),
    /// The input document does not exist.
    NotFound(PathBuf),
    /// The input document exists but is not a parallel-group document.
    Parse(ParseError),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TabError::InvalidRange(msg) => write!(f, "invalid grid: {}", msg),
            TabError::FileSystem(e) => write!(f, "{}", e),
            TabError::NotFound(path) => {
                write!(f, "file not found: {}", path.display())
            }
            TabError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl Error for TabError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TabError::FileSystem(e) => Some(e),
            TabError::Parse(e) => Some(e),
            TabError::InvalidRange(..) | TabError::NotFound(..) => None,
        }
    }
}

impl From<io::Error> for TabError {
    fn from(err: io::Error) -> Self {
        TabError::FileSystem(err)
    }
}

impl From<ParseError> for TabError {
    fn from(err: ParseError) -> Self {
        TabError::Parse(err)
    }
}

impl TabError {
    pub(crate) fn invalid_range(message: String) -> TabError {
        TabError::InvalidRange(message)
    }
}

/// A parsing error occurred while reading a parallel-group document.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// Structural problem: missing markup, an unterminated tag, content
    /// after the document root.
    Malformed {
        /// What was wrong
        what: &'static str,
        /// Byte offset into the document
        offset: usize,
    },
    /// A closing tag does not match the element it should close.
    MismatchedClose {
        /// The element that was open
        expected: String,
        /// The name found in the closing tag
        found: String,
    },
    /// An element that does not belong in a parallel-group document.
    UnexpectedElement(String),
    /// One of the two value groups is absent.
    MissingGroup(&'static str),
    /// A value element whose text is not a finite number.
    BadNumber(String),
    /// The two value groups hold different numbers of elements.
    UnequalGroups {
        /// Number of `<x>` values
        xdata: usize,
        /// Number of `<y>` values
        ydata: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Malformed { what, offset } => {
                write!(f, "malformed document: {} (at byte {})", what, offset)
            }
            ParseError::MismatchedClose { expected, found } => {
                write!(f, "expected </{}> but found </{}>", expected, found)
            }
            ParseError::UnexpectedElement(name) => {
                write!(f, "unexpected element <{}>", name)
            }
            ParseError::MissingGroup(name) => {
                write!(f, "the <{}> group is missing", name)
            }
            ParseError::BadNumber(text) => {
                write!(f, "{:?} is not a finite number", text)
            }
            ParseError::UnequalGroups { xdata, ydata } => {
                write!(f, "{} x values but {} y values", xdata, ydata)
            }
        }
    }
}

impl Error for ParseError {}

impl ParseError {
    pub(crate) fn malformed(what: &'static str, offset: usize) -> ParseError {
        ParseError::Malformed { what, offset }
    }
}
