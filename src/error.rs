use std::error;
use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The grammar source did not parse into a conforming tree.
    Parse(String),
    /// A terminal node was none of string literal, token reference, or rule
    /// reference. Fatal; the tree does not have the expected shape.
    UnrecognizedAtom(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref s) => write!(f, "failed to parse: {}", s),
            Error::UnrecognizedAtom(ref s) => write!(f, "unrecognized atom: {}", s),
        }
    }
}

impl error::Error for Error {}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Error {
        Error::Parse(format!("{:?}", err))
    }
}
