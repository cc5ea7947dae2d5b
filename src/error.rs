use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty,
    OutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "container is empty"),
            Self::OutOfBounds { index, len } => {
                write!(
                    f,
                    "index out of bounds: index was {index} but container has length {len}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
