use std::num::ParseFloatError;

/// The reasons why reading a [`super::Point`] can fail.
///
/// Whatever the reason, the point which was read into keeps its previous
/// coordinates.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The input ended before both coordinates were read.
    /// `read` is the number of coordinates which were available.
    #[error("Input ended after {read} of 2 coordinates.")]
    Exhausted { read: usize },

    #[error("'{token}' isn't a number: {source}")]
    InvalidNumber {
        token: String,
        source: ParseFloatError,
    },

    #[error("'{token}' isn't a finite number.")]
    NotFinite { token: String },

    /// Only returned when parsing a whole string, see [`std::str::FromStr`].
    #[error("Unexpected input after the point: '{rest}'")]
    TrailingInput { rest: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
