//! Errors raised while registering path patterns.
//!
//! Looking up a path never fails with an error: an unmatched path is simply `None`.
//! The values defined here are only produced by `PatternTrie::insert` and by the
//! conversion of external configuration.

use {failure::Fail, std::fmt};

/// A type alias of `Result<T, E>` whose error type is restricted to `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// An error type which will be thrown from `PatternTrie`.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.kind.cause()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl Error {
    pub fn custom<E>(cause: E) -> Self
    where
        E: Into<failure::Error>,
    {
        Self {
            kind: ErrorKind::Custom {
                cause: cause.into(),
            },
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

#[derive(Debug, Fail)]
pub enum ErrorKind {
    #[fail(display = "the pattern must start with '/': {:?}", pattern)]
    MissingLeadingSlash { pattern: String },

    #[fail(display = "empty parameter name in the pattern {:?}", pattern)]
    EmptyParamName { pattern: String },

    #[fail(
        display = "a catch-all parameter must be located at the end of the pattern {:?}",
        pattern
    )]
    CatchAllNotLast { pattern: String },

    #[fail(display = "the pattern {:?} has already been registered", pattern)]
    DuplicatePattern { pattern: String },

    #[fail(display = "{}", cause)]
    Custom { cause: failure::Error },
}
