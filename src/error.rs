use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tokenizer couldn't classify part of the line.
    Syntax,
    /// The tokens don't form `int (op int)*`.
    Parse,
    /// A result left the i64 range.
    Limit,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid character {ch:?} at column {col}")]
    InvalidCharacter { ch: char, col: usize },
    #[error("number {digits} at column {col} does not fit in a 64-bit integer")]
    NumberTooLarge { digits: String, col: usize },
    #[error("expected integer")]
    ExpectedInteger,
    #[error("expected + or -")]
    ExpectedOperator,
    #[error("expected integer after operator")]
    ExpectedIntegerAfterOperator,
    #[error("result does not fit in a 64-bit integer")]
    Overflow,
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        use CalcError::*;
        match self {
            InvalidCharacter { .. } | NumberTooLarge { .. } => ErrorKind::Syntax,
            ExpectedInteger | ExpectedOperator | ExpectedIntegerAfterOperator => ErrorKind::Parse,
            Overflow => ErrorKind::Limit,
        }
    }

    /// Find the `CalcError` at the root of an anyhow chain, if there is one.
    pub fn extract(err: &anyhow::Error) -> Option<&CalcError> {
        err.chain().find_map(|e| e.downcast_ref::<CalcError>())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::Syntax => "syntax",
            ErrorKind::Parse => "parse",
            ErrorKind::Limit => "limit",
        })
    }
}
