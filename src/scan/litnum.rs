use crate::{CalcError, Token};

/// `digits` is a whole digit run, starting at char column `col`.
pub fn scan_litnum(digits: &str, col: usize) -> Result<Token, CalcError> {
    debug_assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
    // a run of ascii digits only fails to parse when it's past i64::MAX
    digits
        .parse::<i64>()
        .map(Token::Number)
        .map_err(|_| CalcError::NumberTooLarge {
            digits: digits.to_string(),
            col,
        })
}
