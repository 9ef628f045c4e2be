mod litnum;

use std::fmt;

use itertools::Itertools;

use crate::CalcError;

use litnum::scan_litnum;

/// Inclusive (start, end) char columns of a token in its line.
pub type Pos = (usize, usize);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Plus,
    Minus,
}

/// Prints the text the token was scanned from, e.g. `+` or `42`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{n}"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
        }
    }
}

pub fn scan(sentence: &str) -> Result<Vec<Token>, CalcError> {
    Ok(scan_with_locations(sentence)?
        .into_iter()
        .map(|(_, token)| token)
        .collect())
}

pub fn scan_with_locations(sentence: &str) -> Result<Vec<(Pos, Token)>, CalcError> {
    let mut tokens: Vec<(Pos, Token)> = Vec::new();
    let mut it = sentence.chars().enumerate().peekable();

    while let Some((i, c)) = it.next() {
        match c {
            ' ' => (),
            '+' => tokens.push(((i, i), Token::Plus)),
            '-' => tokens.push(((i, i), Token::Minus)),
            '0'..='9' => {
                let digits: String = std::iter::once(c)
                    .chain(
                        it.peeking_take_while(|(_, c)| c.is_ascii_digit())
                            .map(|(_, c)| c),
                    )
                    .collect();
                // digits are ascii, so bytes == chars
                let end = i + digits.len() - 1;
                tokens.push(((i, end), scan_litnum(&digits, i)?));
            }
            ch => return Err(CalcError::InvalidCharacter { ch, col: i }),
        }
    }
    Ok(tokens)
}
