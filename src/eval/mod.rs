use anyhow::{anyhow, Context, Result};
use log::{debug, trace};

use crate::{CalcError, Token};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
}

impl Op {
    fn apply(self, acc: i64, rhs: i64) -> Result<i64, CalcError> {
        match self {
            Op::Add => acc.checked_add(rhs),
            Op::Sub => acc.checked_sub(rhs),
        }
        .ok_or(CalcError::Overflow)
    }
}

#[derive(Debug)]
enum State {
    Initial,
    ExpectOperator(i64),
    ExpectOperand(i64, Op),
}

/// Scan and evaluate a single line, as typed at the prompt.
pub fn feed(line: &str) -> Result<Option<i64>> {
    let tokens = crate::scan(line).with_context(|| anyhow!("evaluating {:?}", line))?;
    debug!("tokens: {:?}", tokens);
    evaluate(&tokens).with_context(|| anyhow!("evaluating {:?}", line))
}

/// Reduce `int (op int)*` left to right.
///
/// `Ok(None)` means there were no tokens at all, which is not the same as a zero result.
pub fn evaluate(tokens: &[Token]) -> Result<Option<i64>, CalcError> {
    let mut state = State::Initial;

    for token in tokens {
        trace!("state: {:?}, token: {:?}", state, token);
        state = match (state, token) {
            (State::Initial, Token::Number(n)) => State::ExpectOperator(*n),
            (State::Initial, _) => return Err(CalcError::ExpectedInteger),

            (State::ExpectOperator(acc), Token::Plus) => State::ExpectOperand(acc, Op::Add),
            (State::ExpectOperator(acc), Token::Minus) => State::ExpectOperand(acc, Op::Sub),
            (State::ExpectOperator(_), Token::Number(_)) => {
                return Err(CalcError::ExpectedOperator)
            }

            (State::ExpectOperand(acc, op), Token::Number(n)) => {
                State::ExpectOperator(op.apply(acc, *n)?)
            }
            (State::ExpectOperand(_, _), _) => return Err(CalcError::ExpectedInteger),
        };
    }

    match state {
        State::Initial => Ok(None),
        State::ExpectOperator(acc) => Ok(Some(acc)),
        State::ExpectOperand(_, _) => Err(CalcError::ExpectedIntegerAfterOperator),
    }
}
