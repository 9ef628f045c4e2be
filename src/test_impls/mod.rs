mod runs;

use anyhow::Result;

use crate::CalcError;

pub use runs::{Run, RunList};

/// Render a line's outcome the way run lists record it: the number, an empty string for no
/// result, or `error: <kind>` for a calculator error. Anything else is a real failure.
pub fn run_to_string(sentence: &str) -> Result<String> {
    match crate::feed(sentence) {
        Ok(Some(n)) => Ok(n.to_string()),
        Ok(None) => Ok(String::new()),
        Err(e) => match CalcError::extract(&e) {
            Some(calc) => Ok(format!("error: {}", calc.kind())),
            None => Err(e),
        },
    }
}
