mod error;
pub mod eval;
pub mod scan;
pub mod test_impls;

pub use crate::error::{CalcError, ErrorKind};
pub use crate::eval::*;
pub use crate::scan::*;
