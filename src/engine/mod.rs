pub mod config;
pub mod error;

pub mod format;
pub mod formula;
pub mod reducer;
pub mod token;

pub use error::DentakuError;
pub use format::format_number;
pub use formula::Formula;
pub use reducer::reduce;
pub use token::{Operator, Token};
