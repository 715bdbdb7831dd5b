//! Error handling for the rcrypt ecosystem

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, ErrorKind, Result};
