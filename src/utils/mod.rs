mod error;

pub use error::{handle_error_and_exit, Error, Result};
