pub mod domain;
pub mod error;
pub mod record;

pub use domain::*;
pub use error::{DecodingError, Result};
pub use record::{Record, decode_array};
