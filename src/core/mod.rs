pub mod error;
pub mod version;

pub use error::{Result, StorageError};
pub use version::numeric_compare;
