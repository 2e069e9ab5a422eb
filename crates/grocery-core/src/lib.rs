pub mod error;
pub mod result;

pub use error::GroceryError;
pub use result::GroceryResult;
