use crate::error::GroceryError;

pub type GroceryResult<T> = Result<T, GroceryError>;
