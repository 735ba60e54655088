pub mod error;
pub mod expense;
pub mod summary;
