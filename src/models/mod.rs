//! Core record types shared across the dashboard surfaces.

pub mod alert;
pub mod enums;
pub mod filters;
pub mod patient;

pub use alert::*;
pub use enums::*;
pub use filters::*;
pub use patient::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
