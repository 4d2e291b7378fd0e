//! # Gatehouse Core
//!
//! Core types shared by the Gatehouse admin crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_core::errors::AppError;
//!
//! let error = AppError::forbidden("Insufficient permissions");
//! ```

pub mod errors;

pub use errors::AppError;
