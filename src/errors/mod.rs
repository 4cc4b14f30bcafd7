//! Error types and error handling for the lexer.
//!
//! This module defines:
//!
//! - Error structures with source position information
//! - Variants for unrecognised input, table validation and the driver
//! - Helpful error messages and suggestions

pub mod errors;
