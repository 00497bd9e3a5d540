//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short identifier generation
//! - [`url_validator`] - Redirect target validation
//! - [`deadline`] - Store call timeouts

pub mod code_generator;
pub mod deadline;
pub mod url_validator;
