//! Form validation system.
//!
//! This module provides a fluent API for validating form widgets with support
//! for both synchronous and asynchronous validation rules.
//!
//! # Example
//!
//! ```ignore
//! use formkit::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&self.accept_terms, "terms")
//!         .checked("You must accept the terms")
//!     .field(&self.scientists, "scientists")
//!         .required("Pick at least one scientist")
//!         .max_checked(3, "Pick at most three")
//!     .validate();
//!
//! if result.is_valid() {
//!     // Proceed with form submission
//! }
//! ```

mod error_display;
mod result;
mod validatable;
mod validator;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
