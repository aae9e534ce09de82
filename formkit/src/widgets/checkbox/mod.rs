//! Checkbox choice element - an individual option with a checked state and
//! an associated value.

mod state;

pub use state::{Checkbox, CheckboxId};
