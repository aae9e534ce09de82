//! Form-control widgets.
//!
//! Each widget is a cloneable handle over shared reactive state: clones
//! observe and mutate the same underlying widget. Widgets are pure models -
//! they expose programmatic state and change signals and leave rendering to
//! whatever front-end consumes them.

pub mod checkbox;
pub mod checkbox_group;

pub use checkbox::{Checkbox, CheckboxId};
pub use checkbox_group::{CheckboxGroup, CheckboxGroupId, NamingError};
