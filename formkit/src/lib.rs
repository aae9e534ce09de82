pub mod events;
pub mod signal;
pub mod validation;
pub mod widgets;

pub use widgets::{Checkbox, CheckboxGroup, NamingError};

pub mod prelude {
    pub use crate::events::{FormEvent, FormEventKind};
    pub use crate::validation::{ErrorDisplay, ValidationResult, Validator};
    pub use crate::widgets::{Checkbox, CheckboxGroup, CheckboxGroupId, CheckboxId, NamingError};
}
