//! Checkbox group container - aggregates the values of its checked members.
//!
//! The group owns an ordered registration list of [`Checkbox`] members and a
//! cached aggregate value. Member mutations signal the group through the
//! change channel; the aggregate is recomputed at the settle point
//! (`update_complete()`), where deferred name validation also resolves.
//!
//! [`Checkbox`]: crate::widgets::Checkbox

mod error;
mod state;

pub use error::NamingError;
pub use state::{CheckboxGroup, CheckboxGroupId};
