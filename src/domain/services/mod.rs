pub mod notification;
pub mod validation;

pub use notification::{Notifier, Severity};
pub use validation::SearchQueryValidator;
