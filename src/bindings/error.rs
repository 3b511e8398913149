use thiserror::Error;

/// Errors raised when wiring a binding to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The form has not been mounted (or was already unmounted).
    #[error("Form '{form}' is not mounted")]
    FormNotMounted { form: String },
}
