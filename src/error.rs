use thiserror::Error;

/// Failure to resolve a strategy from a label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("no such strategy: {label:?} (known: {known})")]
    UnknownStrategy { label: String, known: String },
}

/// Rejected user input. Raised before anything reaches a sort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no numbers given")]
    Empty,
    #[error("invalid input {token:?} at position {position}, please enter valid numbers")]
    InvalidNumber { token: String, position: usize },
    #[error("invalid random list config: {0}")]
    InvalidConfig(&'static str),
}
