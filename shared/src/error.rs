use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    /// The prize catalog or spin tuning cannot be used at all.
    InvalidConfiguration(String),
    /// A call received a value that does not belong to the configured wheel.
    InvalidArgument(String),
    SpinInProgress,
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "Invalid wheel configuration: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::SpinInProgress => write!(f, "A spin is already in progress"),
        }
    }
}

impl std::error::Error for WheelError {}

impl From<serde_json::Error> for WheelError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfiguration(format!("malformed prize catalog: {}", err))
    }
}
