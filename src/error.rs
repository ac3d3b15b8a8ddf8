use std::fmt;

/// Custom error type for sk operations
#[derive(Debug)]
pub enum SkError {
    /// State directory or key file I/O failed
    Storage(String),
    /// Kubeconfig could not be loaded, updated or written back
    Config(String),
    /// Picker returned a non-candidate, or a required context/namespace is missing
    Selection(String),
    /// Conflicting or invalid command line usage
    Usage(String),
    /// Namespace listing against the cluster failed
    Cluster(String),
}

impl SkError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            SkError::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for SkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkError::Storage(msg) => write!(f, "Storage error: {}", msg),
            SkError::Config(msg) => write!(f, "Kubeconfig error: {}", msg),
            SkError::Selection(msg) => write!(f, "Selection error: {}", msg),
            SkError::Usage(msg) => write!(f, "{}", msg),
            SkError::Cluster(msg) => write!(f, "Cluster error: {}", msg),
        }
    }
}

impl std::error::Error for SkError {}

impl From<serde_yml::Error> for SkError {
    fn from(err: serde_yml::Error) -> Self {
        SkError::Config(err.to_string())
    }
}

/// Result type alias for sk operations
pub type Result<T> = std::result::Result<T, SkError>;
