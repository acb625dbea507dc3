use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Cannot divide {dividend} by zero")]
    DivideByZero { dividend: f64 },

    #[error("Invalid argument for {operation}: {value} ({reason})")]
    InvalidArgument {
        operation: &'static str,
        value: f64,
        reason: String,
    },

    #[error("Input error: {field} cannot be empty")]
    EmptyInput { field: String },

    #[error("Input error: name at position {index} is empty or whitespace-only")]
    BlankName { index: usize },

    #[error("Input error: {operation} takes {expected} operand(s), got {actual}")]
    OperandCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SampleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SampleError::DivideByZero { .. }
            | SampleError::InvalidArgument { .. }
            | SampleError::Overflow { .. } => ErrorCategory::Arithmetic,
            SampleError::EmptyInput { .. }
            | SampleError::BlankName { .. }
            | SampleError::OperandCount { .. } => ErrorCategory::Input,
            SampleError::InvalidConfigValue { .. } | SampleError::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
            SampleError::Io(_) | SampleError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Arithmetic | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SampleError::DivideByZero { .. } => "Use a non-zero divisor".to_string(),
            SampleError::InvalidArgument { operation, .. } => match *operation {
                "square_root" => "Pass a value greater than or equal to zero".to_string(),
                "logarithm" => "Pass a value strictly greater than zero".to_string(),
                _ => format!("Check the inputs passed to {}", operation),
            },
            SampleError::EmptyInput { field } => format!("Provide at least one entry for {}", field),
            SampleError::BlankName { .. } => "Remove blank names from the list".to_string(),
            SampleError::OperandCount {
                operation, expected, ..
            } => format!("Pass exactly {} operand(s) to {}", expected, operation),
            SampleError::Overflow { .. } => {
                "Use smaller numbers so the result fits in a 32-bit integer".to_string()
            }
            SampleError::InvalidConfigValue { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            SampleError::ConfigParse { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            SampleError::Io(_) => "Check that the file exists and is readable".to_string(),
            SampleError::Serialization(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Arithmetic => format!("Calculation failed: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SampleError>;
