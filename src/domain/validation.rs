use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    EmptyMessage,
    MissingRequiredParameters { to: String, message: String },
    InvalidCallbackUrl { input: String },
    ReportMaskOutOfRange { max: u16, actual: u16 },
    MessageClassOutOfRange { max: u8, actual: u8 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => {
                write!(f, "invalid, or no phone number provided: {input:?}")
            }
            Self::EmptyMessage => write!(f, "no message provided"),
            Self::MissingRequiredParameters { to, message } => {
                write!(
                    f,
                    "unable to send message, required parameters are invalid: \
                     destination: {to:?} / message: {message:?}"
                )
            }
            Self::InvalidCallbackUrl { input } => {
                write!(f, "invalid callback url: {input}")
            }
            Self::ReportMaskOutOfRange { max, actual } => {
                write!(f, "report mask out of range: {actual} (expected 0..={max})")
            }
            Self::MessageClassOutOfRange { max, actual } => {
                write!(f, "message class out of range: {actual} (expected 0..={max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
