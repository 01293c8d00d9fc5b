use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidCustomerId { input: String },
    InvalidPhoneNumber { input: String },
    InvalidExternalId { input: String },
    InvalidBaseUrl { input: String },
    InvalidResourcePath { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidCustomerId { input } => {
                write!(
                    f,
                    "invalid customer id: {input:?} (visible ASCII without ':' only)"
                )
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidExternalId { input } => {
                write!(
                    f,
                    "invalid external id: {input} (allowed: A-Z a-z 0-9 - . _ ~)"
                )
            }
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
            Self::InvalidResourcePath { input } => {
                write!(f, "resource path must start with '/': {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
