use crate::domain::models::{MAX_AGE, MIN_AGE};

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    EmptyField(&'static str),
    InvalidAge(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::EmptyField(field) => {
                write!(f, "Please enter a valid {}.", field)
            }
            DomainError::InvalidAge(_) => {
                write!(
                    f,
                    "Age must be a whole number between {} and {}.",
                    MIN_AGE, MAX_AGE
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
