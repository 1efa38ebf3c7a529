use crate::domain::errors::{DomainError, DomainResult};

/// Youngest age the record form accepts.
pub const MIN_AGE: u32 = 1;
/// Oldest age the record form accepts.
pub const MAX_AGE: u32 = 100;

/// One student record as stored in the `students` table.
///
/// The id is assigned by the store on insert and never changes or gets
/// reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub grade: String,
}

pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        Err(DomainError::EmptyField("name"))
    } else {
        Ok(())
    }
}

pub fn validate_grade(grade: &str) -> DomainResult<()> {
    if grade.trim().is_empty() {
        Err(DomainError::EmptyField("grade"))
    } else {
        Ok(())
    }
}

/// Parses an age entered as text and checks it against the allowed range.
pub fn validate_age(input: &str) -> DomainResult<u32> {
    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidAge(input.to_string()))?;
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(DomainError::InvalidAge(input.to_string()))
    }
}
