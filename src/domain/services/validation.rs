use crate::domain::DomainError;

pub struct SearchQueryValidator;

impl SearchQueryValidator {
    /// Returns the trimmed query, or `EmptyQuery` when nothing is left to search for.
    pub fn validate(query: &str) -> Result<&str, DomainError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyQuery);
        }
        Ok(trimmed)
    }
}
