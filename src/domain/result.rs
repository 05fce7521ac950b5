//! Result type alias
//!
//! Convenience alias using [`CircdeskError`] as the error type, used
//! throughout the crate for fallible operations.

use super::errors::CircdeskError;

/// Result type alias for console operations
///
/// # Examples
///
/// ```
/// use circdesk::domain::errors::CircdeskError;
/// use circdesk::domain::result::Result;
///
/// fn parse_page(raw: &str) -> Result<usize> {
///     raw.parse()
///         .map_err(|_| CircdeskError::Validation(format!("invalid page '{raw}'")))
/// }
///
/// assert!(parse_page("3").is_ok());
/// assert!(parse_page("three").is_err());
/// ```
pub type Result<T, E = CircdeskError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CircdeskError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(CircdeskError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
