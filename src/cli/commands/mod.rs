//! Command implementations
//!
//! One module per subcommand plus the small helpers they share. Commands
//! return an exit code instead of panicking: 0 success, 2 configuration
//! error, 3 invalid input or unavailable transition, 4 service error,
//! 5 fatal error.

pub mod borrows;
pub mod fines;
pub mod init;
pub mod validate;

use crate::domain::CircdeskError;
use chrono::NaiveDateTime;
use std::io::{self, BufRead, Write};

/// Map an error to the command exit code
pub(crate) fn exit_code_for(error: &CircdeskError) -> i32 {
    match error {
        CircdeskError::Configuration(_) => 2,
        CircdeskError::Validation(_) | CircdeskError::Transition(_) => 3,
        CircdeskError::Service(_) => 4,
        _ => 5,
    }
}

/// Ask the operator for confirmation before an irrecoverable action
///
/// `assume_yes` (the `--yes` flag) skips the prompt for scripted use.
pub(crate) fn confirm(prompt: &str, assume_yes: bool) -> bool {
    if assume_yes {
        return true;
    }

    print!("{prompt} [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Format an optional service timestamp for table output
pub(crate) fn format_date(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ServiceError, ServiceKind};
    use chrono::NaiveDate;

    #[test]
    fn test_exit_codes_by_error_kind() {
        assert_eq!(exit_code_for(&CircdeskError::Configuration("x".into())), 2);
        assert_eq!(exit_code_for(&CircdeskError::Validation("x".into())), 3);
        assert_eq!(exit_code_for(&CircdeskError::Transition("x".into())), 3);
        assert_eq!(
            exit_code_for(&CircdeskError::Service(ServiceError::NotFound {
                service: ServiceKind::Fines,
                id: 1,
            })),
            4
        );
        assert_eq!(exit_code_for(&CircdeskError::Other("x".into())), 5);
    }

    #[test]
    fn test_format_date() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(format_date(Some(ts)), "2024-03-01");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_confirm_with_assume_yes() {
        assert!(confirm("Proceed?", true));
    }
}
