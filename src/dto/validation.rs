//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::game::{DRAW_LABEL, Mark};

/// Validates that a winner label is one of the marks or the draw label.
///
/// # Examples
///
/// ```ignore
/// validate_winner_label("X")    // Ok
/// validate_winner_label("draw") // Ok
/// validate_winner_label("x")    // Err - marks are uppercase
/// ```
pub fn validate_winner_label(label: &str) -> Result<(), ValidationError> {
    let known = [Mark::X.label(), Mark::O.label(), DRAW_LABEL];
    if known.contains(&label) {
        return Ok(());
    }

    let mut err = ValidationError::new("winner_label");
    err.message = Some(
        format!(
            "winner must be one of {} (got `{label}`)",
            known.join(", ")
        )
        .into(),
    );
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_winner_label_valid() {
        assert!(validate_winner_label("X").is_ok());
        assert!(validate_winner_label("O").is_ok());
        assert!(validate_winner_label("draw").is_ok());
    }

    #[test]
    fn test_validate_winner_label_invalid() {
        assert!(validate_winner_label("").is_err());
        assert!(validate_winner_label("x").is_err()); // lowercase
        assert!(validate_winner_label("Draw").is_err());
        assert!(validate_winner_label("X ").is_err()); // trailing space
    }
}
