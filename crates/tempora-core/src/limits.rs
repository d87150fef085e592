//! Input validation limits for motif search

/// Shortest chain a motif search accepts (a single edge)
pub const MIN_MOTIF_LENGTH: usize = 2;

/// Longest chain a motif search accepts (16 nodes)
///
/// The search is exponential in the chain length, so anything longer is
/// almost certainly a caller mistake.
pub const MAX_MOTIF_LENGTH: usize = 16;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MotifTooShort { length: usize, min: usize },
    MotifTooLong { length: usize, max: usize },
    InvalidDelay(f64),
    ZeroLimit,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MotifTooShort { length, min } => {
                write!(f, "Motif length too short: {} nodes (min {})", length, min)
            }
            Self::MotifTooLong { length, max } => {
                write!(f, "Motif length too long: {} nodes (max {})", length, max)
            }
            Self::InvalidDelay(delay) => {
                write!(f, "Maximum delay must be a non-negative number, got {}", delay)
            }
            Self::ZeroLimit => write!(f, "Motif result limit must be at least 1"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate chain motif length
pub fn validate_motif_length(length: usize) -> Result<(), ValidationError> {
    if length < MIN_MOTIF_LENGTH {
        return Err(ValidationError::MotifTooShort {
            length,
            min: MIN_MOTIF_LENGTH,
        });
    }
    if length > MAX_MOTIF_LENGTH {
        return Err(ValidationError::MotifTooLong {
            length,
            max: MAX_MOTIF_LENGTH,
        });
    }
    Ok(())
}

/// Validate maximum inter-edge delay
pub fn validate_delay(within: f64) -> Result<(), ValidationError> {
    if within.is_nan() || within < 0.0 {
        return Err(ValidationError::InvalidDelay(within));
    }
    Ok(())
}

/// Validate motif result limit
pub fn validate_limit(limit: usize) -> Result<(), ValidationError> {
    if limit == 0 {
        return Err(ValidationError::ZeroLimit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_motif_length() {
        assert!(validate_motif_length(2).is_ok());
        assert!(validate_motif_length(MAX_MOTIF_LENGTH).is_ok());
        assert_eq!(
            validate_motif_length(1),
            Err(ValidationError::MotifTooShort { length: 1, min: 2 })
        );
        assert!(validate_motif_length(MAX_MOTIF_LENGTH + 1).is_err());
    }

    #[test]
    fn test_validate_delay() {
        assert!(validate_delay(0.0).is_ok());
        assert!(validate_delay(2.5).is_ok());
        assert!(validate_delay(f64::INFINITY).is_ok());
        assert!(validate_delay(-1.0).is_err());
        assert!(validate_delay(f64::NAN).is_err());
    }
}
