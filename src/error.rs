use thiserror::Error;

/// A configuration value that the kernel must never see.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be > 0 (got {value})")]
    NonPositive { field: String, value: f64 },

    #[error("{field} must be >= 0 (got {value})")]
    Negative { field: String, value: f64 },

    #[error("{field} must be finite")]
    NonFinite { field: String },
}

impl ConfigError {
    pub(crate) fn check_positive(field: impl Into<String>, value: f64) -> Result<(), Self> {
        let field = field.into();
        if !value.is_finite() {
            return Err(Self::NonFinite { field });
        }
        if value <= 0.0 {
            return Err(Self::NonPositive { field, value });
        }
        Ok(())
    }

    pub(crate) fn check_non_negative(field: impl Into<String>, value: f64) -> Result<(), Self> {
        let field = field.into();
        if !value.is_finite() {
            return Err(Self::NonFinite { field });
        }
        if value < 0.0 {
            return Err(Self::Negative { field, value });
        }
        Ok(())
    }

    pub(crate) fn check_finite(field: impl Into<String>, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFinite { field: field.into() })
        }
    }
}

/// Errors surfaced by the binaries and the export helpers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ConfigError::check_positive("stage1.isp", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "stage1.isp must be > 0 (got 0)");

        let err = ConfigError::check_non_negative("payload_mass", -1.5).unwrap_err();
        assert_eq!(err.to_string(), "payload_mass must be >= 0 (got -1.5)");
    }

    #[test]
    fn nan_is_not_positive() {
        let err = ConfigError::check_positive("dt", f64::NAN).unwrap_err();
        assert_eq!(err, ConfigError::NonFinite { field: "dt".into() });
    }

    #[test]
    fn zero_is_non_negative() {
        assert!(ConfigError::check_non_negative("stage2.cd", 0.0).is_ok());
        assert!(ConfigError::check_finite("turn_rate_deg_s", -0.1).is_ok());
    }

    #[test]
    fn config_error_converts() {
        let err: Error = ConfigError::NonFinite { field: "t_final".into() }.into();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
