//! Error types for the AC200 EPHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Attach-time configuration and registration failures
//! - [`CalibrationError`]: Calibration cell lookup and validation failures
//! - [`IoError`]: Register transaction failures on either bus
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration, binding and registration errors
///
/// These errors occur while matching, attaching or registering the PHY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Invalid PHY address (must be 0-31)
    InvalidPhyAddress,
    /// Invalid register address (must be 0-31)
    InvalidRegister,
    /// PHY identifier does not match the AC200 EPHY
    IdMismatch,
    /// Generic PHY subsystem rejected the driver descriptor
    RegistrationFailed,
    /// Compatible string does not name this driver
    UnknownCompatible,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidPhyAddress => "invalid PHY address",
            ConfigError::InvalidRegister => "invalid register address",
            ConfigError::IdMismatch => "PHY identifier mismatch",
            ConfigError::RegistrationFailed => "unable to register phy",
            ConfigError::UnknownCompatible => "unknown compatible string",
        }
    }
}

// =============================================================================
// Calibration Errors
// =============================================================================

/// Calibration cell errors
///
/// Any of these aborts attach before the EPHY control register is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Calibration cell could not be located or read
    Unavailable,
    /// Calibration payload has the wrong length
    Malformed {
        /// Length actually reported by the storage
        len: usize,
    },
}

impl core::fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalibrationError::Malformed { len } => {
                write!(f, "{}: 2 != {len}", self.as_str())
            }
            CalibrationError::Unavailable => f.write_str(self.as_str()),
        }
    }
}

impl CalibrationError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CalibrationError::Unavailable => "calibration data unavailable",
            CalibrationError::Malformed { .. } => "calibration data has wrong length",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Register transaction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// PHY management bus transaction failed
    PhyBus,
    /// Companion device register access failed
    CompanionBus,
    /// Operation timed out
    Timeout,
    /// Invalid lifecycle state for operation (e.g., not running)
    InvalidState,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::PhyBus => "PHY communication error",
            IoError::CompanionBus => "companion register access error",
            IoError::Timeout => "operation timed out",
            IoError::InvalidState => "invalid state for operation",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::RegistrationFailed)) => { /* ... */ }
///     Err(Error::Calibration(CalibrationError::Malformed { len })) => { /* ... */ }
///     Err(Error::Io(IoError::CompanionBus)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Calibration error
    Calibration(CalibrationError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Calibration(e) => write!(f, "calibration: {e}"),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<CalibrationError> for Error {
    fn from(e: CalibrationError) -> Self {
        Error::Calibration(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for calibration operations
pub type CalibrationResult<T> = core::result::Result<T, CalibrationError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
