//! EPHY calibration trim
//!
//! The analog front end of every AC200 is trimmed at the factory; the
//! measured value is stored in the `ephy_calib` storage cell as a 16-bit
//! little-endian word. The usable trim is the stored value plus 3, and only
//! its low nibble reaches the hardware (`EPHY_CTL[15:12]`).

use crate::error::{CalibrationError, CalibrationResult};
use crate::hal::nvmem::CalibrationStorage;
#[cfg(feature = "defmt")]
use crate::hal::nvmem::CellError;
use crate::internal::companion_regs::ephy_ctl;
use crate::internal::constants::{CALIBRATION_CELL, CALIBRATION_LEN, CALIBRATION_OFFSET};

/// Name of the storage cell holding the calibration word
pub const CALIBRATION_CELL_NAME: &str = CALIBRATION_CELL;

/// Calibration trim, raw cell value plus the fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationTrim(u16);

impl CalibrationTrim {
    /// Derive the trim from a raw cell value
    ///
    /// Wraps at 16 bits like the hardware word it came from.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw.wrapping_add(CALIBRATION_OFFSET))
    }

    /// Parse a cell payload
    ///
    /// The payload must be exactly two bytes.
    pub fn from_bytes(bytes: &[u8]) -> CalibrationResult<Self> {
        match bytes {
            [lo, hi] => Ok(Self::from_raw(u16::from_le_bytes([*lo, *hi]))),
            _ => Err(CalibrationError::Malformed { len: bytes.len() }),
        }
    }

    /// Trim value
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Trim encoded into the `EPHY_CTL` calibration field
    pub const fn ephy_ctl_field(self) -> u16 {
        ephy_ctl::calib(self.0)
    }
}

/// Read and validate the calibration cell
///
/// Reads the cell exactly once. Nothing is written anywhere; the caller
/// folds the result into `EPHY_CTL`.
pub fn load_calibration<S: CalibrationStorage>(storage: &mut S) -> CalibrationResult<CalibrationTrim> {
    let mut buf = [0u8; CALIBRATION_LEN];

    let len = storage
        .read_cell(CALIBRATION_CELL_NAME, &mut buf)
        .map_err(|_e| {
            #[cfg(feature = "defmt")]
            match _e {
                CellError::NotFound => defmt::error!("Unable to find calibration data!"),
                CellError::ReadFailed => defmt::error!("Unable to read calibration data!"),
            }
            CalibrationError::Unavailable
        })?;

    if len != CALIBRATION_LEN {
        #[cfg(feature = "defmt")]
        defmt::error!("Calibration data has wrong length: 2 != {}", len);
        return Err(CalibrationError::Malformed { len });
    }

    let trim = CalibrationTrim::from_bytes(&buf)?;

    #[cfg(feature = "defmt")]
    defmt::debug!("EPHY calibration trim {=u16}", trim.value());

    Ok(trim)
}
