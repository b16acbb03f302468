//! Non-volatile calibration storage
//!
//! The factory trim for the EPHY analog front end lives in an eFuse/SID
//! cell. Board support code exposes it through [`CalibrationStorage`].

/// Failure to obtain a storage cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CellError {
    /// No cell with the requested name exists
    NotFound,
    /// The cell exists but reading it failed
    ReadFailed,
}

/// Named cell storage (eFuse, SID, OTP)
pub trait CalibrationStorage {
    /// Read the named cell into `buf`
    ///
    /// Returns the full length of the cell, which may exceed `buf.len()`;
    /// only the first `buf.len()` bytes are copied in that case.
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> Result<usize, CellError>;
}

impl<S: CalibrationStorage + ?Sized> CalibrationStorage for &mut S {
    fn read_cell(&mut self, name: &str, buf: &mut [u8]) -> Result<usize, CellError> {
        (**self).read_cell(name, buf)
    }
}
