//! Hardware Abstraction Layer
//!
//! The driver touches hardware only through the traits in this module, so
//! board support code decides how the buses are actually driven and tests
//! can substitute fakes.
//!
//! # Modules
//!
//! - [`companion`]: AC200 companion register file access
//! - [`mdio`]: MDIO/SMI bus for EPHY communication
//! - [`nvmem`]: Calibration cell storage
//!
//! # Delay Integration
//!
//! Operations that poll use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod companion;
pub mod mdio;
pub mod nvmem;

// Re-export commonly used types
pub use companion::{CompanionBus, CompanionRegisters};
pub use mdio::MdioBus;
pub use nvmem::{CalibrationStorage, CellError};
