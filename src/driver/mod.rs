//! Core driver components for the AC200 EPHY.
//!
//! This module contains the companion-side bring-up of the EPHY:
//!
//! - [`config`] - Configuration types and builder patterns
//! - [`calibration`] - Factory trim loading
//! - [`device`] - Attach, link subsystem entry points and teardown
//! - [`binding`] - Compatible strings, id tables and probe
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::driver::{EphyConfig, PhyInterface, probe};
//!
//! let config = EphyConfig::new().with_interface(PhyInterface::Rmii);
//! let ephy = probe("x-powers,ac200-ephy", &companion, &mut sid, &mut phys, &config)?;
//! ```

// Submodules
pub mod binding;
pub mod calibration;
pub mod config;
pub mod device;

// Re-exports for convenience
pub use binding::{
    COMPATIBLE, DRIVER_NAME, MDIO_DEVICE_TABLE, OF_MATCH_TABLE, match_compatible, match_phy_id,
    probe,
};
pub use calibration::{CALIBRATION_CELL_NAME, CalibrationTrim, load_calibration};
pub use config::{EphyConfig, LifecycleState, PhyInterface};
pub use device::{Ac200EphyDevice, PhyRegistry, TeardownReport, ephy_ctl_value};
