//! AC200 EPHY Driver
//!
//! A `no_std`, `no_alloc` bring-up driver for the 10/100 Ethernet PHY
//! embedded in the X-Powers AC200 companion chip, as paired with the
//! Allwinner H6.
//!
//! The EPHY is split across two buses. Power, clock, LED IO and the
//! electrical configuration live in the AC200's own register file; the
//! transceiver itself is a Clause 22 PHY on MDIO with vendor registers
//! banked into pages.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **Device Layer** ([`driver`]): attach, calibration, registration,
//!    teardown and the link subsystem entry points
//! 2. **PHY Layer** ([`phy`]): generic PHY hooks, paged register access and
//!    the AC200 bring-up sequence
//! 3. **HAL Layer** ([`hal`]): traits for the companion register file,
//!    MDIO and calibration storage
//!
//! # Features
//!
//! - `defmt`: Enable defmt logging and formatting for public types
//! - `critical-section`: Enable the ISR-safe [`sync::SharedCompanion`]
//!   wrapper
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::{Ac200EphyDevice, EphyConfig, PhyInterface};
//!
//! let config = EphyConfig::new()
//!     .with_interface(PhyInterface::Rmii)
//!     .with_phy_addr(1);
//!
//! // Power up, calibrate, program EPHY_CTL, register
//! let mut ephy = Ac200EphyDevice::attach(&companion, &mut sid, &mut phys, &config)?;
//!
//! // Link subsystem: identify, soft reset, vendor bring-up
//! ephy.init_hw(&mut mdio, &mut delay)?;
//!
//! // Unbind
//! let report = ephy.detach(&mut phys);
//! ```

#![no_std]
#![deny(missing_docs)]
#![allow(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
// Clippy lint levels live here and mirror [lints.clippy] in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

#[cfg(feature = "critical-section")]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::binding::{COMPATIBLE, DRIVER_NAME, probe};
pub use driver::calibration::{CalibrationTrim, load_calibration};
pub use driver::config::{EphyConfig, LifecycleState, PhyInterface};
pub use driver::device::{Ac200EphyDevice, PhyRegistry, TeardownReport};
pub use error::{
    CalibrationError, CalibrationResult, ConfigError, ConfigResult, Error, IoError, IoResult,
    Result,
};

// Re-export HAL traits
pub use hal::{CalibrationStorage, CellError, CompanionBus, CompanionRegisters, MdioBus};

// Re-export PHY types
pub use phy::{AC200_EPHY_DRIVER_INFO, Ac200Ephy, DeviceId, PhyDriver, PhyDriverInfo};

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedCompanion;

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Calibration
        CALIBRATION_CELL,
        CALIBRATION_LEN,
        CALIBRATION_OFFSET,
        // Addressing
        DEFAULT_PHY_ADDR,
        MAX_PHY_ADDR,
        MAX_REG_ADDR,
        // Timing
        RESET_POLL_INTERVAL_US,
        SOFT_RESET_TIMEOUT_MS,
    };
}
