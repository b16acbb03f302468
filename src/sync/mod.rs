//! Synchronization and Concurrency Support
//!
//! The AC200 register file is shared by the EPHY, codec, RTC and pinctrl
//! drivers. This module provides the critical-section based wrapper that
//! lets them share one raw bus:
//!
//! - **Primitives** (`primitives`): [`CriticalSectionCell`], ISR-safe
//!   interior mutability
//! - **Shared Wrappers** (`shared`): [`SharedCompanion`], a
//!   [`CompanionRegisters`](crate::hal::companion::CompanionRegisters)
//!   handle over any [`CompanionBus`](crate::hal::companion::CompanionBus)
//!
//! # Feature Flags
//!
//! - `critical-section`: Enables this module
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::sync::SharedCompanion;
//!
//! static AC200: SharedCompanion<Ac200I2c> = SharedCompanion::new(Ac200I2c::new());
//!
//! fn main() {
//!     let ephy = Ac200EphyDevice::attach(&AC200, &mut sid, &mut phys, &config).unwrap();
//! }
//! ```

// Primitives module (requires critical-section)
mod primitives;

pub use primitives::CriticalSectionCell;

// Shared wrappers (requires critical-section)
mod shared;

pub use shared::SharedCompanion;
