//! Ethernet PHY Drivers
//!
//! This module provides the generic PHY hook trait, the paged register
//! accessor and the AC200 EPHY driver built on both.
//!
//! # Architecture
//!
//! The PHY layer talks to the transceiver only through the MDIO bus
//! interface. The AC200 driver additionally borrows the companion register
//! handle for the one step that lives outside the transceiver (XMII select).
//!
//! - [`generic`]: [`PhyDriver`] hooks and their IEEE 802.3 defaults
//! - [`paged`]: [`PagedRegs`] page-select accessor
//! - [`ac200`]: [`Ac200Ephy`] bring-up sequence
//!
//! # Example
//!
//! ```ignore
//! use ac200_ephy::phy::{Ac200Ephy, PhyDriver, init_hw};
//!
//! let mut phy = Ac200Ephy::new(&companion, &EphyConfig::new());
//! init_hw(&mut phy, &mut mdio, &mut delay)?;
//! ```

pub mod ac200;
pub mod generic;
pub mod paged;

pub use ac200::{AC200_EPHY_DRIVER_INFO, Ac200Ephy};
pub use generic::{DeviceId, PhyDriver, PhyDriverInfo, ieee802_3, init_hw};
pub use paged::{Page, PagedRegs};
