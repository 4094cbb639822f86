//! hb-core
//!
//! Business logic for the household budget calculator: bill-slot allocation,
//! snapshot building and advice generation.
//! Depends on hb-domain. No rendering, no terminal I/O, no direct storage interactions.

pub mod advice_engine;
pub mod catalog_manager;
pub mod error;
pub mod format;
pub mod input;
pub mod snapshot_service;
pub mod standard_catalog;
pub mod storage;

pub use advice_engine::*;
pub use catalog_manager::*;
pub use error::CoreError;
pub use input::parse_amount;
pub use snapshot_service::*;
pub use standard_catalog::{catalog_from_json, standard_catalog};
