//! hb-domain
//!
//! Pure domain models (catalog, bill rows, snapshots, advice, saved sessions).
//! No I/O, no rendering, no storage. Only data types and core enums.

pub mod advice;
pub mod catalog;
pub mod common;
pub mod row;
pub mod session;
pub mod snapshot;

pub use advice::*;
pub use catalog::*;
pub use common::*;
pub use row::*;
pub use session::*;
pub use snapshot::*;
