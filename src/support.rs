//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants checked once at construction.
//! - [`units`]: Extensions to [`uom`].
//! - [`materials`]: A read-only catalog of material properties.
//! - [`render`]: Consumers of simulation results.

pub mod constraint;
pub mod materials;
pub mod render;
pub mod units;
