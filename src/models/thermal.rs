//! Thermal systems models.
//!
//! This module contains models for thermal systems, currently the
//! lumped-capacitance simulation of bodies cooling or heating by convection
//! and conduction.

pub mod lumped;
