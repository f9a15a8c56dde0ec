//! Shot classification and per-club aggregation.
//!
//! Each shot is labelled with a [`classify::ShotShape`] against its club's
//! reference limits, then shots are grouped by club and label to compute
//! fractions, median carry and offline dispersion for display.

pub mod aggregate;
pub mod analyzer;
pub mod classify;
pub mod types;
pub mod utility;
