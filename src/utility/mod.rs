//! Multi-attribute utility scoring.
//!
//! - [`UtilityCurve`] — piecewise-linear single-attribute utility with flat
//!   extrapolation
//! - [`MultiAttributeUtility`] — weighted sum of the four system attribute
//!   utilities

mod curve;
mod mau;

pub use curve::UtilityCurve;
pub use mau::{AttributeWeights, MauBreakdown, MultiAttributeUtility};
