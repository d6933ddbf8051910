//! Directional conversion of floating-point values to integers.
//!
//! Both directions keep the historical truncation semantics of the callers
//! this crate serves: [`floor`] truncates toward zero (so `-123.999` becomes
//! `-123`, not `-124`) and [`ceiling`] truncates `value + 1` (so an integral
//! `123.0` becomes `124`). Non-finite inputs and values outside the target
//! integer range fail with an [`Error`] instead of saturating.

pub mod cast;
pub mod error;
pub mod round;


pub use cast::{Cast, CastError};
pub use error::{Error, NumericError, Report};
pub use round::{ceiling, convert, floor, Ceiling, Floor, RoundingMode};

use std::fmt::{Debug, Display};

pub trait NumericType: Display + Debug + PartialEq + 'static {}

impl<T> NumericType for T where T: num::Num + Debug + Display + PartialEq + 'static {}
