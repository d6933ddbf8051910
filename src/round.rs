use crate::cast::Cast;
use crate::error::Error;
use crate::NumericType;

pub trait RoundingMode {
    fn round<F>(value: F) -> F
    where
        F: num::Float;
}

/// Truncates toward zero, so negative values lose their fractional part
/// instead of rounding down: `-123.999` becomes `-123`.
pub struct Floor {}

/// Truncates `value + 1` toward zero; integral values come out incremented,
/// `123.0` becomes `124`.
pub struct Ceiling {}

impl RoundingMode for Floor {
    fn round<F>(value: F) -> F
    where
        F: num::Float,
    {
        value.trunc()
    }
}

impl RoundingMode for Ceiling {
    fn round<F>(value: F) -> F
    where
        F: num::Float,
    {
        (value + F::one()).trunc()
    }
}

/// Rounds `value` in the direction `M` and converts the result to `T`.
///
/// Fails when the rounded value has no representation in `T`, which covers
/// NaN, the infinities, and out-of-range magnitudes.
pub fn convert<F, T, M>(value: F) -> Result<T, Error>
where
    F: num::Float + NumericType,
    T: num::NumCast + NumericType,
    M: RoundingMode,
{
    let converted = M::round(value).cast::<T>()?;
    Ok(converted)
}

pub fn floor(value: f64) -> Result<i32, Error> {
    convert::<_, _, Floor>(value)
}

pub fn ceiling(value: f64) -> Result<i32, Error> {
    convert::<_, _, Ceiling>(value)
}
