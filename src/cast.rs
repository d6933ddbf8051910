use crate::{error, NumericType};
use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

pub trait Cast
where
    Self: Sized + num::ToPrimitive + Copy,
{
    fn cast<Target>(self) -> Result<Target, CastError<Self, Target>>
    where
        Target: num::NumCast;
}

impl<Src> Cast for Src
where
    Self: Sized + num::ToPrimitive + Copy,
{
    fn cast<Target>(self) -> Result<Target, CastError<Self, Target>>
    where
        Target: num::NumCast,
    {
        num::NumCast::from(self).ok_or(CastError {
            src: self,
            target: PhantomData,
        })
    }
}

/// Failed conversion of `src` into `Target`, either because the value is
/// outside the target range or because it is not finite.
#[derive(PartialEq, Eq)]
pub struct CastError<Src, Target> {
    pub src: Src,
    pub target: PhantomData<Target>,
}

impl<Src, Target> From<CastError<Src, Target>> for error::Error
where
    Src: NumericType,
    Target: NumericType,
{
    fn from(err: CastError<Src, Target>) -> Self {
        error::Error::Cast(Box::new(err))
    }
}

impl<Src, Target> error::NumericError for CastError<Src, Target>
where
    Src: NumericType,
    Target: NumericType,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq(&self, other: &dyn error::NumericError) -> bool {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => PartialEq::eq(self, other),
            None => false,
        }
    }
}

impl<Src, Target> std::error::Error for CastError<Src, Target> where Src: Debug + Display {}

impl<Src, Target> Debug for CastError<Src, Target>
where
    Src: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CastError")
            .field("src", &self.src)
            .field("target", &std::any::type_name::<Target>())
            .finish()
    }
}

impl<Src, Target> Display for CastError<Src, Target>
where
    Src: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cannot cast {} of type {} to {}",
            self.src,
            std::any::type_name::<Src>(),
            std::any::type_name::<Target>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Cast;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_cast() {
        assert_eq!(
            &4e10f64.cast::<i32>().err().unwrap().to_string(),
            "cannot cast 40000000000 of type f64 to i32"
        );
        assert_eq!(
            &(-42f64).cast::<u32>().err().unwrap().to_string(),
            "cannot cast -42 of type f64 to u32"
        );
        assert_eq!(
            &f64::NAN.cast::<i32>().err().unwrap().to_string(),
            "cannot cast NaN of type f64 to i32"
        );
        assert_eq!(
            &f64::NEG_INFINITY.cast::<i32>().err().unwrap().to_string(),
            "cannot cast -inf of type f64 to i32"
        );
    }

    #[test]
    fn truncating_cast() {
        assert_eq!(42.1f64.cast::<i32>().ok(), Some(42));
        assert_eq!(42.9f64.cast::<i32>().ok(), Some(42));
        assert_eq!((-42.9f64).cast::<i32>().ok(), Some(-42));
    }

    #[test]
    fn valid_cast() {
        assert_eq!(42f64.cast::<f32>().ok(), Some(42f32));
        assert_eq!(42f64.cast::<i64>().ok(), Some(42i64));
        assert!(u32::MAX.cast::<i64>().is_ok());
        assert_eq!(f64::MAX.cast::<i32>().ok(), None);
        assert_abs_diff_eq!(
            u32::MAX.cast::<f64>().unwrap(),
            2f64.powi(32),
            epsilon = 2.0
        );
    }
}
