use std::any::Any;

pub trait NumericError: std::error::Error {
    fn as_any(&self) -> &dyn Any;
    fn eq(&self, other: &dyn NumericError) -> bool;
}

impl Eq for Box<dyn NumericError> {}

impl PartialEq for Box<dyn NumericError> {
    fn eq(&self, other: &Self) -> bool {
        NumericError::eq(self.as_ref(), other.as_ref())
    }
}

// required fix for derived PartialEq that otherwise moves
impl PartialEq<&Self> for Box<dyn NumericError> {
    fn eq(&self, other: &&Self) -> bool {
        NumericError::eq(self.as_ref(), other.as_ref())
    }
}

#[derive(thiserror::Error, PartialEq, Eq, Debug)]
pub enum Error {
    #[error("{0}")]
    Cast(Box<dyn NumericError>),
}

/// Renders an error followed by its chain of sources.
pub trait Report {
    fn report(&self) -> String;
}

impl<E> Report for E
where
    E: std::error::Error,
{
    fn report(&self) -> String {
        use std::fmt::Write;
        let mut rendered = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            let _ = write!(rendered, ": {}", cause);
            source = cause.source();
        }
        rendered
    }
}
