use crate::error::Result;

/// Source of a single value that may fail to produce it.
pub trait Scalar<T> {
    fn value(&self) -> Result<T>;
}

impl<T, F> Scalar<T> for F
where
    F: Fn() -> Result<T>,
{
    fn value(&self) -> Result<T> {
        self()
    }
}

/// Scalar that always yields a clone of the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constant<T> {
    value: T,
}

impl<T: Clone> Constant<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Scalar<T> for Constant<T> {
    fn value(&self) -> Result<T> {
        Ok(self.value.clone())
    }
}
