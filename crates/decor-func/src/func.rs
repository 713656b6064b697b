//! Function and procedure traits, and [`FuncOf`] for building functions out
//! of procedures, fixed values and scalars.

use std::fmt;

use crate::error::Result;
use crate::scalar::Scalar;

/// Function from `X` to `Y` that may fail.
pub trait Func<X, Y> {
    fn apply(&self, input: X) -> Result<Y>;
}

impl<X, Y, F> Func<X, Y> for F
where
    F: Fn(X) -> Result<Y>,
{
    fn apply(&self, input: X) -> Result<Y> {
        self(input)
    }
}

/// Procedure consuming an `X` for its side effects.
pub trait Proc<X> {
    fn exec(&self, input: X) -> Result<()>;
}

impl<X, F> Proc<X> for F
where
    F: Fn(X) -> Result<()>,
{
    fn exec(&self, input: X) -> Result<()> {
        self(input)
    }
}

type BoxedFn<X, Y> = Box<dyn Fn(X) -> Result<Y> + Send + Sync>;

/// Boxed [`Func`] with constructors for the common conversions.
pub struct FuncOf<X, Y> {
    func: BoxedFn<X, Y>,
}

impl<X: 'static, Y: 'static> FuncOf<X, Y> {
    /// Wrap a closure.
    pub fn from_fn<F>(func: F) -> Self
    where
        F: Fn(X) -> Result<Y> + Send + Sync + 'static,
    {
        Self {
            func: Box::new(func),
        }
    }

    /// Run `proc` on the input, then return `result`.
    pub fn from_proc<P>(proc: P, result: Y) -> Self
    where
        P: Proc<X> + Send + Sync + 'static,
        Y: Clone + Send + Sync,
    {
        Self::from_fn(move |input| {
            proc.exec(input)?;
            Ok(result.clone())
        })
    }

    /// Ignore the input and return `value`.
    pub fn from_value(value: Y) -> Self
    where
        Y: Clone + Send + Sync,
    {
        Self::from_fn(move |_| Ok(value.clone()))
    }

    /// Ignore the input and return the scalar's current value.
    pub fn from_scalar<S>(scalar: S) -> Self
    where
        S: Scalar<Y> + Send + Sync + 'static,
    {
        Self::from_fn(move |_| scalar.value())
    }
}

impl<X, Y> Func<X, Y> for FuncOf<X, Y> {
    fn apply(&self, input: X) -> Result<Y> {
        (self.func)(input)
    }
}

impl<X, Y> fmt::Debug for FuncOf<X, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncOf").finish_non_exhaustive()
    }
}
