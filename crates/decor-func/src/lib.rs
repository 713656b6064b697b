//! Function, procedure and scalar wrappers for Decor.
//!
//! - [`Func`] -- fallible function from `X` to `Y`
//! - [`Proc`] -- fallible procedure consuming an `X`
//! - [`Scalar`] -- fallible source of one value; [`Constant`] always succeeds
//! - [`FuncOf`] -- builds a [`Func`] from a closure, a procedure plus a fixed
//!   result, a fixed value, or a scalar
//!
//! Closures with the matching signature implement the traits directly.

pub mod error;
pub mod func;
pub mod scalar;

pub use error::{FuncError, Result};
pub use func::{Func, FuncOf, Proc};
pub use scalar::{Constant, Scalar};
