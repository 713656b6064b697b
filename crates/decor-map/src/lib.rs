//! Immutable key/value containers for Decor, and the check that they behave
//! like maps.
//!
//! # Modules
//!
//! - [`view`] -- the [`MapView`] trait, implemented for `HashMap`, `BTreeMap`
//!   and the containers below
//! - [`conformance`] -- [`BehavesAsMap`] and [`assert_behaves_as_map`]
//! - [`map_of`] -- [`MapOf`], an immutable ordered map
//! - [`sticky`] -- [`StickyMap`], computed once on first access
//! - [`error`] -- [`ConformanceError`] and [`MapError`]
//!
//! Any type implementing [`MapView`] can be run through the conformance
//! check:
//!
//! ```
//! use decor_map::{assert_behaves_as_map, MapOf};
//!
//! let map = MapOf::from_entries([("k", "v")]);
//! assert_behaves_as_map(&map, "k", "v");
//! ```

pub mod conformance;
pub mod error;
pub mod map_of;
pub mod sticky;
pub mod view;

pub use conformance::{assert_behaves_as_map, BehavesAsMap};
pub use error::{ConformanceError, MapError, Result};
pub use map_of::MapOf;
pub use sticky::StickyMap;
pub use view::MapView;
