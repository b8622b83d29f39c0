//! # Loads
//!
//! Load definitions as entered by the user and their resolved solver form.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::{Load, LoadKind};
//!
//! let loads = vec![
//!     Load::point(10.0, 5.0),
//!     Load::distributed(2.0, 0.0, 4.0),
//!     Load::triangular(3.0, 6.0, 9.0),
//!     Load::moment(5.0, 2.0),
//! ];
//! assert_eq!(loads.iter().filter(|l| l.kind.is_span_load()).count(), 2);
//! ```

pub mod discrete;
pub mod load_types;

pub use discrete::{AppliedLoad, Load, DEFAULT_ANGLE_DEG};
pub use load_types::LoadKind;
