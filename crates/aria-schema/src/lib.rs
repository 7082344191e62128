//! ARIA Attribute Schema
//!
//! The closed vocabulary of recognized `aria-*` attributes and the value
//! domain each one carries. The table here drives both write-side validation
//! and read-side parsing in `aria-codec`; nothing in this crate touches a
//! node or holds mutable state.

mod domain;
mod registry;

pub use domain::Domain;
pub use registry::{ATTRIBUTES, Descriptor, all, describe};
