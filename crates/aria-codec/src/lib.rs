//! ARIA Attribute Codec
//!
//! Typed `set` / `get` / `unset` over the `aria-*` attribute namespace of a
//! host tree node. Writes are validated strictly against the closed schema in
//! `aria-schema`; reads parse strictly and degrade to `None` when the stored
//! string is malformed (the store may have been mutated out-of-band, and
//! reading must not fail on that).
//!
//! ```
//! use aria_codec::{Aria, AriaValue, Element, IdAllocator, SimpleNode, Value};
//!
//! let mut aria = Aria::with_allocator(SimpleNode::new(), IdAllocator::new());
//! aria.set("checked", true)?.set("level", 2)?;
//! assert_eq!(aria.get("checked")?, Some(AriaValue::Bool(true)));
//! assert_eq!(aria.get("level")?, Some(AriaValue::Number(2.0)));
//!
//! // Reference lists resolve handles to generated identifiers.
//! let item = SimpleNode::new();
//! aria.set("owns", Value::RefList(vec![item.clone()]))?;
//! assert_eq!(aria.get("owns")?, Some(AriaValue::Str(item.id())));
//! # Ok::<(), aria_codec::AriaError>(())
//! ```

mod codec;
mod element;
mod error;
mod id;
mod node;
mod value;

pub use codec::Aria;
pub use element::Element;
pub use error::AriaError;
pub use id::IdAllocator;
pub use node::SimpleNode;
pub use value::{AriaValue, Value};
