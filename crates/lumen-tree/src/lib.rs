//! Lumen Tree - Element Tree Model
//!
//! Ephemeral element trees as produced by a declarative UI factory.
//! One `Element` is built per construction call, audited, and discarded;
//! nothing here is a retained document.

mod attributes;
mod node;
mod value;

pub mod tags;

pub use attributes::AttrMap;
pub use node::{Child, Composite, Element};
pub use value::AttrValue;
