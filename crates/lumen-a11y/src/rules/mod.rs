//! Rule Registry and Rule Types
//!
//! Pure predicate rules grouped into three families. Tag and attribute
//! rules are boolean predicates over one element; label rules drive
//! their own search and report failure through a callback, because
//! label inference can fail deep inside the child tree.

mod attr;
mod label;
mod registry;
mod tag;

pub use registry::Registry;

use lumen_tree::Element;
use serde::Serialize;

use crate::host::RenderResolver;

/// Stable rule identifier, referenced by configuration exclusions.
pub type RuleId = &'static str;

/// Requirement keyed by tag name. `test` returning false fails the rule.
#[derive(Clone, Copy)]
pub struct TagRule {
    pub id: RuleId,
    pub msg: &'static str,
    pub test: fn(&Element) -> bool,
}

/// Requirement keyed by attribute name; runs only when the attribute is
/// present and non-null on the element.
#[derive(Clone, Copy)]
pub struct AttrRule {
    pub id: RuleId,
    pub msg: &'static str,
    pub test: fn(&Element) -> bool,
}

/// Label-family rule. Decides on its own whether the element needs a
/// label and whether one was found, reporting through the callback at
/// most once per element.
#[derive(Clone, Copy)]
pub struct LabelRule {
    pub id: RuleId,
    pub msg: &'static str,
    pub test: fn(&Element, &LabelContext<'_>, &mut dyn FnMut()),
}

/// Collaborators available to a label search.
pub struct LabelContext<'a> {
    /// Host capability for opening up composite children.
    pub resolver: &'a dyn RenderResolver,
    /// Composite resolution stops descending past this many hops.
    pub max_depth: usize,
}

/// A single rule failure produced for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Id of the failed rule.
    pub rule: RuleId,
    pub tag: String,
    /// Owning component name when known, else `tag#id`.
    pub node_label: String,
    pub id: String,
    pub message: &'static str,
}
