//! Element Tree Nodes
//!
//! The audited unit is one `Element` plus its children. Children are a
//! tagged union: text, numbers, empty slots, nested plain elements, and
//! opaque composite components whose output only the host can produce.

use serde::Serialize;

use crate::{AttrMap, AttrValue};

/// One audited element: tag, attributes, children.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Element {
    pub tag: String,
    pub attributes: AttrMap,
    pub children: Vec<Child>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: AttrMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute set.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Builder-style child append.
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Serialize the element and its plain-markup descendants.
    ///
    /// Diagnostic serializer, not an HTML engine: handlers, nulls, and
    /// unresolved composite children are omitted.
    pub fn outer_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in self.attributes.iter() {
            match value {
                AttrValue::Str(s) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    push_escaped(out, s);
                    out.push('"');
                }
                AttrValue::Num(n) => {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str(&format!("=\"{n}\""));
                }
                AttrValue::Bool(true) => {
                    out.push(' ');
                    out.push_str(name);
                }
                AttrValue::Bool(false) | AttrValue::Handler | AttrValue::Null => {}
            }
        }
        out.push('>');
        for child in &self.children {
            match child {
                Child::Text(t) => push_escaped(out, t),
                Child::Number(n) => out.push_str(&format!("{n}")),
                Child::Element(el) => el.write_markup(out),
                Child::Empty | Child::Composite(_) => {}
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Child content of an element.
#[derive(Debug, Clone, Serialize)]
pub enum Child {
    /// Text content.
    Text(String),
    /// Numeric content; renders as text.
    Number(f64),
    /// A null/undefined child slot. Ignored by every audit.
    Empty,
    /// A nested plain element, audited recursively by its own
    /// construction call.
    Element(Element),
    /// An opaque user-defined component instance.
    Composite(Composite),
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Child {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Child {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<Element> for Child {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<Composite> for Child {
    fn from(c: Composite) -> Self {
        Self::Composite(c)
    }
}

/// A user-defined component instance.
///
/// Its rendered output is only reachable through the host's render
/// resolver; the audit never inspects it directly.
#[derive(Debug, Clone, Serialize)]
pub struct Composite {
    /// Component display name, when the host knows it.
    pub name: Option<String>,
    /// Host-assigned key the resolver maps back to an instance.
    pub key: u64,
}

impl Composite {
    pub fn new(key: u64) -> Self {
        Self { name: None, key }
    }

    pub fn named(name: impl Into<String>, key: u64) -> Self {
        Self {
            name: Some(name.into()),
            key,
        }
    }
}
