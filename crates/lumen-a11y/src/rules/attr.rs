//! Attribute Rules
//!
//! Requirements keyed on an attribute's presence. The engine only runs
//! these when the attribute exists and is non-null, so each test can
//! assume its attribute is there.

use lumen_tree::tags;

use crate::aria::{self, Role};

use super::AttrRule;

// --- onClick ---

pub(super) const NO_ROLE: AttrRule = AttrRule {
    id: "NO_ROLE",
    msg: "has a click handler but is not interactive and has no `role` attribute. \
          Assistive technology cannot tell what this element does.",
    test: |el| {
        aria::is_aria_hidden(&el.attributes)
            || tags::is_interactive(&el.tag, &el.attributes)
            || aria::has_role(&el.attributes)
    },
};

pub(super) const NO_TABINDEX: AttrRule = AttrRule {
    id: "NO_TABINDEX",
    msg: "has a click handler but cannot take keyboard focus. Add a `tabIndex` so \
          keyboard users can reach it.",
    test: |el| {
        aria::is_aria_hidden(&el.attributes)
            || tags::is_interactive(&el.tag, &el.attributes)
            || el.attributes.contains("tabIndex")
    },
};

pub(super) const BUTTON_ROLE_SPACE: AttrRule = AttrRule {
    id: "BUTTON_ROLE_SPACE",
    msg: "has `role=\"button\"` but no key handler. Add an `onKeyDown` handler so the \
          Space key activates it like a click.",
    test: button_role_has_key_handler,
};

pub(super) const BUTTON_ROLE_ENTER: AttrRule = AttrRule {
    id: "BUTTON_ROLE_ENTER",
    msg: "has `role=\"button\"` but no key handler. Add an `onKeyDown` handler so the \
          Enter key activates it like a click.",
    test: button_role_has_key_handler,
};

fn button_role_has_key_handler(el: &lumen_tree::Element) -> bool {
    aria::is_aria_hidden(&el.attributes)
        || aria::role_of(&el.attributes) != Some(Role::Button)
        || tags::has_key_handler(&el.attributes)
}

// --- aria-hidden ---

pub(super) const TABINDEX_REQUIRED_WHEN_ARIA_HIDDEN: AttrRule = AttrRule {
    id: "TABINDEX_REQUIRED_WHEN_ARIA_HIDDEN",
    msg: "is hidden with `aria-hidden` but still sits in the tab order. Add \
          `tabIndex=\"-1\"` so keyboard focus cannot land on invisible content.",
    test: |el| {
        if !aria::is_aria_hidden(&el.attributes) {
            return true;
        }
        if !tags::is_control(&el.tag, &el.attributes) {
            return true;
        }
        el.attributes.get_num("tabIndex") == Some(-1.0)
    },
};
