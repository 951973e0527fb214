//! Label Inference
//!
//! Decides whether an interactive element carries an accessible name.
//! The search descends depth-first through plain markup children and
//! through composite children, which must be resolved to their rendered
//! output before any text can be found. Short-circuits on the first
//! label source.

use lumen_tree::{tags, Child, Element};

use crate::aria;

use super::{LabelContext, LabelRule};

pub(super) const NO_LABEL: LabelRule = LabelRule {
    id: "NO_LABEL",
    msg: "is an unlabeled element or control. Add an `aria-label` or `aria-labelledby` \
          attribute, or give it text content.",
    test: |el, ctx, report| {
        if requires_label(el) && !has_label(el, ctx, 0) {
            report();
        }
    },
};

/// Skip conditions first, then the interactive test.
fn requires_label(el: &Element) -> bool {
    if aria::is_aria_hidden(&el.attributes) {
        return false;
    }
    if aria::role_of(&el.attributes).is_some_and(|r| r.is_presentation()) {
        return false;
    }
    if tags::is_hidden_input(&el.tag, &el.attributes) {
        return false;
    }
    tags::is_control(&el.tag, &el.attributes)
        || aria::has_role(&el.attributes)
        || tags::has_click_handler(&el.attributes)
}

/// Whether this element supplies a label, by attribute or by content.
///
/// Images label only through non-empty `alt` text; everything else is a
/// container whose children are searched with the same rules.
fn has_label(el: &Element, ctx: &LabelContext<'_>, depth: usize) -> bool {
    if aria::has_aria_label(&el.attributes) {
        return true;
    }
    if tags::is_image(&el.tag) {
        return el
            .attributes
            .get_str("alt")
            .is_some_and(|alt| !alt.trim().is_empty());
    }
    el.children
        .iter()
        .any(|child| child_contributes(child, ctx, depth))
}

fn child_contributes(child: &Child, ctx: &LabelContext<'_>, depth: usize) -> bool {
    match child {
        Child::Text(text) => !text.trim().is_empty(),
        Child::Number(_) => true,
        Child::Empty => false,
        Child::Element(el) => has_label(el, ctx, depth),
        Child::Composite(composite) => {
            // Each resolution is one hop; hostile self-referential
            // component chains terminate at the cap.
            if depth >= ctx.max_depth {
                return false;
            }
            match ctx.resolver.resolve(composite) {
                Some(output) => child_contributes(&output, ctx, depth + 1),
                None => false,
            }
        }
    }
}
