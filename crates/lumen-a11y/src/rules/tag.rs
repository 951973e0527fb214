//! Tag Rules
//!
//! Requirements keyed on the element's tag name.

use lumen_tree::tags;

use super::TagRule;

/// Words screen readers already announce for an image.
const REDUNDANT_ALT_WORDS: &[&str] = &["image", "picture", "photo"];

/// An explicit empty `alt` is valid (decorative image); only a missing
/// attribute fails.
pub(super) const MISSING_ALT: TagRule = TagRule {
    id: "MISSING_ALT",
    msg: "has no `alt` attribute. Screen readers cannot describe the image without one; \
          use `alt=\"\"` if it is purely decorative.",
    test: |el| el.attributes.contains("alt"),
};

pub(super) const REDUNDANT_ALT: TagRule = TagRule {
    id: "REDUNDANT_ALT",
    msg: "has `alt` text containing \"image\", \"picture\", or \"photo\". Screen readers \
          already announce `img` elements as images.",
    test: |el| match el.attributes.get_str("alt") {
        Some(alt) => {
            let alt = alt.to_ascii_lowercase();
            !REDUNDANT_ALT_WORDS.iter().any(|word| alt.contains(word))
        }
        None => true,
    },
};

pub(super) const HASH_HREF_NEEDS_BUTTON: TagRule = TagRule {
    id: "HASH_HREF_NEEDS_BUTTON",
    msg: "is an anchor with `href=\"#\"` and a click handler. It acts as a button; \
          use a `button` element instead.",
    test: |el| {
        !(tags::has_click_handler(&el.attributes) && el.attributes.get_str("href") == Some("#"))
    },
};

pub(super) const TABINDEX_NEEDS_BUTTON: TagRule = TagRule {
    id: "TABINDEX_NEEDS_BUTTON",
    msg: "is an anchor with a `tabIndex`, a click handler, and no `href`. It acts as \
          a button; use a `button` element instead.",
    test: |el| {
        !(tags::has_click_handler(&el.attributes)
            && el.attributes.contains("tabIndex")
            && !el.attributes.contains("href"))
    },
};
