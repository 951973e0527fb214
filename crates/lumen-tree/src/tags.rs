//! Tag Classification
//!
//! Which tags render operable controls, which are images, which are
//! invisible form plumbing, and the handler-attribute conventions of
//! the host factory.

use crate::AttrMap;

/// Tags that always participate in the tab order.
const FOCUSABLE: &[&str] = &["button", "select", "textarea", "option"];

/// An element the user can operate as constructed.
///
/// Anchors only count once they are real links: an `href` or an
/// explicit `tabIndex` puts them in the tab order.
pub fn is_interactive(tag: &str, attrs: &AttrMap) -> bool {
    match tag {
        "a" => attrs.contains("href") || attrs.contains("tabIndex"),
        "input" => !is_hidden_input(tag, attrs),
        t => FOCUSABLE.contains(&t),
    }
}

/// An element that renders an operable control at all.
///
/// Wider than [`is_interactive`]: placeholder anchors (no `href` yet)
/// still count, since they still need accessible names and tab-order
/// handling once wired up.
pub fn is_control(tag: &str, attrs: &AttrMap) -> bool {
    tag == "a" || is_interactive(tag, attrs)
}

/// Image-like tags; they label a parent only through `alt` text.
pub fn is_image(tag: &str) -> bool {
    tag == "img"
}

/// `<input type="hidden">` renders nothing and needs nothing.
pub fn is_hidden_input(tag: &str, attrs: &AttrMap) -> bool {
    tag == "input" && attrs.get_str("type") == Some("hidden")
}

/// Pointer-interaction handler, by the host factory's naming
/// convention. An explicit null handler does not count.
pub fn has_click_handler(attrs: &AttrMap) -> bool {
    attrs.truthy("onClick")
}

/// Keyboard-interaction handler.
pub fn has_key_handler(attrs: &AttrMap) -> bool {
    attrs.truthy("onKeyDown") || attrs.truthy("onKeyPress")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttrValue;

    #[test]
    fn test_anchor_interactivity() {
        let bare = AttrMap::new();
        let linked = AttrMap::new().with("href", "/foo");
        let tabbed = AttrMap::new().with("tabIndex", 0);

        assert!(!is_interactive("a", &bare));
        assert!(is_interactive("a", &linked));
        assert!(is_interactive("a", &tabbed));
        assert!(is_control("a", &bare));
    }

    #[test]
    fn test_hidden_input() {
        let hidden = AttrMap::new().with("type", "hidden");
        let text = AttrMap::new().with("type", "text");

        assert!(is_hidden_input("input", &hidden));
        assert!(!is_interactive("input", &hidden));
        assert!(is_interactive("input", &text));
        assert!(is_interactive("input", &AttrMap::new()));
    }

    #[test]
    fn test_handlers() {
        let attrs = AttrMap::new().with("onClick", AttrValue::Handler);
        assert!(has_click_handler(&attrs));
        assert!(!has_key_handler(&attrs));
    }
}
