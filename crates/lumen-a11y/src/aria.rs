//! ARIA Support
//!
//! The role and `aria-*` attribute semantics the audit consults. This
//! is the widget-facing subset of WAI-ARIA, not the full vocabulary.

use lumen_tree::AttrMap;

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    // === Widget roles ===
    Button,
    Checkbox,
    Combobox,
    Link,
    Listbox,
    Menu,
    MenuItem,
    Option,
    ProgressBar,
    Radio,
    SearchBox,
    Slider,
    SpinButton,
    Switch,
    Tab,
    TextBox,
    Tree,
    TreeItem,

    /// `role="presentation"` and `role="none"` both strip semantics.
    Presentation,

    /// A non-empty role string outside the table above.
    Other,
}

impl Role {
    /// Parse from an attribute string. Empty and whitespace-only
    /// strings are no role at all.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        Some(match s.to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "combobox" => Self::Combobox,
            "link" => Self::Link,
            "listbox" => Self::Listbox,
            "menu" => Self::Menu,
            "menuitem" => Self::MenuItem,
            "option" => Self::Option,
            "progressbar" => Self::ProgressBar,
            "radio" => Self::Radio,
            "searchbox" => Self::SearchBox,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "textbox" => Self::TextBox,
            "tree" => Self::Tree,
            "treeitem" => Self::TreeItem,
            "none" | "presentation" => Self::Presentation,
            _ => Self::Other,
        })
    }

    /// Check if role strips semantics from the element.
    pub fn is_presentation(self) -> bool {
        matches!(self, Self::Presentation)
    }

    /// Check if role is widget (interactive).
    pub fn is_widget(self) -> bool {
        !matches!(self, Self::Presentation | Self::Other)
    }
}

/// The element's role, when a non-empty `role` attribute is present.
pub fn role_of(attrs: &AttrMap) -> Option<Role> {
    attrs.get_str("role").and_then(Role::parse)
}

/// Whether any non-empty `role` attribute is present, known or not.
pub fn has_role(attrs: &AttrMap) -> bool {
    role_of(attrs).is_some()
}

/// `aria-hidden` semantics: any truthy value hides the element, except
/// the literal string `"false"`.
pub fn is_aria_hidden(attrs: &AttrMap) -> bool {
    match attrs.get("aria-hidden") {
        Some(value) => value.is_truthy() && value.as_str() != Some("false"),
        None => false,
    }
}

/// Whether the element names itself through `aria-label` or
/// `aria-labelledby`.
pub fn has_aria_label(attrs: &AttrMap) -> bool {
    attrs.truthy("aria-label") || attrs.truthy("aria-labelledby")
}
