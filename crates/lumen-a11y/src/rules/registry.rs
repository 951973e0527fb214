//! Rule Registry
//!
//! Registration-time tables of rules, keyed by tag name, attribute
//! name, or (for the label family) nothing at all. Read-only once an
//! auditor holds it; adding rules happens before activation.

use std::collections::HashMap;

use super::{attr, label, tag, AttrRule, LabelRule, TagRule};

pub struct Registry {
    tag_rules: HashMap<&'static str, Vec<TagRule>>,
    attr_rules: HashMap<&'static str, Vec<AttrRule>>,
    label_rules: Vec<LabelRule>,
}

impl Registry {
    /// Empty registry. Use [`Registry::builtin`] for the standard set.
    pub fn new() -> Self {
        Self {
            tag_rules: HashMap::new(),
            attr_rules: HashMap::new(),
            label_rules: Vec::new(),
        }
    }

    /// The standard rule set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register_tag_rule("img", tag::MISSING_ALT);
        registry.register_tag_rule("img", tag::REDUNDANT_ALT);
        registry.register_tag_rule("a", tag::HASH_HREF_NEEDS_BUTTON);
        registry.register_tag_rule("a", tag::TABINDEX_NEEDS_BUTTON);

        registry.register_attr_rule("onClick", attr::NO_ROLE);
        registry.register_attr_rule("onClick", attr::NO_TABINDEX);
        registry.register_attr_rule("onClick", attr::BUTTON_ROLE_SPACE);
        registry.register_attr_rule("onClick", attr::BUTTON_ROLE_ENTER);
        registry.register_attr_rule("aria-hidden", attr::TABINDEX_REQUIRED_WHEN_ARIA_HIDDEN);

        registry.register_label_rule(label::NO_LABEL);

        registry
    }

    pub fn register_tag_rule(&mut self, tag: &'static str, rule: TagRule) {
        self.tag_rules.entry(tag).or_default().push(rule);
    }

    pub fn register_attr_rule(&mut self, attr: &'static str, rule: AttrRule) {
        self.attr_rules.entry(attr).or_default().push(rule);
    }

    pub fn register_label_rule(&mut self, rule: LabelRule) {
        self.label_rules.push(rule);
    }

    /// Rules for a tag, in registration order. No rules is no error.
    pub fn tag_rules(&self, tag: &str) -> &[TagRule] {
        self.tag_rules.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Rules for an attribute name, in registration order.
    pub fn attr_rules(&self, attr: &str) -> &[AttrRule] {
        self.attr_rules.get(attr).map_or(&[], Vec::as_slice)
    }

    pub fn label_rules(&self) -> &[LabelRule] {
        &self.label_rules
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
