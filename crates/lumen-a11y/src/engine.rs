//! Rule Execution Engine
//!
//! Runs every applicable rule against one element, in a fixed order:
//! tag rules, then attribute rules for each present attribute, then
//! label rules. Within a family, registration order.

use lumen_tree::Element;

use crate::config::Config;
use crate::host::RenderResolver;
use crate::rules::{LabelContext, Registry, Violation};

/// Composite resolution stops after this many nested hops during label
/// inference.
pub const MAX_LABEL_DEPTH: usize = 32;

/// How a violation names its node: the owning component when known,
/// else `tag#id`.
pub(crate) fn node_label(tag: &str, id: &str, owner: Option<&str>) -> String {
    match owner {
        Some(name) => name.to_string(),
        None => format!("{tag}#{id}"),
    }
}

/// Run all applicable, non-excluded rules against one element.
///
/// The element must already carry an id (see [`crate::identity`]).
/// Pure with respect to process state: identical input and
/// configuration always yield the identical violation sequence.
pub fn run(
    registry: &Registry,
    config: &Config,
    element: &Element,
    owner: Option<&str>,
    resolver: &dyn RenderResolver,
) -> Vec<Violation> {
    let id = element.attributes.get_str("id").unwrap_or_default().to_string();
    let label = node_label(&element.tag, &id, owner);
    let mut violations = Vec::new();

    for rule in registry.tag_rules(&element.tag) {
        if config.rule_enabled(rule.id) && !(rule.test)(element) {
            violations.push(Violation {
                rule: rule.id,
                tag: element.tag.clone(),
                node_label: label.clone(),
                id: id.clone(),
                message: rule.msg,
            });
        }
    }

    for (name, value) in element.attributes.iter() {
        if value.is_null() {
            continue;
        }
        for rule in registry.attr_rules(name) {
            if config.rule_enabled(rule.id) && !(rule.test)(element) {
                violations.push(Violation {
                    rule: rule.id,
                    tag: element.tag.clone(),
                    node_label: label.clone(),
                    id: id.clone(),
                    message: rule.msg,
                });
            }
        }
    }

    let ctx = LabelContext {
        resolver,
        max_depth: MAX_LABEL_DEPTH,
    };
    for rule in registry.label_rules() {
        if config.rule_enabled(rule.id) {
            let mut report = || {
                violations.push(Violation {
                    rule: rule.id,
                    tag: element.tag.clone(),
                    node_label: label.clone(),
                    id: id.clone(),
                    message: rule.msg,
                });
            };
            (rule.test)(element, &ctx, &mut report);
        }
    }

    tracing::trace!(
        target: "lumen_a11y",
        tag = %element.tag,
        id = %id,
        violations = violations.len(),
        "rules executed"
    );

    violations
}
