//! Audit Configuration
//!
//! Raw per-activation options resolve once into the read-only
//! configuration every other component consumes. Re-activation replaces
//! the configuration wholesale; nothing mutates it afterwards.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::AuditError;

/// How a violation should reference its source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SrcNodeMode {
    /// No source reference; warnings emit immediately.
    #[default]
    Off,
    /// Defer until mount, then attach the live node reference.
    Live,
    /// Defer until mount, then embed the node's outer markup, for
    /// transports that cannot carry node references.
    AsString,
}

/// User filter over `(node_label, id)`; returning false suppresses the
/// violation entirely.
pub type FilterFn = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Raw options accepted at activation.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditOptions {
    /// Rule ids that never run.
    pub exclude: Vec<String>,
    /// Device profile names; `"mobile"` adds a fixed exclusion set.
    pub device: Vec<String>,
    pub include_src_node: SrcNodeMode,
    /// Prepended verbatim to every composed message.
    pub warning_prefix: String,
    /// Raise instead of warning.
    pub throw_on_failure: bool,
    #[serde(skip)]
    pub filter: Option<FilterFn>,
}

impl fmt::Debug for AuditOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditOptions")
            .field("exclude", &self.exclude)
            .field("device", &self.device)
            .field("include_src_node", &self.include_src_node)
            .field("warning_prefix", &self.warning_prefix)
            .field("throw_on_failure", &self.throw_on_failure)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Rule ids excluded by the mobile profile: keyboard affordances have
/// no meaning on touch devices.
const MOBILE_EXCLUSIONS: &[&str] = &["BUTTON_ROLE_SPACE", "BUTTON_ROLE_ENTER", "NO_TABINDEX"];

const KNOWN_DEVICES: &[&str] = &["desktop", "mobile"];

/// Resolved, immutable configuration for one audit session.
#[derive(Clone)]
pub struct Config {
    exclude: HashSet<String>,
    pub include_src_node: SrcNodeMode,
    pub warning_prefix: String,
    pub throw_on_failure: bool,
    pub filter: Option<FilterFn>,
}

impl Config {
    /// Resolve raw options. Unknown device profiles are fatal here,
    /// before any element is audited.
    pub fn resolve(options: AuditOptions) -> Result<Self, AuditError> {
        for device in &options.device {
            if !KNOWN_DEVICES.contains(&device.as_str()) {
                return Err(AuditError::UnknownDevice(device.clone()));
            }
        }

        let mut exclude: HashSet<String> = options.exclude.into_iter().collect();
        if options.device.iter().any(|d| d == "mobile") {
            exclude.extend(MOBILE_EXCLUSIONS.iter().map(|id| id.to_string()));
        }

        Ok(Self {
            exclude,
            include_src_node: options.include_src_node,
            warning_prefix: options.warning_prefix,
            throw_on_failure: options.throw_on_failure,
            filter: options.filter,
        })
    }

    /// Whether a rule id survives the exclusion sets.
    pub fn rule_enabled(&self, id: &str) -> bool {
        !self.exclude.contains(id)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("exclude", &self.exclude)
            .field("include_src_node", &self.include_src_node)
            .field("warning_prefix", &self.warning_prefix)
            .field("throw_on_failure", &self.throw_on_failure)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
