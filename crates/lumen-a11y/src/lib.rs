//! Lumen Accessibility Audit
//!
//! Audits declaratively built element trees for accessibility defects
//! at construction time.
//!
//! Features:
//! - Declarative rule registry: tag, attribute, and label rule families
//! - Recursive label inference through markup and composite children
//! - Warn or throw notification, with deferred DOM-referencing diagnostics
//! - Device profiles, per-rule exclusions, and user filters
//!
//! The engine never talks to a concrete UI framework. Hosts inject the
//! capabilities in [`host`] at activation and call
//! [`Auditor::audit`](crate::Auditor::audit) once per constructed element.

pub mod aria;
pub mod config;
pub mod engine;
pub mod host;
pub mod identity;
pub mod notify;
pub mod rules;

mod auditor;

pub use auditor::Auditor;
pub use config::{AuditOptions, Config, SrcNodeMode};
pub use host::{AuditHost, DomLookup, MountSignal, NullResolver, RenderResolver};
pub use identity::{ensure_id, reset_ids};
pub use notify::{Emitter, PendingWarning, Reporter, SourceRef, TracingEmitter};
pub use rules::{AttrRule, LabelRule, Registry, RuleId, TagRule, Violation};

/// Audit error
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// Raised in throw mode for a violating node. `source_id` is the
    /// node's id when source inclusion was requested; a live reference
    /// is impossible here because throwing happens before mount.
    #[error("{message}")]
    Violation {
        message: String,
        source_id: Option<String>,
    },

    /// Unrecognized device profile name at activation.
    #[error("unknown device profile: {0}")]
    UnknownDevice(String),
}
