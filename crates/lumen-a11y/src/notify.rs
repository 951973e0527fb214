//! Notification Pipeline
//!
//! Turns a violation into a raised error or a warning: user filter,
//! message composition, then emission. Warnings that should reference
//! the mounted node are deferred until the host's mount signal fires,
//! because the audit runs at construction time, before any mount.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{Config, SrcNodeMode};
use crate::host::{DomLookup, MountSignal};
use crate::rules::Violation;
use crate::AuditError;

/// Where a warning points back into the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SourceRef {
    /// Id of the mounted node; hosts holding live references resolve it.
    Node(String),
    /// Serialized outer markup of the node.
    Markup(String),
}

/// Sink for warn-mode diagnostics.
pub trait Emitter: Send + Sync {
    fn warn(&self, message: &str, source: Option<&SourceRef>);
}

/// Default sink: structured warning events via `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEmitter;

impl Emitter for TracingEmitter {
    fn warn(&self, message: &str, source: Option<&SourceRef>) {
        match source {
            Some(SourceRef::Node(id)) => {
                tracing::warn!(target: "lumen_a11y", src = %id, "{message}");
            }
            Some(SourceRef::Markup(markup)) => {
                tracing::warn!(target: "lumen_a11y", src = %markup, "{message}");
            }
            None => tracing::warn!(target: "lumen_a11y", "{message}"),
        }
    }
}

/// A warning whose emission waits for the mount signal.
///
/// One-shot: emitting consumes it. Dropping it unemitted is the
/// documented outcome for nodes that never mount.
pub struct PendingWarning {
    message: String,
    id: String,
    mode: SrcNodeMode,
    emitter: Arc<dyn Emitter>,
}

impl PendingWarning {
    /// Id of the node this warning is waiting on.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Emit now, looking the node up in the mounted document.
    ///
    /// A lookup miss (the node was removed, or its component rendered
    /// nothing) emits the warning without a source rather than failing.
    pub fn emit(self, dom: &dyn DomLookup) {
        let source = match self.mode {
            SrcNodeMode::Off => None,
            SrcNodeMode::Live => dom.exists(&self.id).then(|| SourceRef::Node(self.id.clone())),
            SrcNodeMode::AsString => dom.outer_markup(&self.id).map(SourceRef::Markup),
        };
        self.emitter.warn(&self.message, source.as_ref());
    }
}

impl fmt::Debug for PendingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingWarning")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Violation reporter bound to one emission sink.
pub struct Reporter {
    emitter: Arc<dyn Emitter>,
}

impl Reporter {
    pub fn new(emitter: Arc<dyn Emitter>) -> Self {
        Self { emitter }
    }

    /// Filter, compose, and emit one violation.
    ///
    /// Returns `Err` only in throw mode, carrying the composed message.
    /// In warn mode with source inclusion the emission is handed to the
    /// mount signal as a [`PendingWarning`].
    pub fn report(
        &self,
        violation: &Violation,
        config: &Config,
        mount: &dyn MountSignal,
    ) -> Result<(), AuditError> {
        if let Some(filter) = &config.filter {
            if !filter(&violation.node_label, &violation.id) {
                return Ok(());
            }
        }

        let message = format!(
            "{}{} {}",
            config.warning_prefix, violation.node_label, violation.message
        );

        if config.throw_on_failure {
            let source_id = (config.include_src_node != SrcNodeMode::Off)
                .then(|| violation.id.clone());
            return Err(AuditError::Violation { message, source_id });
        }

        match config.include_src_node {
            SrcNodeMode::Off => self.emitter.warn(&message, None),
            mode => mount.after_attach(
                &violation.id,
                PendingWarning {
                    message,
                    id: violation.id.clone(),
                    mode,
                    emitter: Arc::clone(&self.emitter),
                },
            ),
        }
        Ok(())
    }
}
