//! Auditor
//!
//! Activation entry point and the construction hook hosts call once
//! per new element. Activation is explicit wiring: nothing here
//! rewrites a framework's factory behind its back. Re-activating means
//! building a new `Auditor`, which replaces configuration wholesale.

use std::sync::Arc;

use lumen_tree::{Composite, Element};

use crate::config::{AuditOptions, Config};
use crate::host::AuditHost;
use crate::notify::{Emitter, PendingWarning, Reporter, TracingEmitter};
use crate::rules::{Registry, Violation};
use crate::{engine, identity, AuditError};

/// One activated audit session: resolved configuration, rule tables,
/// and the host capabilities, all immutable. Shareable across threads.
pub struct Auditor {
    config: Config,
    registry: Registry,
    host: Arc<dyn AuditHost>,
    reporter: Reporter,
}

impl Auditor {
    /// Activate with the standard rule set.
    pub fn new(host: Arc<dyn AuditHost>, options: AuditOptions) -> Result<Self, AuditError> {
        Self::with_registry(host, options, Registry::builtin())
    }

    /// Activate with a custom rule registry.
    pub fn with_registry(
        host: Arc<dyn AuditHost>,
        options: AuditOptions,
        registry: Registry,
    ) -> Result<Self, AuditError> {
        let config = Config::resolve(options)?;
        tracing::debug!(target: "lumen_a11y", config = ?config, "audit session activated");
        Ok(Self {
            config,
            registry,
            host,
            reporter: Reporter::new(Arc::new(TracingEmitter)),
        })
    }

    /// Replace the warn-mode emission sink (default: `tracing`).
    pub fn with_emitter(mut self, emitter: Arc<dyn Emitter>) -> Self {
        self.reporter = Reporter::new(emitter);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The construction hook.
    ///
    /// Hosts call this once per new element, before returning it to the
    /// caller, passing the owning component's name when the element was
    /// produced inside a named composite. Assigns the element an id if
    /// it has none, runs every applicable rule, reports each violation
    /// through the notification pipeline, and returns the violations.
    ///
    /// In throw mode the first violation surviving the user filter is
    /// returned as `Err` and the rest go unreported.
    pub fn audit(
        &self,
        element: &mut Element,
        owner: Option<&str>,
    ) -> Result<Vec<Violation>, AuditError> {
        identity::ensure_id(&mut element.attributes);

        let resolver = |composite: &Composite| self.host.resolve(composite);
        let violations = engine::run(&self.registry, &self.config, element, owner, &resolver);

        let mount = |id: &str, pending: PendingWarning| self.host.after_attach(id, pending);
        for violation in &violations {
            self.reporter.report(violation, &self.config, &mount)?;
        }
        Ok(violations)
    }
}
