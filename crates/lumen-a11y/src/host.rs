//! Host Capabilities
//!
//! The engine never calls into a concrete UI framework. Hosts inject
//! these capabilities at activation; each is small enough to implement
//! with a closure, so every algorithm here is testable without any
//! framework present.

use lumen_tree::{Child, Composite};

use crate::notify::PendingWarning;

/// Resolves an opaque composite child to its rendered output.
///
/// Implementations must be free of side effects the audit can observe.
/// Resolution failures (the component raised, or rendered nothing) map
/// to `None`; the label search treats both as "contributes no label".
pub trait RenderResolver {
    fn resolve(&self, composite: &Composite) -> Option<Child>;
}

impl<F> RenderResolver for F
where
    F: Fn(&Composite) -> Option<Child>,
{
    fn resolve(&self, composite: &Composite) -> Option<Child> {
        self(composite)
    }
}

/// Resolver that never resolves anything. Lets the label algorithm run
/// against plain markup with no host wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl RenderResolver for NullResolver {
    fn resolve(&self, _composite: &Composite) -> Option<Child> {
        None
    }
}

/// Mount signal: the host invokes the pending warning after the node
/// with the given id is attached to, or updated within, a live tree.
///
/// Invoked at most once per pending warning; a warning the host never
/// drives is dropped silently, by contract.
pub trait MountSignal {
    fn after_attach(&self, id: &str, pending: PendingWarning);
}

impl<F> MountSignal for F
where
    F: Fn(&str, PendingWarning),
{
    fn after_attach(&self, id: &str, pending: PendingWarning) {
        self(id, pending)
    }
}

/// Fetches a mounted node for inclusion in a diagnostic. Consulted only
/// at deferred-emission time, never during rule execution.
pub trait DomLookup {
    /// Serialized outer markup of the node, if it is mounted.
    fn outer_markup(&self, id: &str) -> Option<String>;

    /// True when a live node with this id exists.
    fn exists(&self, id: &str) -> bool {
        self.outer_markup(id).is_some()
    }
}

/// Everything the auditor needs from its host framework.
pub trait AuditHost: RenderResolver + MountSignal + Send + Sync {}

impl<T: RenderResolver + MountSignal + Send + Sync> AuditHost for T {}
