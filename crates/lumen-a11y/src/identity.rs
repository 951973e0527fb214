//! Identity Assignment
//!
//! Process-unique fallback ids for audited nodes, used to correlate a
//! violation with a concrete DOM node after mount.

use std::sync::atomic::{AtomicU64, Ordering};

use lumen_tree::AttrMap;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Ensure `attributes.id` is set, generating `a11y-<n>` when absent.
///
/// Caller-supplied truthy ids are authoritative and never overwritten.
/// Generated ids draw from a process-wide strictly increasing counter;
/// no two calls ever receive the same one.
pub fn ensure_id(attrs: &mut AttrMap) -> String {
    if let Some(value) = attrs.get("id") {
        if value.is_truthy() {
            return value.to_string();
        }
    }
    let id = format!("a11y-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed));
    attrs.set("id", id.as_str());
    id
}

/// Rewind the id generator.
///
/// Test isolation only. Resetting mid-session breaks the uniqueness
/// guarantee that deferred diagnostics rely on.
pub fn reset_ids() {
    NEXT_ID.store(0, Ordering::SeqCst);
}
