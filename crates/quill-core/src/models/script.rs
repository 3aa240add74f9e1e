//! Named scriptblock wrapper with usage telemetry

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// A storable block of script logic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBlock {
    source: String,
}

impl ScriptBlock {
    /// Wrap a piece of script source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The script source text
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for ScriptBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// Scope a stored scriptblock is invoked in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionScope {
    /// Isolated scope of the calling context
    #[default]
    Local,
    /// Shared global scope of the host
    Global,
}

/// A named scriptblock held by the script registry
///
/// Every hand-out of the block records usage telemetry: a retrieval counter
/// and the time of the most recent retrieval. The telemetry is written only
/// by [`block`](NamedScript::block), never by callers, and is never reset.
/// Counter and timestamp updates are safe under concurrent access.
#[derive(Debug)]
pub struct NamedScript {
    name: String,
    scope: ExecutionScope,
    block: Arc<ScriptBlock>,
    retrieval_count: AtomicU64,
    last_retrieved: RwLock<Option<DateTime<Utc>>>,
}

impl NamedScript {
    /// Create an item that runs in the local scope
    pub fn new(name: impl Into<String>, block: ScriptBlock) -> Self {
        Self::with_scope(name, block, ExecutionScope::Local)
    }

    /// Create an item with an explicit execution scope
    pub fn with_scope(name: impl Into<String>, block: ScriptBlock, scope: ExecutionScope) -> Self {
        Self {
            name: name.into(),
            scope,
            block: Arc::new(block),
            retrieval_count: AtomicU64::new(0),
            last_retrieved: RwLock::new(None),
        }
    }

    /// Name the registry stores the item under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scope the block is invoked in
    pub fn scope(&self) -> ExecutionScope {
        self.scope
    }

    /// The stored scriptblock; records the access before handing it out
    pub fn block(&self) -> Arc<ScriptBlock> {
        self.record_access();
        Arc::clone(&self.block)
    }

    /// How often the block has been retrieved
    pub fn retrieval_count(&self) -> u64 {
        self.retrieval_count.load(Ordering::SeqCst)
    }

    /// When the block was last retrieved
    pub fn last_retrieved(&self) -> Option<DateTime<Utc>> {
        *self.last_retrieved.read()
    }

    fn record_access(&self) {
        self.retrieval_count.fetch_add(1, Ordering::SeqCst);
        *self.last_retrieved.write() = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> NamedScript {
        NamedScript::new("Ping", ScriptBlock::new("Test-Connection $args[0]"))
    }

    #[test]
    fn fresh_item_has_no_telemetry() {
        let item = item();
        assert_eq!(item.retrieval_count(), 0);
        assert_eq!(item.last_retrieved(), None);
    }

    #[test]
    fn every_hand_out_is_counted() {
        let item = item();
        for _ in 0..3 {
            let block = item.block();
            assert_eq!(block.source(), "Test-Connection $args[0]");
        }
        assert_eq!(item.retrieval_count(), 3);
        assert!(item.last_retrieved().is_some());
    }

    #[test]
    fn retrieval_timestamps_never_move_backwards() {
        let item = item();
        let _ = item.block();
        let first = item.last_retrieved().unwrap();
        let _ = item.block();
        let second = item.last_retrieved().unwrap();
        assert!(second >= first);
    }

    #[test]
    fn reading_telemetry_does_not_count_as_access() {
        let item = item();
        let _ = item.retrieval_count();
        let _ = item.last_retrieved();
        assert_eq!(item.retrieval_count(), 0);
    }

    #[test]
    fn scope_defaults_to_local() {
        assert_eq!(item().scope(), ExecutionScope::Local);
        let global = NamedScript::with_scope(
            "Cleanup",
            ScriptBlock::new("Remove-Item $env:TEMP\\quill"),
            ExecutionScope::Global,
        );
        assert_eq!(global.scope(), ExecutionScope::Global);
    }
}
