//! Scriptblock usage telemetry under concurrent access

use std::sync::Arc;
use std::thread;

use quill_core::{ExecutionScope, NamedScript, ScriptBlock};

#[test]
fn concurrent_hand_outs_lose_no_counts() {
    let item = Arc::new(NamedScript::new(
        "Collect-Diagnostics",
        ScriptBlock::new("Get-EventLog -Newest 50"),
    ));

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let item = Arc::clone(&item);
            thread::spawn(move || {
                for _ in 0..100 {
                    let block = item.block();
                    assert_eq!(block.source(), "Get-EventLog -Newest 50");
                }
            })
        })
        .collect();
    for handle in threads {
        handle.join().unwrap();
    }

    assert_eq!(item.retrieval_count(), 800);
    assert!(item.last_retrieved().is_some());
}

#[test]
fn telemetry_survives_shared_ownership() {
    let item = Arc::new(NamedScript::with_scope(
        "Initialize-Session",
        ScriptBlock::new("Set-Location $HOME"),
        ExecutionScope::Global,
    ));

    let first = item.block();
    let second = Arc::clone(&item).block();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(item.retrieval_count(), 2);
    assert_eq!(item.scope(), ExecutionScope::Global);
}
