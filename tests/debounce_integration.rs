mod common;

use std::time::Duration;

use common::named_sitters;
use pretty_assertions::assert_eq;
use sitterview::{forward_search, CollectionView, DebouncedInput, Sitter, ViewStore};

fn store() -> ViewStore<Sitter> {
    let mut view = CollectionView::new();
    view.set_raw_collection(named_sitters());
    ViewStore::new(view)
}

#[tokio::test(start_paused = true)]
async fn typing_burst_recomputes_once_with_last_value() {
    let mut store = store();
    let mut snapshots = store.subscribe();
    let (input, mut searches) = DebouncedInput::<String>::spawn(Duration::from_millis(300));

    let typing = async move {
        for partial in ["b", "be", "bel", "m", "ma", "max"] {
            input.push(partial).unwrap();
            tokio::time::sleep(Duration::from_millis(40)).await;
        }
        // Wait out the quiet period, then close the input
        tokio::time::sleep(Duration::from_millis(400)).await;
        drop(input);
    };

    tokio::join!(typing, forward_search(&mut searches, &mut store));

    assert!(snapshots.has_changed().unwrap());
    let snapshot = snapshots.borrow_and_update().clone();
    assert_eq!(snapshot.visible_ids, vec!["max", "maxine"]);
    assert_eq!(snapshot.summary.active_constraints, 1);
    assert_eq!(
        store.view().filter_criteria().search.as_deref(),
        Some("max")
    );
}

#[tokio::test(start_paused = true)]
async fn separated_bursts_each_apply() {
    let mut store = store();
    let (input, mut searches) = DebouncedInput::<String>::spawn(Duration::from_millis(100));

    input.push("bella").unwrap();
    let first = searches.recv().await.unwrap();
    store.apply_search(first);
    assert_eq!(store.snapshot().visible_ids, vec!["bella"]);

    input.push("").unwrap();
    let second = searches.recv().await.unwrap();
    store.apply_search(second);
    assert_eq!(store.snapshot().total_count, 3);
}

#[tokio::test(start_paused = true)]
async fn closing_mid_burst_applies_nothing() {
    let mut store = store();
    let (input, mut searches) = DebouncedInput::<String>::spawn(Duration::from_millis(300));

    input.push("max").unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    drop(input);

    forward_search(&mut searches, &mut store).await;
    assert_eq!(store.snapshot().total_count, 3);
    assert_eq!(store.view().filter_criteria().search, None);
}
