mod common;

use common::{ids, mixed_sitters, named_sitters, priced_sitters, rated_sitters};
use pretty_assertions::assert_eq;
use sitterview::view::ViewStatus;
use sitterview::{
    CollectionView, FilterCriteria, FilterPatch, MissingValue, MissingValuePolicy, Sitter,
    SortCriteria, SortKey, Species,
};

fn loaded(records: Vec<Sitter>) -> CollectionView<Sitter> {
    let mut view = CollectionView::new();
    view.set_raw_collection(records);
    view
}

#[test]
fn max_price_keeps_original_relative_order() {
    let mut view = loaded(priced_sitters());
    view.set_filter_criteria(FilterCriteria {
        max_price: Some(30.0),
        ..FilterCriteria::default()
    });

    assert_eq!(ids(view.derived()), vec!["s0", "s1", "s2"]);
    assert_eq!(view.summary().filtered_out, 2);
}

#[test]
fn max_price_on_rated_records_keeps_collection_order() {
    let mut view = loaded(rated_sitters());
    view.set_filter_criteria(FilterCriteria {
        max_price: Some(30.0),
        ..FilterCriteria::default()
    });

    assert!(view.sort_criteria().is_natural());
    assert_eq!(ids(view.derived()), vec!["s0", "s1", "s2"]);
}

#[test]
fn unsorted_second_page_of_rated_records() {
    let mut view = loaded(rated_sitters()).with_page_size(2);
    view.set_page_index(1);
    assert_eq!(ids(view.page().items.iter().copied()), vec!["s2", "s3"]);

    view.set_sort_criteria(SortCriteria::descending(SortKey::Rating));
    view.clear_sort_criteria();
    assert_eq!(ids(view.page().items.iter().copied()), vec!["s2", "s3"]);
}

#[test]
fn price_descending_without_filter() {
    let mut view = loaded(priced_sitters());
    view.set_sort_criteria(SortCriteria::descending(SortKey::Price));

    let prices: Vec<f64> = view.derived().filter_map(|s| s.price_per_night).collect();
    assert_eq!(prices, vec![50.0, 40.0, 30.0, 20.0, 10.0]);
}

#[test]
fn second_page_of_two() {
    let mut view = loaded(priced_sitters()).with_page_size(2);
    view.set_page_index(1);

    let page = view.page();
    assert_eq!(ids(page.items.iter().copied()), vec!["s2", "s3"]);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_count, 5);
}

#[test]
fn search_is_case_insensitive_substring() {
    let mut view = loaded(named_sitters());
    view.set_filter_criteria(FilterCriteria::with_search("max"));
    assert_eq!(ids(view.derived()), vec!["max", "maxine"]);

    view.set_filter_criteria(FilterCriteria::with_search("MAX"));
    assert_eq!(ids(view.derived()), vec!["max", "maxine"]);
}

#[test]
fn empty_collection_has_one_empty_page() {
    let mut view: CollectionView<Sitter> = CollectionView::new();
    view.set_raw_collection(Vec::new());

    let page = view.page();
    assert_eq!(view.status(), ViewStatus::Loaded);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
    assert_eq!(page.page_index, 0);
}

#[test]
fn default_criteria_restore_full_collection() {
    let sitters = mixed_sitters();
    let mut view = loaded(sitters.clone());
    view.set_filter_criteria(FilterCriteria {
        species: Some(Species::Dog),
        min_rating: Some(4.5),
        ..FilterCriteria::default()
    });
    assert_eq!(view.derived_len(), 2);

    view.clear_filter_criteria();
    assert_eq!(view.derived_len(), sitters.len());
}

#[test]
fn recompute_is_idempotent() {
    let mut view = loaded(mixed_sitters());
    let criteria = FilterCriteria::with_search("e");
    view.set_filter_criteria(criteria.clone());
    let first = view.derived_indices().to_vec();

    view.set_filter_criteria(criteria);
    assert_eq!(view.derived_indices(), first.as_slice());
}

#[test]
fn filter_change_resets_page_but_sort_change_does_not() {
    let mut view = loaded(priced_sitters()).with_page_size(2);
    view.set_page_index(2);

    view.set_sort_criteria(SortCriteria::ascending(SortKey::Price));
    assert_eq!(view.page_index(), 2);

    view.merge_filter_criteria(FilterPatch::search("sitter"));
    assert_eq!(view.page_index(), 0);
}

#[test]
fn missing_price_policy_decides_max_price_membership() {
    let criteria = FilterCriteria {
        max_price: Some(30.0),
        ..FilterCriteria::default()
    };

    // Carmen has no price
    let mut view = loaded(mixed_sitters());
    view.set_sort_criteria(SortCriteria::ascending(SortKey::Name));
    view.set_filter_criteria(criteria);
    assert_eq!(ids(view.derived()), vec!["2"]);

    view.set_missing_value_policy(MissingValuePolicy {
        price: MissingValue::Zero,
        ..MissingValuePolicy::default()
    });
    assert_eq!(ids(view.derived()), vec!["2", "3"]);
}

#[test]
fn independent_views_share_raw_collection() {
    let sitters: std::sync::Arc<[Sitter]> = mixed_sitters().into();

    let mut leeds: CollectionView<Sitter> = CollectionView::new();
    leeds.set_raw_collection(sitters.clone());
    leeds.set_filter_criteria(FilterCriteria::with_search("leeds"));

    let mut cats: CollectionView<Sitter> = CollectionView::new();
    cats.set_raw_collection(sitters);
    cats.set_filter_criteria(FilterCriteria {
        species: Some(Species::Cat),
        ..FilterCriteria::default()
    });

    assert_eq!(ids(leeds.derived()), vec!["1", "4"]);
    assert_eq!(cats.derived_len(), 2);
}
