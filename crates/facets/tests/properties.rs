//! Property tests for the filtering rules.

use catalog::VenueRecord;
use facets::{
    BucketBounds, CAPACITY_BUCKETS, Category, FacetSelection, PriceBound, PredicateComposer,
    filter_venues,
};
use proptest::prelude::*;

fn arb_venue() -> impl Strategy<Value = VenueRecord> {
    (
        any::<u16>(),
        proptest::option::of(prop::sample::select(vec![
            "Conference",
            "Weddings",
            "Birthdays",
            "Corporate",
            "Picnics",
        ])),
        proptest::option::of(0u32..1_200),
        proptest::option::of(0u32..2_000),
    )
        .prop_map(|(id, category, capacity, price)| {
            let mut venue = VenueRecord::new(id.to_string());
            venue.category = category.map(str::to_string);
            venue.capacity = capacity;
            venue.price = price.map(f64::from);
            venue
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<VenueRecord>> {
    prop::collection::vec(arb_venue(), 0..40)
}

fn arb_buckets() -> impl Strategy<Value = Vec<BucketBounds>> {
    prop::collection::vec(
        prop::sample::select(CAPACITY_BUCKETS.iter().map(|b| b.bounds).collect::<Vec<_>>()),
        0..8,
    )
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    #[test]
    fn empty_selection_is_identity(catalog in arb_catalog()) {
        let visible = filter_venues(&catalog, &FacetSelection::new());
        let expected: Vec<&VenueRecord> = catalog.iter().collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn output_is_an_ordered_subsequence(catalog in arb_catalog(), buckets in arb_buckets()) {
        let mut selection = FacetSelection::new();
        for bounds in buckets {
            selection.toggle_capacity_bucket(bounds, true).unwrap();
        }

        let visible = filter_venues(&catalog, &selection);
        let positions: Vec<usize> = visible
            .iter()
            .map(|v| catalog.iter().position(|c| std::ptr::eq(c, *v)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn capacity_facet_is_existential_over_buckets(
        catalog in arb_catalog(),
        buckets in arb_buckets(),
    ) {
        let mut selection = FacetSelection::new();
        for bounds in &buckets {
            // Duplicates in `buckets` collapse into one set member
            selection.toggle_capacity_bucket(*bounds, true).unwrap();
        }
        let composer = PredicateComposer::new(&selection);

        for venue in &catalog {
            let expected = buckets.is_empty()
                || venue
                    .capacity
                    .is_some_and(|cap| buckets.iter().any(|b| b.low <= cap && b.high.is_none_or(|h| cap <= h)));
            prop_assert_eq!(composer.admits(venue), expected, "venue {:?}", venue);
        }
    }

    #[test]
    fn toggle_pair_is_idempotent(
        catalog in arb_catalog(),
        base_category in arb_category(),
        category in arb_category(),
        buckets in arb_buckets(),
        bucket_index in 0usize..CAPACITY_BUCKETS.len(),
    ) {
        let mut selection = FacetSelection::new();
        selection.set_category(base_category, true);
        for bounds in buckets {
            selection.toggle_capacity_bucket(bounds, true).unwrap();
        }
        let before_selection = selection.clone();
        let before: Vec<String> = filter_venues(&catalog, &selection)
            .iter()
            .map(|v| v.id.clone())
            .collect();

        // Only meaningful when the value was not already selected
        let bounds = CAPACITY_BUCKETS[bucket_index].bounds;
        let category_was_set = selection.categories().contains(&category);
        let bucket_was_set = selection.capacity_buckets().contains(&bounds);

        if !category_was_set {
            selection.toggle_category(category.as_str(), true).unwrap();
            selection.toggle_category(category.as_str(), false).unwrap();
        }
        if !bucket_was_set {
            selection.toggle_capacity_bucket(bounds, true).unwrap();
            selection.toggle_capacity_bucket(bounds, false).unwrap();
        }

        let after: Vec<String> = filter_venues(&catalog, &selection)
            .iter()
            .map(|v| v.id.clone())
            .collect();
        prop_assert_eq!(&selection, &before_selection);
        prop_assert_eq!(after, before);
    }

    #[test]
    fn inverted_price_range_matches_nothing(
        catalog in arb_catalog(),
        min in 1u32..2_000,
        gap in 1u32..500,
        category in proptest::option::of(arb_category()),
    ) {
        let mut selection = FacetSelection::new();
        if let Some(category) = category {
            selection.set_category(category, true);
        }
        let max = min.saturating_sub(gap);
        prop_assume!(max < min);
        selection.set_price_bound(PriceBound::Min, Some(f64::from(min))).unwrap();
        selection.set_price_bound(PriceBound::Max, Some(f64::from(max))).unwrap();

        prop_assert!(filter_venues(&catalog, &selection).is_empty());
    }
}
