use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::cmp::Ordering;
use titlesort::prelude::*;

fn title() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-dA-D ]{0,6}",
        "\\PC{0,10}",
    ]
}

fn titles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(title(), 0..64)
}

fn multiset(titles: &[String]) -> Vec<String> {
    let mut multiset = titles.to_vec();
    multiset.sort();
    multiset
}

proptest! {
    #[test]
    fn sort_preserves_length_and_multiset(input in titles()) {
        let sorted = merge_sort(&input);

        prop_assert_eq!(sorted.len(), input.len());
        prop_assert_eq!(multiset(&sorted), multiset(&input));
    }

    #[test]
    fn sort_output_is_ordered(input in titles()) {
        prop_assert!(is_sorted(&merge_sort(&input)));
    }

    #[test]
    fn sort_is_idempotent(input in titles()) {
        let once = merge_sort(&input);
        let twice = merge_sort(&once);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_ignores_input_permutation(
        input in prop::collection::hash_set("[a-z]{0,4}[A-Z]?", 0..32),
        seed in any::<u64>(),
    ) {
        // Only titles that never compare equal have a single sorted order.
        let mut unique: Vec<String> = Vec::new();
        for title in input {
            if !unique.iter().any(|seen| compare_titles(seen, &title) == Ordering::Equal) {
                unique.push(title);
            }
        }

        let mut shuffled = unique.clone();
        shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(merge_sort(&shuffled), merge_sort(&unique));
    }

    #[test]
    fn sort_is_stable(input in titles()) {
        let indices = merge_sort_indices(&input);

        for pair in indices.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if compare_titles(&input[a], &input[b]) == Ordering::Equal {
                prop_assert!(a < b, "equal titles {:?} and {:?} reordered", input[a], input[b]);
            }
        }
    }

    #[test]
    fn search_finds_every_member(input in titles()) {
        let sorted = merge_sort(&input);

        for title in &input {
            let index = binary_search(&sorted, title);
            prop_assert!(index.is_some(), "{:?} not found", title);

            let found = &sorted[index.unwrap_or_default()];
            prop_assert_eq!(compare_titles(found, title), Ordering::Equal);
        }
    }

    #[test]
    fn search_rejects_absent_titles(input in titles(), query in title()) {
        let sorted = merge_sort(&input);
        let present = input.iter().any(|t| compare_titles(t, &query) == Ordering::Equal);

        prop_assert_eq!(binary_search(&sorted, &query).is_some(), present);
    }

    #[test]
    fn compare_matches_lowercased_strings(a in title(), b in title()) {
        prop_assert_eq!(compare_titles(&a, &b), a.to_lowercase().cmp(&b.to_lowercase()));
    }
}
