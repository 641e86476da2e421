//! Algebraic laws of the list-set library

use framesets::listset::{compress, difference, intersection, subset, union};
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{1,2}", 0..12)
}

proptest! {
    #[test]
    fn compress_is_idempotent(list in names()) {
        let once = compress(&list);
        prop_assert_eq!(compress(&once), once.clone());
        prop_assert!(once.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn union_is_commutative(a in names(), b in names()) {
        prop_assert_eq!(union(&a, &b), union(&b, &a));
    }

    #[test]
    fn intersection_and_difference_partition(a in names(), b in names()) {
        let whole = compress(&a).len();
        prop_assert_eq!(whole, intersection(&a, &b).len() + difference(&a, &b).len());
    }

    #[test]
    fn parts_are_subsets(a in names(), b in names()) {
        prop_assert!(subset(&intersection(&a, &b), &a));
        prop_assert!(subset(&difference(&a, &b), &a));
        prop_assert!(subset(&a, &union(&a, &b)));
    }
}
