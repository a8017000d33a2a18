use proptest::prelude::*;
use stylometer_core::model::Distribution;
use stylometer_core::scorer::cosine_similarity;
use stylometer_core::text::count_ngrams;

fn dist_from(tokens: &[String], order: u8) -> Distribution {
    let (counts, total) = count_ngrams(tokens, order);
    Distribution::from_counts(&counts, total)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn probability_mass_is_one_or_absent(
        tokens in proptest::collection::vec("[a-z]{1,8}", 0..120),
        order in 1u8..=2
    ) {
        let dist = dist_from(&tokens, order);
        if !dist.is_empty() {
            let sum: f64 = dist.iter().map(|(_, p)| p).sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "mass was {}", sum);
            prop_assert!(dist.norm() > 0.0);
        }
    }

    #[test]
    fn ranked_order_is_descending(
        tokens in proptest::collection::vec("[a-z]{3,6}", 0..120)
    ) {
        let dist = dist_from(&tokens, 1);
        for pair in dist.ranked().windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn cosine_similarity_stays_in_unit_interval(
        a in proptest::collection::vec("[a-z]{1,6}", 0..80),
        b in proptest::collection::vec("[a-z]{1,6}", 0..80)
    ) {
        let da = dist_from(&a, 1);
        let db = dist_from(&b, 1);
        let s = cosine_similarity(&da, &db);
        prop_assert!(s.is_finite());
        prop_assert!((0.0..=1.0 + 1e-9).contains(&s), "score {}", s);
    }

    #[test]
    fn self_similarity_is_one_when_defined(
        tokens in proptest::collection::vec("[a-z]{3,8}", 1..80)
    ) {
        let d = dist_from(&tokens, 1);
        let s = cosine_similarity(&d, &d);
        prop_assert!((s - 1.0).abs() < 1e-9, "score {}", s);
    }

    #[test]
    fn rank_groups_partition_the_distribution(
        tokens in proptest::collection::vec("[a-z]{3,6}", 0..80)
    ) {
        let dist = dist_from(&tokens, 1);

        let mut seen = 0;
        let mut n = 1;
        loop {
            let group = dist.nth_rank_group(n);
            if group.is_empty() {
                break;
            }
            seen += group.len();
            n += 1;
        }

        prop_assert_eq!(seen, dist.len());
    }
}
