//! Property tests over the synthesis core.

use insightd::catalog;
use insightd::rng::SeededRandom;
use insightd::synth::{self, BusinessQuery};
use proptest::prelude::*;

proptest! {
    /// Synthesis is total: any non-empty text pair produces an in-bounds result.
    #[test]
    fn synthesis_bounds_hold_for_any_input(
        name in "[a-zA-Z0-9 '&-]{1,40}",
        location in "[a-zA-Z0-9 ,-]{1,40}",
        seed in any::<u64>(),
    ) {
        let query = BusinessQuery::new(name, location);
        let mut rng = SeededRandom::new(seed);
        let insight = synth::synthesize(&query, &mut rng);

        prop_assert!(insight.rating >= 3.0 && insight.rating <= 5.0);
        let scaled = insight.rating * 10.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-9);

        prop_assert!(insight.competition.total_competitors >= 5);
        prop_assert!(insight.competition.total_competitors <= 20);
        prop_assert!(insight.competition.estimated_market_share.ends_with('%'));

        prop_assert!(insight.seo.monthly_search_volume >= 500);
        prop_assert!(insight.seo.monthly_search_volume <= 5500);
        prop_assert!(insight.seo.seo_score >= 60 && insight.seo.seo_score <= 100);
        prop_assert!(insight.seo.local_ranking >= 1 && insight.seo.local_ranking <= 10);
        prop_assert_eq!(insight.seo.top_keywords.len(), 3);

        // The always-on SEO recommendation is present in every result.
        prop_assert!(insight.recommendations.iter().any(|r| r.kind == "seo"));
    }

    /// Reviews never drop below the category floor: the multiplier is >= 1.0.
    #[test]
    fn reviews_respect_the_category_floor(
        name in "[a-zA-Z ]{1,30}",
        location in "[a-zA-Z ]{1,30}",
        seed in any::<u64>(),
    ) {
        let category = catalog::classify(&name);
        let city = catalog::resolve(&location);
        let query = BusinessQuery::new(name.clone(), location.clone());
        let mut rng = SeededRandom::new(seed);
        let insight = synth::synthesize(&query, &mut rng);

        prop_assert_eq!(&insight.category, category.id);
        prop_assert!(insight.reviews >= category.review_range.0);
        let ceiling = (f64::from(category.review_range.1) * city.multiplier).floor() as u32;
        prop_assert!(insight.reviews <= ceiling);
    }

    /// Same seed, same insight — the random seam is the only nondeterminism.
    #[test]
    fn synthesis_is_deterministic_under_a_fixed_seed(seed in any::<u64>()) {
        let query = BusinessQuery::new("Grind House Coffee", "Hyderabad");
        let a = synth::synthesize(&query, &mut SeededRandom::new(seed));
        let b = synth::synthesize(&query, &mut SeededRandom::new(seed));
        prop_assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
    }
}
