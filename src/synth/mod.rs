//! Insight synthesis — the core of the service.
//!
//! Combines the category classifier and city resolver with fresh randomness
//! to fabricate a plausible analytics result. The algorithm is total over
//! any input pair; validation of empty fields happens at the boundary.
//!
//! Wire names are camelCase to match the original dashboard JSON contract.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CategoryProfile, CityProfile};
use crate::headline;
use crate::rng::RandomSource;

// ─── Wire types ───────────────────────────────────────────────────────────────

/// User-supplied request: business name + free-text location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessQuery {
    pub name: String,
    pub location: String,
}

impl BusinessQuery {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Both fields must be non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.location.trim().is_empty()
    }
}

/// Descriptive insight strings for the detected category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightDetails {
    pub peak_hours: String,
    pub popular_items: Vec<String>,
    pub customer_type: String,
}

/// Location block echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    /// The caller's location string, verbatim.
    pub city: String,
    pub popular_areas: Vec<String>,
    pub demographics: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    /// High above 15 competitors, Medium above 10, otherwise Low.
    pub fn from_competitor_count(count: u32) -> Self {
        if count > 15 {
            Self::High
        } else if count > 10 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub total_competitors: u32,
    /// One-decimal percentage string, e.g. `"23.4%"`.
    pub estimated_market_share: String,
    pub competition_level: CompetitionLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoInsights {
    pub monthly_search_volume: u32,
    /// First three keywords of the category, in table order.
    pub top_keywords: Vec<String>,
    pub seo_score: u32,
    pub local_ranking: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

/// The full synthesized result. Transient — never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInsight {
    /// In `[3.0, 5.0]`, rounded to one decimal place.
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
    pub category: String,
    pub insights: InsightDetails,
    pub location_info: LocationInfo,
    pub competition: Competition,
    pub seo: SeoInsights,
    pub recommendations: Vec<Recommendation>,
}

// ─── Synthesis ────────────────────────────────────────────────────────────────

/// Fabricate a full insight for the query using the given random source.
pub fn synthesize(query: &BusinessQuery, rng: &mut dyn RandomSource) -> BusinessInsight {
    let category = catalog::classify(&query.name);
    let city = catalog::resolve(&query.location);

    let rating = synthesize_rating(category, city, rng);
    let reviews = synthesize_reviews(category, city, rng);

    BusinessInsight {
        rating,
        reviews,
        headline: headline::generate_headline(&query.name, &query.location, rng),
        category: category.id.to_string(),
        insights: InsightDetails {
            peak_hours: category.insights.peak_hours.to_string(),
            popular_items: to_owned_vec(category.insights.popular_items),
            customer_type: category.insights.customer_type.to_string(),
        },
        location_info: LocationInfo {
            city: query.location.clone(),
            popular_areas: to_owned_vec(city.popular_areas),
            demographics: city.demographics.to_string(),
        },
        competition: synthesize_competition(rng),
        seo: synthesize_seo(category, rng),
        recommendations: build_recommendations(category.id, rating, reviews),
    }
}

/// Base rating shifted by the city multiplier, jittered, clamped to
/// `[3.0, 5.0]` and rounded to one decimal.
fn synthesize_rating(
    category: &CategoryProfile,
    city: &CityProfile,
    rng: &mut dyn RandomSource,
) -> f64 {
    let adjustment = (city.multiplier - 1.0) * 0.3;
    let jitter = rng.uniform(-0.3, 0.3);
    let raw = (category.base_rating + adjustment + jitter).clamp(3.0, 5.0);
    (raw * 10.0).round() / 10.0
}

/// Raw draw from the category's inclusive review range, scaled by the city
/// multiplier and floored.
fn synthesize_reviews(
    category: &CategoryProfile,
    city: &CityProfile,
    rng: &mut dyn RandomSource,
) -> u32 {
    let (min, max) = category.review_range;
    let base = rng.uniform_int(min, max);
    (f64::from(base) * city.multiplier).floor() as u32
}

fn synthesize_competition(rng: &mut dyn RandomSource) -> Competition {
    let total_competitors = rng.uniform_int(5, 20);
    let market_share = rng.uniform(10.0, 35.0);
    Competition {
        total_competitors,
        estimated_market_share: format!("{market_share:.1}%"),
        competition_level: CompetitionLevel::from_competitor_count(total_competitors),
    }
}

fn synthesize_seo(category: &CategoryProfile, rng: &mut dyn RandomSource) -> SeoInsights {
    SeoInsights {
        monthly_search_volume: rng.uniform_int(500, 5500),
        top_keywords: to_owned_vec(&category.keywords[..3.min(category.keywords.len())]),
        seo_score: rng.uniform_int(60, 100),
        local_ranking: rng.uniform_int(1, 10),
    }
}

/// Fixed rule order; each rule appends at most one recommendation.
pub fn build_recommendations(category_id: &str, rating: f64, reviews: u32) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if rating < 4.0 {
        out.push(Recommendation {
            kind: "rating".to_string(),
            priority: Priority::High,
            title: "Improve Customer Satisfaction".to_string(),
            description: "Focus on service quality and customer experience to boost ratings"
                .to_string(),
        });
    }

    if reviews < 50 {
        out.push(Recommendation {
            kind: "reviews".to_string(),
            priority: Priority::High,
            title: "Increase Review Volume".to_string(),
            description:
                "Encourage satisfied customers to leave reviews through follow-up campaigns"
                    .to_string(),
        });
    }

    out.push(Recommendation {
        kind: "seo".to_string(),
        priority: Priority::Medium,
        title: "Optimize Online Presence".to_string(),
        description: "Use generated headlines and keywords to improve search visibility"
            .to_string(),
    });

    if category_id == "coffee" || category_id == "restaurant" {
        out.push(Recommendation {
            kind: "social".to_string(),
            priority: Priority::Medium,
            title: "Social Media Marketing".to_string(),
            description: "Share food photos and customer experiences on social platforms"
                .to_string(),
        });
    }

    out
}

fn to_owned_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    fn query() -> BusinessQuery {
        BusinessQuery::new("Third Wave Coffee", "Indiranagar, Bangalore")
    }

    #[test]
    fn rating_is_bounded_and_one_decimal() {
        for seed in 0..200u64 {
            let mut rng = SeededRandom::new(seed);
            let insight = synthesize(&query(), &mut rng);
            assert!(insight.rating >= 3.0 && insight.rating <= 5.0);
            let scaled = insight.rating * 10.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "rating {} not one-decimal",
                insight.rating
            );
        }
    }

    #[test]
    fn reviews_scale_with_city_multiplier() {
        let mut rng = SeededRandom::new(42);
        let insight = synthesize(&query(), &mut rng);
        // coffee range is 85..=250; bangalore multiplier 1.3.
        assert!(insight.reviews >= 85);
        assert!(insight.reviews <= (250.0_f64 * 1.3).floor() as u32);
    }

    #[test]
    fn category_and_location_blocks_are_populated() {
        let mut rng = SeededRandom::new(3);
        let insight = synthesize(&query(), &mut rng);
        assert_eq!(insight.category, "coffee");
        assert_eq!(insight.location_info.city, "Indiranagar, Bangalore");
        assert_eq!(insight.location_info.popular_areas[0], "Koramangala");
        assert_eq!(insight.insights.peak_hours, "7-10 AM, 2-4 PM");
    }

    #[test]
    fn seo_keywords_are_first_three_in_table_order() {
        let mut rng = SeededRandom::new(3);
        let insight = synthesize(&query(), &mut rng);
        assert_eq!(insight.seo.top_keywords, ["coffee", "cafe", "espresso"]);
        assert!(insight.seo.seo_score >= 60 && insight.seo.seo_score <= 100);
        assert!(insight.seo.local_ranking >= 1 && insight.seo.local_ranking <= 10);
        assert!(insight.seo.monthly_search_volume >= 500);
        assert!(insight.seo.monthly_search_volume <= 5500);
    }

    #[test]
    fn competition_level_thresholds() {
        assert_eq!(
            CompetitionLevel::from_competitor_count(5),
            CompetitionLevel::Low
        );
        assert_eq!(
            CompetitionLevel::from_competitor_count(10),
            CompetitionLevel::Low
        );
        assert_eq!(
            CompetitionLevel::from_competitor_count(11),
            CompetitionLevel::Medium
        );
        assert_eq!(
            CompetitionLevel::from_competitor_count(15),
            CompetitionLevel::Medium
        );
        assert_eq!(
            CompetitionLevel::from_competitor_count(16),
            CompetitionLevel::High
        );
    }

    #[test]
    fn low_rating_low_reviews_coffee_yields_four_rules_in_order() {
        let recs = build_recommendations("coffee", 3.5, 10);
        let kinds: Vec<&str> = recs.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, ["rating", "reviews", "seo", "social"]);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].priority, Priority::High);
        assert_eq!(recs[2].priority, Priority::Medium);
        assert_eq!(recs[3].priority, Priority::Medium);
    }

    #[test]
    fn healthy_retail_business_gets_only_the_seo_rule() {
        let recs = build_recommendations("retail", 4.6, 120);
        let kinds: Vec<&str> = recs.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, ["seo"]);
    }

    #[test]
    fn wire_shape_uses_original_json_names() {
        let mut rng = SeededRandom::new(11);
        let insight = synthesize(&query(), &mut rng);
        let v = serde_json::to_value(&insight).unwrap();
        assert!(v["competition"]["totalCompetitors"].is_number());
        assert!(v["competition"]["estimatedMarketShare"]
            .as_str()
            .unwrap()
            .ends_with('%'));
        assert!(v["seo"]["monthlySearchVolume"].is_number());
        assert!(v["locationInfo"]["popularAreas"].is_array());
        // Coffee always picks up the trailing social-media rule.
        let recs = v["recommendations"].as_array().unwrap();
        let last = recs.last().unwrap();
        assert_eq!(last["type"], "social");
        assert_eq!(last["priority"], "medium");
    }

    #[test]
    fn query_validation_trims_whitespace() {
        assert!(BusinessQuery::new("A", "B").is_valid());
        assert!(!BusinessQuery::new("  ", "B").is_valid());
        assert!(!BusinessQuery::new("A", "\t").is_valid());
    }
}
