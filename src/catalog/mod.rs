//! Static category and city lookup tables.
//!
//! Both tables are immutable, declared-order data baked into the binary.
//! Matching is first-hit substring search over the lower-cased input, so
//! table order is part of the contract: earlier entries shadow later ones.

/// Descriptive insight strings attached to a business category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInsights {
    pub peak_hours: &'static str,
    pub popular_items: &'static [&'static str],
    pub customer_type: &'static str,
}

/// One supported business category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryProfile {
    pub id: &'static str,
    /// Baseline rating before location adjustment and jitter.
    pub base_rating: f64,
    /// Inclusive bounds for the raw review-count draw.
    pub review_range: (u32, u32),
    /// Matched as substrings against the lower-cased business name.
    pub keywords: &'static [&'static str],
    pub insights: CategoryInsights,
}

/// Per-city adjustment profile.
#[derive(Debug, Clone, Copy)]
pub struct CityProfile {
    /// Matched as a substring of the lower-cased location string.
    /// Empty for the fallback profile, which sits outside the search table.
    pub city: &'static str,
    pub multiplier: f64,
    pub popular_areas: &'static [&'static str],
    pub demographics: &'static str,
}

// ─── Category table ───────────────────────────────────────────────────────────

pub const CATEGORIES: &[CategoryProfile] = &[
    CategoryProfile {
        id: "coffee",
        base_rating: 4.3,
        review_range: (85, 250),
        keywords: &[
            "coffee",
            "cafe",
            "espresso",
            "latte",
            "cappuccino",
            "brew",
            "roastery",
            "beans",
        ],
        insights: CategoryInsights {
            peak_hours: "7-10 AM, 2-4 PM",
            popular_items: &["Espresso", "Cappuccino", "Cold Brew"],
            customer_type: "Students, Professionals, Coffee Enthusiasts",
        },
    },
    CategoryProfile {
        id: "restaurant",
        base_rating: 4.1,
        review_range: (120, 400),
        keywords: &[
            "restaurant",
            "dining",
            "food",
            "kitchen",
            "bistro",
            "eatery",
            "grill",
        ],
        insights: CategoryInsights {
            peak_hours: "12-2 PM, 7-9 PM",
            popular_items: &["Signature Dishes", "Chef Specials", "Desserts"],
            customer_type: "Families, Couples, Food Lovers",
        },
    },
    CategoryProfile {
        id: "pizza",
        base_rating: 4.2,
        review_range: (90, 300),
        keywords: &["pizza", "pizzeria", "italian", "slice", "margherita", "pepperoni"],
        insights: CategoryInsights {
            peak_hours: "6-10 PM, Weekends",
            popular_items: &["Margherita", "Pepperoni", "Veggie Supreme"],
            customer_type: "Families, Young Adults, Groups",
        },
    },
    CategoryProfile {
        id: "bakery",
        base_rating: 4.4,
        review_range: (60, 180),
        keywords: &[
            "bakery",
            "bread",
            "pastry",
            "cake",
            "croissant",
            "muffin",
            "bakehouse",
        ],
        insights: CategoryInsights {
            peak_hours: "7-11 AM, 4-6 PM",
            popular_items: &["Fresh Bread", "Pastries", "Custom Cakes"],
            customer_type: "Local Residents, Office Workers",
        },
    },
    CategoryProfile {
        id: "fastfood",
        base_rating: 3.9,
        review_range: (200, 500),
        keywords: &["burger", "fast", "quick", "fries", "sandwich", "wrap", "drive"],
        insights: CategoryInsights {
            peak_hours: "12-2 PM, 6-8 PM",
            popular_items: &["Burgers", "Fries", "Combo Meals"],
            customer_type: "Students, Busy Professionals, Families",
        },
    },
    CategoryProfile {
        id: "indian",
        base_rating: 4.3,
        review_range: (80, 250),
        keywords: &["indian", "curry", "biryani", "tandoor", "masala", "dal", "naan"],
        insights: CategoryInsights {
            peak_hours: "12-2 PM, 7-9 PM",
            popular_items: &["Biryani", "Butter Chicken", "Naan"],
            customer_type: "Families, Indian Food Lovers, Tourists",
        },
    },
    CategoryProfile {
        id: "chinese",
        base_rating: 4.1,
        review_range: (70, 200),
        keywords: &["chinese", "noodles", "fried rice", "dim sum", "wok", "szechuan"],
        insights: CategoryInsights {
            peak_hours: "6-9 PM, Weekends",
            popular_items: &["Fried Rice", "Noodles", "Sweet & Sour"],
            customer_type: "Families, Young Adults, Groups",
        },
    },
    CategoryProfile {
        id: "bar",
        base_rating: 4.0,
        review_range: (100, 300),
        keywords: &["bar", "pub", "drinks", "cocktail", "beer", "wine", "lounge"],
        insights: CategoryInsights {
            peak_hours: "6-11 PM, Weekends",
            popular_items: &["Craft Beer", "Cocktails", "Bar Snacks"],
            customer_type: "Young Adults, Professionals, Groups",
        },
    },
    CategoryProfile {
        id: "gym",
        base_rating: 4.2,
        review_range: (50, 150),
        keywords: &["gym", "fitness", "workout", "training", "exercise", "health"],
        insights: CategoryInsights {
            peak_hours: "6-9 AM, 6-9 PM",
            popular_items: &["Personal Training", "Group Classes", "Equipment"],
            customer_type: "Fitness Enthusiasts, Health Conscious",
        },
    },
    CategoryProfile {
        id: "salon",
        base_rating: 4.3,
        review_range: (40, 120),
        keywords: &["salon", "hair", "beauty", "spa", "styling", "cut", "color"],
        insights: CategoryInsights {
            peak_hours: "10 AM-6 PM, Weekends",
            popular_items: &["Haircuts", "Styling", "Treatments"],
            customer_type: "All Demographics, Beauty Conscious",
        },
    },
    CategoryProfile {
        id: "retail",
        base_rating: 4.0,
        review_range: (60, 200),
        keywords: &["store", "shop", "boutique", "retail", "fashion", "clothing"],
        insights: CategoryInsights {
            peak_hours: "11 AM-8 PM, Weekends",
            popular_items: &["Seasonal Collections", "Accessories", "Sale Items"],
            customer_type: "Fashion Conscious, All Ages",
        },
    },
    CategoryProfile {
        id: "medical",
        base_rating: 4.5,
        review_range: (30, 100),
        keywords: &["clinic", "medical", "doctor", "health", "dental", "hospital"],
        insights: CategoryInsights {
            peak_hours: "9 AM-5 PM, Weekdays",
            popular_items: &["Consultations", "Check-ups", "Treatments"],
            customer_type: "Patients, Health Seekers",
        },
    },
    CategoryProfile {
        id: "automotive",
        base_rating: 4.1,
        review_range: (25, 80),
        keywords: &["auto", "car", "repair", "service", "garage", "mechanic"],
        insights: CategoryInsights {
            peak_hours: "8 AM-6 PM, Weekdays",
            popular_items: &["Oil Changes", "Repairs", "Maintenance"],
            customer_type: "Car Owners, Fleet Managers",
        },
    },
    CategoryProfile {
        id: "hotel",
        base_rating: 4.2,
        review_range: (100, 400),
        keywords: &["hotel", "lodge", "accommodation", "stay", "resort", "inn"],
        insights: CategoryInsights {
            peak_hours: "24/7 Service",
            popular_items: &["Rooms", "Room Service", "Amenities"],
            customer_type: "Travelers, Business Guests, Tourists",
        },
    },
    CategoryProfile {
        id: "education",
        base_rating: 4.4,
        review_range: (20, 100),
        keywords: &["school", "college", "education", "training", "institute", "academy"],
        insights: CategoryInsights {
            peak_hours: "9 AM-5 PM, Weekdays",
            popular_items: &["Courses", "Programs", "Certifications"],
            customer_type: "Students, Parents, Professionals",
        },
    },
];

/// Index of the fallback category (`retail`) in [`CATEGORIES`].
const DEFAULT_CATEGORY_INDEX: usize = 10;

// ─── City table ───────────────────────────────────────────────────────────────

pub const CITIES: &[CityProfile] = &[
    CityProfile {
        city: "hyderabad",
        multiplier: 1.2,
        popular_areas: &[
            "Banjara Hills",
            "Jubilee Hills",
            "Gachibowli",
            "Hitech City",
            "Kondapur",
        ],
        demographics: "Tech professionals, Students, Families",
    },
    CityProfile {
        city: "bangalore",
        multiplier: 1.3,
        popular_areas: &[
            "Koramangala",
            "Indiranagar",
            "Whitefield",
            "Electronic City",
            "MG Road",
        ],
        demographics: "IT professionals, Young professionals, Students",
    },
    CityProfile {
        city: "mumbai",
        multiplier: 1.5,
        popular_areas: &["Bandra", "Andheri", "Powai", "Lower Parel", "Juhu"],
        demographics: "Business professionals, Bollywood industry, Families",
    },
    CityProfile {
        city: "delhi",
        multiplier: 1.4,
        popular_areas: &[
            "Connaught Place",
            "Khan Market",
            "Karol Bagh",
            "Lajpat Nagar",
            "Saket",
        ],
        demographics: "Government employees, Business owners, Students",
    },
    CityProfile {
        city: "chennai",
        multiplier: 1.1,
        popular_areas: &["T. Nagar", "Anna Nagar", "Adyar", "Velachery", "OMR"],
        demographics: "IT professionals, Traditional families, Students",
    },
    CityProfile {
        city: "pune",
        multiplier: 1.2,
        popular_areas: &["Koregaon Park", "Viman Nagar", "Baner", "Kothrud", "Camp"],
        demographics: "IT professionals, Students, Young families",
    },
    CityProfile {
        city: "kolkata",
        multiplier: 1.0,
        popular_areas: &["Park Street", "Salt Lake", "Ballygunge", "New Town", "Howrah"],
        demographics: "Intellectuals, Artists, Traditional families",
    },
];

/// Fallback profile for locations that match no known city.
pub const DEFAULT_CITY: CityProfile = CityProfile {
    city: "",
    multiplier: 1.0,
    popular_areas: &["City Center"],
    demographics: "Local residents",
};

// ─── Lookup ───────────────────────────────────────────────────────────────────

/// Map a free-text business name to its category profile.
///
/// First category (in table order) with any keyword contained in the
/// lower-cased name wins; names matching nothing fall back to `retail`.
pub fn classify(name: &str) -> &'static CategoryProfile {
    let name = name.to_lowercase();
    CATEGORIES
        .iter()
        .find(|c| c.keywords.iter().any(|k| name.contains(k)))
        .unwrap_or(&CATEGORIES[DEFAULT_CATEGORY_INDEX])
}

/// Map a free-text location to a city profile.
///
/// First city (in table order) whose key is a substring of the lower-cased
/// location wins; unknown locations get [`DEFAULT_CITY`].
pub fn resolve(location: &str) -> &'static CityProfile {
    let location = location.to_lowercase();
    CITIES
        .iter()
        .find(|c| location.contains(c.city))
        .unwrap_or(&DEFAULT_CITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_index_points_at_retail() {
        assert_eq!(CATEGORIES[DEFAULT_CATEGORY_INDEX].id, "retail");
    }

    #[test]
    fn classify_matches_keyword_case_insensitively() {
        assert_eq!(classify("Blue Tokai COFFEE Roasters").id, "coffee");
        assert_eq!(classify("Mehta's Pizzeria").id, "pizza");
        assert_eq!(classify("FitLife Gym").id, "gym");
    }

    #[test]
    fn classify_first_match_wins_on_overlap() {
        // "health" belongs to both gym and medical; gym is declared first.
        assert_eq!(classify("Sunrise Health Center").id, "gym");
    }

    #[test]
    fn classify_unknown_name_falls_back_to_retail() {
        assert_eq!(classify("Acme Widgets").id, "retail");
        assert_eq!(classify("").id, "retail");
    }

    #[test]
    fn resolve_matches_city_substring() {
        let p = resolve("Koramangala, Bangalore");
        assert_eq!(p.city, "bangalore");
        assert!((p.multiplier - 1.3).abs() < f64::EPSILON);
    }

    #[test]
    fn resolve_unknown_location_gets_default_profile() {
        let p = resolve("Springfield");
        assert!((p.multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(p.popular_areas, ["City Center"]);
        assert_eq!(p.demographics, "Local residents");
    }

    #[test]
    fn every_category_has_at_least_three_keywords() {
        // The SEO block exposes the first three keywords of the category.
        for c in CATEGORIES {
            assert!(c.keywords.len() >= 3, "category {} too few keywords", c.id);
        }
    }
}
