//! SEO headline templating.
//!
//! Picks one template uniformly at random and substitutes the business name
//! and location for every `[BUSINESS]` / `[LOCATION]` placeholder. The
//! caller-supplied text goes in verbatim.

use crate::rng::RandomSource;

pub const BUSINESS_PLACEHOLDER: &str = "[BUSINESS]";
pub const LOCATION_PLACEHOLDER: &str = "[LOCATION]";

pub const TEMPLATES: &[&str] = &[
    "Why [BUSINESS] is [LOCATION]'s Best Choice in 2025",
    "Discover Why [BUSINESS] Leads [LOCATION]'s Market",
    "[BUSINESS]: [LOCATION]'s Premier Destination for Excellence",
    "Transform Your Experience with [BUSINESS] in [LOCATION]",
    "Why [BUSINESS] is [LOCATION]'s Hidden Gem You Need to Know",
    "[BUSINESS] - Setting New Standards in [LOCATION]",
    "Experience Excellence: [BUSINESS] in [LOCATION]",
    "Why [BUSINESS] is [LOCATION]'s Most Trusted Choice",
    "[BUSINESS]: Where [LOCATION] Meets Quality and Service",
    "Unlock the Best of [LOCATION] at [BUSINESS]",
    "[BUSINESS] - [LOCATION]'s Award-Winning Destination",
    "Why [LOCATION] Locals Choose [BUSINESS] Every Time",
    "[BUSINESS]: Redefining Excellence in [LOCATION]",
    "The Ultimate [LOCATION] Experience Awaits at [BUSINESS]",
    "[BUSINESS] - Your Gateway to [LOCATION]'s Finest",
    "Why [BUSINESS] is [LOCATION]'s Talk of the Town",
    "Experience [LOCATION]'s Best at [BUSINESS]",
    "[BUSINESS]: Where [LOCATION]'s Dreams Come True",
    "Discover [LOCATION]'s Crown Jewel: [BUSINESS]",
    "[BUSINESS] - Making [LOCATION] Proud Since Day One",
];

/// Fill a randomly chosen template with the given name and location.
pub fn generate_headline(name: &str, location: &str, rng: &mut dyn RandomSource) -> String {
    let template = TEMPLATES[rng.pick_index(TEMPLATES.len())];
    template
        .replace(BUSINESS_PLACEHOLDER, name)
        .replace(LOCATION_PLACEHOLDER, location)
}
