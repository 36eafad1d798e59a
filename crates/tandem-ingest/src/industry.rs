//! Keyword-based industry inference

use regex::Regex;
use std::sync::OnceLock;
use tandem_domain::Industry;

/// Ordered keyword table. First match wins, so the order is load-bearing:
/// a description matching both "consulting" and "coach" lands in
/// Technology if "tech" also matched earlier, etc. Keep in sync with the
/// category set in tandem-domain.
const KEYWORD_TABLE: [(&str, Industry); 10] = [
    (r"(?i)\b(ai|tech|software|automation|consulting)\b", Industry::Technology),
    (r"(?i)\b(marketing|design|brand|creative|content)\b", Industry::MarketingDesign),
    (r"(?i)\b(health|wellness|fitness|therapy|massage|mental)\b", Industry::HealthWellness),
    (r"(?i)\b(coach|training|speaking|consulting)\b", Industry::CoachingConsulting),
    (r"(?i)\b(real estate|property|commercial|appraisal)\b", Industry::RealEstate),
    (r"(?i)\b(event|party|gift|craft|creative)\b", Industry::EventsGifts),
    (r"(?i)\b(food|cookie|restaurant|catering)\b", Industry::FoodBeverage),
    (r"(?i)\b(freight|logistics|dispatch|transport)\b", Industry::Logistics),
    (r"(?i)\b(clean|janitorial)\b", Industry::FacilitiesServices),
    (r"(?i)\b(art|mural|paint|creative)\b", Industry::ArtsCreative),
];

fn compiled_table() -> &'static Vec<(Regex, Industry)> {
    static TABLE: OnceLock<Vec<(Regex, Industry)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        KEYWORD_TABLE
            .iter()
            .map(|(pattern, industry)| {
                // Patterns are compile-time constants; a failure here is a
                // programming error, not an input error.
                (Regex::new(pattern).expect("invalid keyword pattern"), *industry)
            })
            .collect()
    })
}

/// Infer the industry for a business from its description and name
///
/// Tests `description + " " + name` (lowercased) against the ordered
/// keyword table; the first matching entry wins and
/// [`Industry::ProfessionalServices`] is the fallback.
pub fn infer_industry(description: &str, company_name: &str) -> Industry {
    let combined = format!(
        "{} {}",
        description.to_lowercase(),
        company_name.to_lowercase()
    );

    for (pattern, industry) in compiled_table() {
        if pattern.is_match(&combined) {
            return *industry;
        }
    }

    Industry::ProfessionalServices
}
