//! Industry categories - a fixed closed set of labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry category for a business
///
/// Inferred at parse time from keyword matching over the description and
/// company name. The set is closed: every record carries exactly one of
/// these labels, with `ProfessionalServices` as the fallback when no
/// keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Industry {
    /// AI, software, automation
    #[serde(rename = "Technology")]
    Technology,

    /// Marketing, design, branding, content
    #[serde(rename = "Marketing & Design")]
    MarketingDesign,

    /// Health, fitness, therapy
    #[serde(rename = "Health & Wellness")]
    HealthWellness,

    /// Coaching, training, speaking
    #[serde(rename = "Coaching & Consulting")]
    CoachingConsulting,

    /// Property, commercial, appraisal
    #[serde(rename = "Real Estate")]
    RealEstate,

    /// Events, parties, gifts, crafts
    #[serde(rename = "Events & Gifts")]
    EventsGifts,

    /// Food, restaurants, catering
    #[serde(rename = "Food & Beverage")]
    FoodBeverage,

    /// Freight, dispatch, transport
    #[serde(rename = "Logistics")]
    Logistics,

    /// Cleaning, janitorial
    #[serde(rename = "Facilities Services")]
    FacilitiesServices,

    /// Art, murals, painting
    #[serde(rename = "Arts & Creative")]
    ArtsCreative,

    /// Catch-all for everything else
    #[serde(rename = "Professional Services")]
    ProfessionalServices,
}

impl Industry {
    /// All categories, in display order
    pub const ALL: [Industry; 11] = [
        Industry::Technology,
        Industry::MarketingDesign,
        Industry::HealthWellness,
        Industry::CoachingConsulting,
        Industry::RealEstate,
        Industry::EventsGifts,
        Industry::FoodBeverage,
        Industry::Logistics,
        Industry::FacilitiesServices,
        Industry::ArtsCreative,
        Industry::ProfessionalServices,
    ];

    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::MarketingDesign => "Marketing & Design",
            Industry::HealthWellness => "Health & Wellness",
            Industry::CoachingConsulting => "Coaching & Consulting",
            Industry::RealEstate => "Real Estate",
            Industry::EventsGifts => "Events & Gifts",
            Industry::FoodBeverage => "Food & Beverage",
            Industry::Logistics => "Logistics",
            Industry::FacilitiesServices => "Facilities Services",
            Industry::ArtsCreative => "Arts & Creative",
            Industry::ProfessionalServices => "Professional Services",
        }
    }

    /// Display color (hex) used by graph renderers
    pub fn color(&self) -> &'static str {
        match self {
            Industry::Technology => "#00D9FF",
            Industry::MarketingDesign => "#8B5CF6",
            Industry::HealthWellness => "#10B981",
            Industry::CoachingConsulting => "#F59E0B",
            Industry::RealEstate => "#EC4899",
            Industry::EventsGifts => "#F472B6",
            Industry::FoodBeverage => "#FBBF24",
            Industry::Logistics => "#6366F1",
            Industry::FacilitiesServices => "#14B8A6",
            Industry::ArtsCreative => "#A78BFA",
            Industry::ProfessionalServices => "#64748B",
        }
    }

    /// Parse a display label back into a category
    pub fn from_label(s: &str) -> Option<Self> {
        Industry::ALL.iter().copied().find(|i| i.label() == s)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
