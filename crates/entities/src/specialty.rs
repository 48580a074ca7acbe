//! Specialty vocabulary for handyman profiles.

use serde::{Deserialize, Serialize};

/// A handyman specialty tag.
///
/// The vocabulary is closed: documents may only carry these ten values,
/// serialized with the labels the marketplace has always stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    /// Plumbing work.
    Plumbing,
    /// Electrical work.
    Electrical,
    /// Carpentry.
    Carpentry,
    /// Painting.
    Painting,
    /// Cleaning services.
    Cleaning,
    /// Gardening and yard work.
    Gardening,
    /// Heating, ventilation and air conditioning.
    #[serde(rename = "HVAC")]
    Hvac,
    /// Appliance repair.
    #[serde(rename = "Appliance Repair")]
    ApplianceRepair,
    /// Masonry.
    Masonry,
    /// Roofing.
    Roofing,
}

impl Specialty {
    /// All specialties, in display order.
    pub const ALL: [Specialty; 10] = [
        Specialty::Plumbing,
        Specialty::Electrical,
        Specialty::Carpentry,
        Specialty::Painting,
        Specialty::Cleaning,
        Specialty::Gardening,
        Specialty::Hvac,
        Specialty::ApplianceRepair,
        Specialty::Masonry,
        Specialty::Roofing,
    ];

    /// Returns the display label, identical to the stored form.
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::Plumbing => "Plumbing",
            Specialty::Electrical => "Electrical",
            Specialty::Carpentry => "Carpentry",
            Specialty::Painting => "Painting",
            Specialty::Cleaning => "Cleaning",
            Specialty::Gardening => "Gardening",
            Specialty::Hvac => "HVAC",
            Specialty::ApplianceRepair => "Appliance Repair",
            Specialty::Masonry => "Masonry",
            Specialty::Roofing => "Roofing",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_labels() {
        let json = serde_json::to_string(&Specialty::Hvac).unwrap();
        assert_eq!(json, "\"HVAC\"");

        let json = serde_json::to_string(&Specialty::ApplianceRepair).unwrap();
        assert_eq!(json, "\"Appliance Repair\"");

        let json = serde_json::to_string(&Specialty::Plumbing).unwrap();
        assert_eq!(json, "\"Plumbing\"");
    }

    #[test]
    fn test_round_trip_matches_label() {
        for specialty in Specialty::ALL {
            let json = serde_json::to_string(&specialty).unwrap();
            assert_eq!(json, format!("\"{}\"", specialty.label()));
            let back: Specialty = serde_json::from_str(&json).unwrap();
            assert_eq!(back, specialty);
        }
    }
}
