//! Treatment type catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of treatments the clinic performs.
///
/// Serialized as the display name (e.g. `"Root Canal"`) to stay compatible with
/// previously persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreatmentType {
    Cleaning,
    Filling,
    Crown,
    #[serde(rename = "Root Canal")]
    RootCanal,
    Extraction,
    Whitening,
    Implant,
    Bridge,
    #[serde(rename = "Braces Consultation")]
    BracesConsultation,
    #[serde(rename = "Emergency Treatment")]
    EmergencyTreatment,
}

impl TreatmentType {
    /// All treatment types, in catalog order.
    pub const ALL: [TreatmentType; 10] = [
        TreatmentType::Cleaning,
        TreatmentType::Filling,
        TreatmentType::Crown,
        TreatmentType::RootCanal,
        TreatmentType::Extraction,
        TreatmentType::Whitening,
        TreatmentType::Implant,
        TreatmentType::Bridge,
        TreatmentType::BracesConsultation,
        TreatmentType::EmergencyTreatment,
    ];

    /// Human-readable name, identical to the persisted form.
    pub fn name(&self) -> &'static str {
        match self {
            TreatmentType::Cleaning => "Cleaning",
            TreatmentType::Filling => "Filling",
            TreatmentType::Crown => "Crown",
            TreatmentType::RootCanal => "Root Canal",
            TreatmentType::Extraction => "Extraction",
            TreatmentType::Whitening => "Whitening",
            TreatmentType::Implant => "Implant",
            TreatmentType::Bridge => "Bridge",
            TreatmentType::BracesConsultation => "Braces Consultation",
            TreatmentType::EmergencyTreatment => "Emergency Treatment",
        }
    }

    /// Suggested fee used to pre-fill new treatments.
    pub fn average_fee(&self) -> f64 {
        match self {
            TreatmentType::Cleaning => 120.0,
            TreatmentType::Filling => 180.0,
            TreatmentType::Crown => 850.0,
            TreatmentType::RootCanal => 1200.0,
            TreatmentType::Extraction => 250.0,
            TreatmentType::Whitening => 300.0,
            TreatmentType::Implant => 2500.0,
            TreatmentType::Bridge => 1800.0,
            TreatmentType::BracesConsultation => 200.0,
            TreatmentType::EmergencyTreatment => 350.0,
        }
    }

    /// The full catalog as name/fee entries.
    pub fn catalog() -> Vec<CatalogEntry> {
        Self::ALL.iter().map(|t| CatalogEntry::from(*t)).collect()
    }
}

impl fmt::Display for TreatmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreatmentType {
    type Err = String;

    /// Parse a display name, ignoring case and surrounding whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown treatment type: '{}'", value))
    }
}

/// A single catalog row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub treatment_type: TreatmentType,
    pub name: String,
    pub average_fee: f64,
}

impl From<TreatmentType> for CatalogEntry {
    fn from(treatment_type: TreatmentType) -> Self {
        Self {
            treatment_type,
            name: treatment_type.name().to_string(),
            average_fee: treatment_type.average_fee(),
        }
    }
}
