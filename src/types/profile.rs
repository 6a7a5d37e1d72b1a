use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvalidProfileError {
    #[error("Organization profile is missing a company name")]
    MissingCompanyName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    FreightBroker,
    AssetCarrier,
    #[serde(rename = "3pl")]
    ThirdPartyLogistics,
    Shipper,
    Other,
}

/// Caller-supplied description of the bidding entity. Pure input value
/// object: the core never mutates it and carries no ambient defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub company_name: String,
    pub company_type: CompanyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mc_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub equipment_types: Vec<String>,
    #[serde(default)]
    pub service_areas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_in_business: Option<u32>,
}

impl OrganizationProfile {
    /// Contract check on the caller's input. Everything else in the core
    /// degrades gracefully; an unusable profile is the one hard failure.
    pub fn validate(&self) -> Result<(), InvalidProfileError> {
        if self.company_name.trim().is_empty() {
            return Err(InvalidProfileError::MissingCompanyName);
        }
        Ok(())
    }

    pub fn has_certification(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.certifications
            .iter()
            .any(|c| c.to_lowercase().contains(&needle))
    }
}

/// Optional overrides for the pricing defaults. Any field left `None`
/// falls back to the documented default in `pricing::defaults`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFinancials {
    pub driver_wage: Option<f64>,
    pub dispatcher_wage: Option<f64>,
    pub supervisor_wage: Option<f64>,
    pub fringe_benefit_rate: Option<f64>,
    pub fuel_price_per_gallon: Option<f64>,
    pub miles_per_gallon: Option<f64>,
    pub overhead_rate: Option<f64>,
    pub profit_margin_target: Option<f64>,
    pub maintenance_monthly: Option<f64>,
    pub backup_rental_monthly: Option<f64>,
}

/// Facts mined from a supporting company document by the satellite
/// pipeline in [`crate::profile_extract`]. All fields are best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedCompanyProfile {
    #[serde(default)]
    pub past_performance: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}
