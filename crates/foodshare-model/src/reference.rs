//! Reference data supplied by the backend: the allowed values of select inputs.

use serde::{Deserialize, Serialize};

/// Network id meaning "any other network"; URLs for it skip the host check.
pub const OTHER_NETWORK: &str = "otra";

/// Regions and their comunas as returned by the `regions-comunas` query.
///
/// `comunas[i]` lists the comunas of `regions[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionsAndComunas {
    pub regions: Vec<String>,
    pub comunas: Vec<Vec<String>>,
}

/// Every externally supplied set the validators check membership against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub regions: Vec<String>,
    pub comunas: Vec<Vec<String>>,
    pub food_types: Vec<String>,
    pub social_networks: Vec<String>,
}

impl ReferenceData {
    pub fn new(
        locations: RegionsAndComunas,
        food_types: Vec<String>,
        social_networks: Vec<String>,
    ) -> Self {
        Self {
            regions: locations.regions,
            comunas: locations.comunas,
            food_types,
            social_networks,
        }
    }

    pub fn is_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    /// Comunas of a region, `None` when the region is unknown.
    pub fn comunas_of(&self, region: &str) -> Option<&[String]> {
        let idx = self.regions.iter().position(|r| r == region)?;
        self.comunas.get(idx).map(Vec::as_slice)
    }

    pub fn is_food_type(&self, food_type: &str) -> bool {
        self.food_types.iter().any(|t| t == food_type)
    }

    pub fn is_social_network(&self, network: &str) -> bool {
        self.social_networks.iter().any(|n| n == network)
    }
}

/// Whether a network id stands for "any other network".
pub fn is_other_network(network: &str) -> bool {
    network == OTHER_NETWORK || network == "other"
}
