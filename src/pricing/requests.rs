//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::entry::LineItemDraft;
use super::models::{Client, Project, RateConfiguration, Room};

/// Request to price a single line item
#[derive(Debug, Deserialize)]
pub struct PriceLineItemRequest {
    pub item: LineItemDraft,
    /// Falls back to the built-in rate card
    #[serde(default)]
    pub rates: Option<RateConfiguration>,
}

/// Request to compute totals for a whole project
#[derive(Debug, Deserialize)]
pub struct ComputeTotalsRequest {
    #[serde(default)]
    pub client: Client,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub rates: Option<RateConfiguration>,
}

impl ComputeTotalsRequest {
    pub fn into_project(self, default_rates: &RateConfiguration) -> Project {
        Project {
            client: self.client,
            rooms: self.rooms,
            rates: self.rates.unwrap_or_else(|| default_rates.clone()),
        }
    }
}
