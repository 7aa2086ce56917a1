//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::calculators::display_amount;
use super::models::{LineItem, RateConfiguration, RoomTotal, Totals};
use super::templates::{ItemTemplate, RoomType};

/// Amount with its whole-unit display value
#[derive(Debug, Clone, Serialize)]
pub struct AmountResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub display: Decimal,
}

impl From<Decimal> for AmountResponse {
    fn from(amount: Decimal) -> Self {
        Self {
            amount,
            display: display_amount(amount),
        }
    }
}

/// Response for single line-item pricing
#[derive(Debug, Serialize)]
pub struct LineItemPriceResponse {
    pub item_id: Uuid,
    #[serde(with = "rust_decimal::serde::str")]
    pub area: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub hardware_multiplier: Decimal,
    pub qty: u32,
    pub total: AmountResponse,
}

impl LineItemPriceResponse {
    pub fn new(item: &LineItem, rates: &RateConfiguration, total: Decimal) -> Self {
        Self {
            item_id: item.id,
            area: item.area(),
            base_rate: rates.base_rate(item),
            hardware_multiplier: rates.hardware_multiplier(&item.hardware),
            qty: item.qty,
            total: total.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemTotalResponse {
    pub id: Uuid,
    pub total: AmountResponse,
}

#[derive(Debug, Serialize)]
pub struct RoomTotalResponse {
    pub id: Uuid,
    pub total: AmountResponse,
    pub items: Vec<ItemTotalResponse>,
}

impl From<&RoomTotal> for RoomTotalResponse {
    fn from(room: &RoomTotal) -> Self {
        Self {
            id: room.id,
            total: room.total.into(),
            items: room
                .items
                .iter()
                .map(|i| ItemTotalResponse {
                    id: i.id,
                    total: i.total.into(),
                })
                .collect(),
        }
    }
}

/// Response for project totals
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    pub room_totals: Vec<RoomTotalResponse>,
    pub subtotal: AmountResponse,
    pub tax: AmountResponse,
    pub design_fee: AmountResponse,
    pub grand_total: AmountResponse,
}

impl From<&Totals> for TotalsResponse {
    fn from(totals: &Totals) -> Self {
        Self {
            room_totals: totals.room_totals.iter().map(RoomTotalResponse::from).collect(),
            subtotal: totals.subtotal.into(),
            tax: totals.tax.into(),
            design_fee: totals.design_fee.into(),
            grand_total: totals.grand_total.into(),
        }
    }
}

/// Response for rate card validation
#[derive(Debug, Serialize)]
pub struct RateValidationResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// One room type with its starter items
#[derive(Debug, Serialize)]
pub struct RoomTemplateResponse {
    pub room_type: RoomType,
    pub label: &'static str,
    pub items: Vec<ItemTemplate>,
}
