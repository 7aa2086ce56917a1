//! Quotation data model.
//!
//! The rate card, the room/item tree and the derived totals. Totals are never
//! stored on a [`Project`]; they are recomputed from it on demand.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::PricingError;
use super::templates::RoomType;

/// Rate card used to price line items.
///
/// Values are treated as immutable: edits go through the `with_*` builders in
/// [`super::rates`], which return a new configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateConfiguration {
    /// Material name -> base rate per sq ft
    #[serde(default)]
    pub materials: BTreeMap<String, Decimal>,
    /// Finish name -> add-on rate per sq ft
    #[serde(default)]
    pub finishes: BTreeMap<String, Decimal>,
    /// Hardware tier -> multiplier applied to the combined base rate
    #[serde(default)]
    pub hardware: BTreeMap<String, Decimal>,
    pub labor_rate_sq_ft: Decimal,
    /// Percentage, 0-100
    pub tax_rate: Decimal,
    pub design_fee_fixed: Decimal,
}

impl RateConfiguration {
    /// Base rate for a material, 0 when the key is unknown.
    pub fn material_rate(&self, key: &str) -> Decimal {
        self.materials.get(key).copied().unwrap_or(Decimal::ZERO)
    }

    /// Add-on rate for a finish, 0 when the key is unknown.
    pub fn finish_rate(&self, key: &str) -> Decimal {
        self.finishes.get(key).copied().unwrap_or(Decimal::ZERO)
    }

    /// Multiplier for a hardware tier, 1 when the key is unknown.
    pub fn hardware_multiplier(&self, key: &str) -> Decimal {
        self.hardware.get(key).copied().unwrap_or(Decimal::ONE)
    }

    /// Material + finish + labor per sq ft, before the hardware multiplier.
    pub fn base_rate(&self, item: &LineItem) -> Decimal {
        self.material_rate(&item.material)
            .saturating_add(self.finish_rate(&item.finish))
            .saturating_add(self.labor_rate_sq_ft)
    }
}

fn default_qty() -> u32 {
    1
}

/// A single priced piece of joinery or work inside a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    /// Feet
    pub width: Decimal,
    /// Feet
    pub height: Decimal,
    /// Descriptive only, never priced
    #[serde(default)]
    pub depth: Option<Decimal>,
    pub material: String,
    pub finish: String,
    pub hardware: String,
    #[serde(default = "default_qty")]
    pub qty: u32,
}

impl LineItem {
    /// Face area in square feet.
    pub fn area(&self) -> Decimal {
        self.width.saturating_mul(self.height)
    }
}

/// A room and its line items, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub room_type: RoomType,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Room {
    pub fn new(name: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            room_type,
            items: Vec::new(),
        }
    }
}

/// Client details captured on the quotation header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub property_type: String,
    /// Square feet
    #[serde(default)]
    pub carpet_area: Option<Decimal>,
}

/// A quotation being composed: client header, rooms and the rate card in effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub client: Client,
    #[serde(default)]
    pub rooms: Vec<Room>,
    pub rates: RateConfiguration,
}

impl Project {
    /// Start an empty quotation priced with `rates`.
    pub fn new(rates: RateConfiguration) -> Self {
        Self {
            client: Client::default(),
            rooms: Vec::new(),
            rates,
        }
    }

    pub fn add_room(&mut self, room: Room) -> Uuid {
        let id = room.id;
        self.rooms.push(room);
        id
    }

    pub fn remove_room(&mut self, room_id: Uuid) -> Result<Room, PricingError> {
        let index = self
            .rooms
            .iter()
            .position(|r| r.id == room_id)
            .ok_or(PricingError::UnknownRoom(room_id))?;
        Ok(self.rooms.remove(index))
    }

    pub fn rename_room(&mut self, room_id: Uuid, name: impl Into<String>) -> Result<(), PricingError> {
        self.room_mut(room_id)?.name = name.into();
        Ok(())
    }

    pub fn add_item(&mut self, room_id: Uuid, item: LineItem) -> Result<Uuid, PricingError> {
        let id = item.id;
        self.room_mut(room_id)?.items.push(item);
        Ok(id)
    }

    /// Replace an existing item in place, keeping its position in the room.
    pub fn update_item(&mut self, room_id: Uuid, item: LineItem) -> Result<(), PricingError> {
        let item_id = item.id;
        let slot = self
            .room_mut(room_id)?
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(PricingError::UnknownItem(item_id))?;
        *slot = item;
        Ok(())
    }

    pub fn remove_item(&mut self, room_id: Uuid, item_id: Uuid) -> Result<LineItem, PricingError> {
        let room = self.room_mut(room_id)?;
        let index = room
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(PricingError::UnknownItem(item_id))?;
        Ok(room.items.remove(index))
    }

    /// Swap in a new rate card, returning the previous one.
    pub fn replace_rates(&mut self, rates: RateConfiguration) -> RateConfiguration {
        std::mem::replace(&mut self.rates, rates)
    }

    /// Check every line item against the data-entry rules.
    ///
    /// The first failure is reported with its position, e.g.
    /// `rooms[0].items[2].qty`.
    pub fn validate_items(&self) -> Result<(), PricingError> {
        for (room_index, room) in self.rooms.iter().enumerate() {
            for (item_index, item) in room.items.iter().enumerate() {
                item.validate().map_err(|e| {
                    e.within(&format!("rooms[{}].items[{}]", room_index, item_index))
                })?;
            }
        }
        Ok(())
    }

    pub fn item_count(&self) -> usize {
        self.rooms.iter().map(|r| r.items.len()).sum()
    }

    fn room_mut(&mut self, room_id: Uuid) -> Result<&mut Room, PricingError> {
        self.rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .ok_or(PricingError::UnknownRoom(room_id))
    }
}

/// Priced line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTotal {
    pub id: Uuid,
    pub total: Decimal,
}

/// Priced room with its per-item breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTotal {
    pub id: Uuid,
    pub total: Decimal,
    pub items: Vec<ItemTotal>,
}

/// Derived totals for a project. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub room_totals: Vec<RoomTotal>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub design_fee: Decimal,
    pub grand_total: Decimal,
}

impl Totals {
    pub fn room_total(&self, room_id: Uuid) -> Option<Decimal> {
        self.room_totals
            .iter()
            .find(|r| r.id == room_id)
            .map(|r| r.total)
    }
}
