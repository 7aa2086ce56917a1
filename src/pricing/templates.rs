//! Room types and their starter line items.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::models::{LineItem, Room};

/// Room category, used for icons and to pick starter items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Kitchen,
    Bedroom,
    Living,
    Bathroom,
    Study,
    #[default]
    Other,
}

impl RoomType {
    pub const ALL: [RoomType; 6] = [
        RoomType::Kitchen,
        RoomType::Bedroom,
        RoomType::Living,
        RoomType::Bathroom,
        RoomType::Study,
        RoomType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Kitchen => "Kitchen",
            RoomType::Bedroom => "Bedroom",
            RoomType::Living => "Living Room",
            RoomType::Bathroom => "Bathroom",
            RoomType::Study => "Study",
            RoomType::Other => "Other",
        }
    }

    /// Starter items offered when a room of this type is created
    pub fn item_templates(&self) -> Vec<ItemTemplate> {
        match self {
            RoomType::Kitchen => vec![
                ItemTemplate::new("Base Cabinets", dec!(10), dec!(2.75), dec!(2)),
                ItemTemplate::new("Wall Cabinets", dec!(10), dec!(2.5), dec!(1.17)),
                ItemTemplate::new("Tall Unit", dec!(2), dec!(7), dec!(2)),
            ],
            RoomType::Bedroom => vec![
                ItemTemplate::new("Wardrobe", dec!(6), dec!(7), dec!(2)),
                ItemTemplate::new("Loft", dec!(6), dec!(2), dec!(2)),
                ItemTemplate::new("Bed Back Panel", dec!(6), dec!(4), dec!(0.25)),
            ],
            RoomType::Living => vec![
                ItemTemplate::new("TV Unit", dec!(8), dec!(2), dec!(1.5)),
                ItemTemplate::new("Shoe Rack", dec!(3), dec!(3.5), dec!(1.17)),
            ],
            RoomType::Bathroom => vec![ItemTemplate::new("Vanity", dec!(3), dec!(2.5), dec!(1.5))],
            RoomType::Study => vec![
                ItemTemplate::new("Study Table", dec!(4), dec!(2.5), dec!(2)),
                ItemTemplate::new("Book Shelf", dec!(3), dec!(6), dec!(1)),
            ],
            RoomType::Other => Vec::new(),
        }
    }
}

/// Default dimensions for a starter item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub name: String,
    pub width: Decimal,
    pub height: Decimal,
    pub depth: Decimal,
}

impl ItemTemplate {
    fn new(name: &str, width: Decimal, height: Decimal, depth: Decimal) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            depth,
        }
    }

    /// Build a line item from this template with the given catalog selections.
    pub fn instantiate(&self, material: &str, finish: &str, hardware: &str) -> LineItem {
        LineItem {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            depth: Some(self.depth),
            material: material.to_string(),
            finish: finish.to_string(),
            hardware: hardware.to_string(),
            qty: 1,
        }
    }
}

/// Catalog selections applied to every starter item of a templated room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSelection {
    pub material: String,
    pub finish: String,
    pub hardware: String,
}

impl Default for TemplateSelection {
    fn default() -> Self {
        Self {
            material: "BWR Plywood".to_string(),
            finish: "Laminate (1mm)".to_string(),
            hardware: "Standard".to_string(),
        }
    }
}

impl Room {
    /// New room pre-populated with the starter items for its type.
    pub fn from_template(name: impl Into<String>, room_type: RoomType, selection: &TemplateSelection) -> Self {
        let mut room = Room::new(name, room_type);
        room.items = room_type
            .item_templates()
            .iter()
            .map(|t| t.instantiate(&selection.material, &selection.finish, &selection.hardware))
            .collect();
        room
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedroom_template_has_wardrobe() {
        let room = Room::from_template("Master Bedroom", RoomType::Bedroom, &TemplateSelection::default());

        assert_eq!(room.room_type, RoomType::Bedroom);
        assert_eq!(room.items.len(), 3);
        let wardrobe = &room.items[0];
        assert_eq!(wardrobe.name, "Wardrobe");
        assert_eq!(wardrobe.area(), dec!(42));
        assert_eq!(wardrobe.material, "BWR Plywood");
        assert_eq!(wardrobe.qty, 1);
    }

    #[test]
    fn test_template_items_get_fresh_ids() {
        let selection = TemplateSelection::default();
        let a = Room::from_template("Kitchen", RoomType::Kitchen, &selection);
        let b = Room::from_template("Kitchen", RoomType::Kitchen, &selection);

        assert_ne!(a.id, b.id);
        assert_ne!(a.items[0].id, b.items[0].id);
    }

    #[test]
    fn test_other_room_starts_empty() {
        let room = Room::from_template("Balcony", RoomType::Other, &TemplateSelection::default());
        assert!(room.items.is_empty());
    }

    #[test]
    fn test_room_type_serde_snake_case() {
        let json = serde_json::to_string(&RoomType::Living).unwrap();
        assert_eq!(json, "\"living\"");
        let parsed: RoomType = serde_json::from_str("\"bathroom\"").unwrap();
        assert_eq!(parsed, RoomType::Bathroom);
        assert_eq!(RoomType::ALL.len(), 6);
    }
}
