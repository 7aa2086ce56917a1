//! Line-item data entry.
//!
//! Form fields arrive as raw strings. Numeric fields are parsed and checked
//! here so that the calculators only ever see valid numbers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use uuid::Uuid;

use super::errors::PricingError;
use super::models::LineItem;

/// Raw line-item fields as typed into the item editor
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItemDraft {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub width: String,
    pub height: String,
    #[serde(default)]
    pub depth: Option<String>,
    pub material: String,
    pub finish: String,
    pub hardware: String,
    #[serde(default)]
    pub qty: Option<String>,
}

/// Largest width, height or depth accepted, in feet.
pub const MAX_DIMENSION_FT: Decimal = dec!(1000);

/// Largest quantity accepted for a single line item.
pub const MAX_QTY: u32 = 10_000;

impl LineItemDraft {
    /// Validate the draft and build a [`LineItem`].
    ///
    /// Catalog keys are not checked against any rate card; unknown keys are
    /// priced with the engine's defaults.
    pub fn into_line_item(self) -> Result<LineItem, PricingError> {
        let width = parse_dimension("width", &self.width)?;
        let height = parse_dimension("height", &self.height)?;
        let depth = match self.depth.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_dimension("depth", raw)?),
        };
        let qty = match self.qty.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some(raw) => parse_qty(raw)?,
        };

        let item = LineItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.trim().to_string(),
            width,
            height,
            depth,
            material: self.material.trim().to_string(),
            finish: self.finish.trim().to_string(),
            hardware: self.hardware.trim().to_string(),
            qty,
        };
        item.validate()?;
        Ok(item)
    }
}

impl LineItem {
    /// Check the data-entry rules on an already typed item.
    ///
    /// Items posted as JSON skip [`LineItemDraft`], so handlers run this
    /// before pricing or saving them.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.name.trim().is_empty() {
            return Err(PricingError::invalid_input("name", self.name.as_str()));
        }
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        if let Some(depth) = self.depth {
            check_dimension("depth", depth)?;
        }
        if self.qty == 0 || self.qty > MAX_QTY {
            return Err(PricingError::invalid_input("qty", self.qty.to_string()));
        }
        Ok(())
    }
}

fn check_dimension(field: &str, value: Decimal) -> Result<(), PricingError> {
    if value < Decimal::ZERO || value > MAX_DIMENSION_FT {
        return Err(PricingError::invalid_input(field, value.to_string()));
    }
    Ok(())
}

fn parse_dimension(field: &str, raw: &str) -> Result<Decimal, PricingError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| PricingError::invalid_input(field, raw))
}

fn parse_qty(raw: &str) -> Result<u32, PricingError> {
    raw.parse::<u32>()
        .map_err(|_| PricingError::invalid_input("qty", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> LineItemDraft {
        LineItemDraft {
            id: None,
            name: "Wardrobe".to_string(),
            width: "6".to_string(),
            height: "7".to_string(),
            depth: Some("2".to_string()),
            material: "BWR Plywood".to_string(),
            finish: "Laminate (1mm)".to_string(),
            hardware: "Standard".to_string(),
            qty: None,
        }
    }

    #[test]
    fn test_valid_draft() {
        let item = draft().into_line_item().unwrap();
        assert_eq!(item.width, dec!(6));
        assert_eq!(item.height, dec!(7));
        assert_eq!(item.depth, Some(dec!(2)));
        assert_eq!(item.qty, 1);
    }

    #[test]
    fn test_trims_and_parses_fractional_input() {
        let mut d = draft();
        d.width = " 6.5 ".to_string();
        d.qty = Some(" 3".to_string());
        d.depth = Some("".to_string());

        let item = d.into_line_item().unwrap();
        assert_eq!(item.width, dec!(6.5));
        assert_eq!(item.qty, 3);
        assert_eq!(item.depth, None);
    }

    #[test]
    fn test_rejects_non_numeric_dimension() {
        let mut d = draft();
        d.height = "seven".to_string();
        assert_eq!(
            d.into_line_item(),
            Err(PricingError::invalid_input("height", "seven"))
        );
    }

    #[test]
    fn test_rejects_negative_dimension() {
        let mut d = draft();
        d.width = "-6".to_string();
        assert!(matches!(
            d.into_line_item(),
            Err(PricingError::InvalidInput { field, .. }) if field == "width"
        ));
    }

    #[test]
    fn test_rejects_zero_or_fractional_qty() {
        for bad in ["0", "1.5", "-2", "two"] {
            let mut d = draft();
            d.qty = Some(bad.to_string());
            assert_eq!(d.into_line_item(), Err(PricingError::invalid_input("qty", bad)));
        }
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert!(d.into_line_item().is_err());
    }

    #[test]
    fn test_zero_width_is_accepted_and_keeps_id() {
        let id = Uuid::new_v4();
        let mut d = draft();
        d.id = Some(id);
        d.width = "0".to_string();

        let item = d.into_line_item().unwrap();
        assert_eq!(item.id, id);
        assert_eq!(item.area(), dec!(0));
    }

    #[test]
    fn test_rejects_out_of_range_dimension_and_qty() {
        let mut d = draft();
        d.width = "99999999999999999999".to_string();
        assert!(matches!(
            d.into_line_item(),
            Err(PricingError::InvalidInput { field, .. }) if field == "width"
        ));

        let mut d = draft();
        d.height = "1000".to_string();
        d.qty = Some(MAX_QTY.to_string());
        assert!(d.into_line_item().is_ok());

        let mut d = draft();
        d.qty = Some((MAX_QTY + 1).to_string());
        assert!(d.into_line_item().is_err());
    }

    #[test]
    fn test_validate_typed_item() {
        let mut item = draft().into_line_item().unwrap();
        assert!(item.validate().is_ok());

        item.qty = 0;
        assert_eq!(item.validate(), Err(PricingError::invalid_input("qty", "0")));

        item.qty = 1;
        item.depth = Some(dec!(-1));
        assert!(matches!(
            item.validate(),
            Err(PricingError::InvalidInput { field, .. }) if field == "depth"
        ));

        item.depth = None;
        item.name = String::new();
        assert!(item.validate().is_err());
    }
}
