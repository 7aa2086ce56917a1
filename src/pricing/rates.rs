//! Rate card defaults, validation and immutable edits.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::errors::PricingError;
use super::models::RateConfiguration;

const MAX_TAX_RATE: Decimal = dec!(100);
/// Ceiling for any per-sq-ft rate, including labor.
const MAX_RATE_SQ_FT: Decimal = dec!(1000000);
const MAX_HARDWARE_MULTIPLIER: Decimal = dec!(100);
const MAX_DESIGN_FEE: Decimal = dec!(1000000000);

impl Default for RateConfiguration {
    /// Built-in fallback rate card used when no settings have been saved.
    fn default() -> Self {
        let materials = BTreeMap::from([
            ("BWR Plywood".to_string(), dec!(120)),
            ("MR Plywood".to_string(), dec!(90)),
            ("HDHMR".to_string(), dec!(110)),
            ("MDF".to_string(), dec!(70)),
        ]);
        let finishes = BTreeMap::from([
            ("Laminate (1mm)".to_string(), dec!(60)),
            ("Acrylic".to_string(), dec!(180)),
            ("PU Paint".to_string(), dec!(250)),
            ("Veneer".to_string(), dec!(150)),
        ]);
        let hardware = BTreeMap::from([
            ("Standard".to_string(), dec!(1.0)),
            ("Premium (Hettich)".to_string(), dec!(1.5)),
            ("Luxury (Blum)".to_string(), dec!(2.2)),
        ]);

        Self {
            materials,
            finishes,
            hardware,
            labor_rate_sq_ft: dec!(150),
            tax_rate: dec!(18),
            design_fee_fixed: Decimal::ZERO,
        }
    }
}

impl RateConfiguration {
    /// Check every rate and multiplier, collecting all violations.
    ///
    /// Returns `PricingError::Configuration` listing each problem found.
    pub fn validate(&self) -> Result<(), PricingError> {
        let mut errors = Vec::new();

        check_table("material", &self.materials, MAX_RATE_SQ_FT, &mut errors);
        check_table("finish", &self.finishes, MAX_RATE_SQ_FT, &mut errors);
        check_table("hardware multiplier", &self.hardware, MAX_HARDWARE_MULTIPLIER, &mut errors);

        if self.labor_rate_sq_ft < Decimal::ZERO {
            errors.push(format!("labor rate must be non-negative, got {}", self.labor_rate_sq_ft));
        } else if self.labor_rate_sq_ft > MAX_RATE_SQ_FT {
            errors.push(format!(
                "labor rate must be at most {}, got {}",
                MAX_RATE_SQ_FT, self.labor_rate_sq_ft
            ));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > MAX_TAX_RATE {
            errors.push(format!("tax rate must be between 0 and 100, got {}", self.tax_rate));
        }
        if self.design_fee_fixed < Decimal::ZERO {
            errors.push(format!("design fee must be non-negative, got {}", self.design_fee_fixed));
        } else if self.design_fee_fixed > MAX_DESIGN_FEE {
            errors.push(format!(
                "design fee must be at most {}, got {}",
                MAX_DESIGN_FEE, self.design_fee_fixed
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PricingError::Configuration {
                message: format!("{} invalid rate(s)", errors.len()),
                errors,
            })
        }
    }

    pub fn with_material(&self, name: impl Into<String>, rate: Decimal) -> Self {
        let mut next = self.clone();
        next.materials.insert(name.into(), rate);
        next
    }

    pub fn without_material(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.materials.remove(name);
        next
    }

    pub fn with_finish(&self, name: impl Into<String>, rate: Decimal) -> Self {
        let mut next = self.clone();
        next.finishes.insert(name.into(), rate);
        next
    }

    pub fn without_finish(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.finishes.remove(name);
        next
    }

    pub fn with_hardware(&self, tier: impl Into<String>, multiplier: Decimal) -> Self {
        let mut next = self.clone();
        next.hardware.insert(tier.into(), multiplier);
        next
    }

    pub fn without_hardware(&self, tier: &str) -> Self {
        let mut next = self.clone();
        next.hardware.remove(tier);
        next
    }

    pub fn with_labor_rate(&self, rate: Decimal) -> Self {
        Self {
            labor_rate_sq_ft: rate,
            ..self.clone()
        }
    }

    pub fn with_tax_rate(&self, percent: Decimal) -> Self {
        Self {
            tax_rate: percent,
            ..self.clone()
        }
    }

    pub fn with_design_fee(&self, fee: Decimal) -> Self {
        Self {
            design_fee_fixed: fee,
            ..self.clone()
        }
    }
}

fn check_table(
    kind: &str,
    table: &BTreeMap<String, Decimal>,
    max: Decimal,
    errors: &mut Vec<String>,
) {
    for (key, value) in table {
        if key.trim().is_empty() {
            errors.push(format!("{} name cannot be blank", kind));
        }
        if *value < Decimal::ZERO {
            errors.push(format!("{} '{}' must be non-negative, got {}", kind, key, value));
        } else if *value > max {
            errors.push(format!("{} '{}' must be at most {}, got {}", kind, key, max, value));
        }
    }
}
