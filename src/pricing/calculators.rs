//! Core pricing calculation functions.
//!
//! Pure functions for quotation math - no database access and no rounding.
//! Rounding only happens when an amount is displayed.
//!
//! Arithmetic saturates at `Decimal::MAX` instead of overflowing, so pricing
//! never panics whatever the magnitudes in a hand-built project.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use super::models::{ItemTotal, LineItem, Project, RateConfiguration, RoomTotal, Totals};

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Round an amount for presentation, ties going to the even neighbour.
///
/// Quotations print whole currency units, so callers normally pass `places = 0`;
/// stored and returned totals are never passed through here.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use interior_quote::pricing::round_money;
///
/// assert_eq!(round_money(dec!(13860.5), 0), dec!(13860));
/// assert_eq!(round_money(dec!(7983.36), 0), dec!(7983));
/// assert_eq!(round_money(dec!(1608.755), 2), dec!(1608.76));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Whole-currency-unit amount for on-screen and printed quotations.
pub fn display_amount(amount: Decimal) -> Decimal {
    round_money(amount, 0)
}

/// Price a single line item against a rate card.
///
/// `(material + finish + labor) * area * hardware_multiplier * qty`, where labor
/// is folded into the base before the multiplier. Unknown material or finish
/// keys contribute 0 and an unknown hardware tier multiplies by 1. An item
/// with a non-positive area is free. Results too large for a `Decimal`
/// saturate at `Decimal::MAX`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use interior_quote::pricing::{price_line_item, LineItem, RateConfiguration};
///
/// let item = LineItem {
///     id: uuid::Uuid::new_v4(),
///     name: "Wardrobe".to_string(),
///     width: dec!(6),
///     height: dec!(7),
///     depth: None,
///     material: "BWR Plywood".to_string(),
///     finish: "Laminate (1mm)".to_string(),
///     hardware: "Standard".to_string(),
///     qty: 1,
/// };
/// assert_eq!(price_line_item(&item, &RateConfiguration::default()), dec!(13860));
/// ```
pub fn price_line_item(item: &LineItem, rates: &RateConfiguration) -> Decimal {
    let area = item.area();
    if area <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let unit_cost = rates
        .base_rate(item)
        .saturating_mul(area)
        .saturating_mul(rates.hardware_multiplier(&item.hardware));

    unit_cost.saturating_mul(Decimal::from(item.qty))
}

/// Calculate item, room and project totals.
///
/// Room totals are listed in room order and always sum to `subtotal`.
/// An empty project still carries the design fee in `grand_total`.
pub fn compute_totals(project: &Project) -> Totals {
    let rates = &project.rates;

    let room_totals: Vec<RoomTotal> = project
        .rooms
        .iter()
        .map(|room| {
            let items: Vec<ItemTotal> = room
                .items
                .iter()
                .map(|item| ItemTotal {
                    id: item.id,
                    total: price_line_item(item, rates),
                })
                .collect();
            let total = saturating_sum(items.iter().map(|i| i.total));

            RoomTotal {
                id: room.id,
                total,
                items,
            }
        })
        .collect();

    let subtotal = saturating_sum(room_totals.iter().map(|r| r.total));
    let tax = subtotal.saturating_mul(rates.tax_rate) / PERCENT;
    let design_fee = rates.design_fee_fixed;

    Totals {
        room_totals,
        subtotal,
        tax,
        design_fee,
        grand_total: subtotal.saturating_add(tax).saturating_add(design_fee),
    }
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}
