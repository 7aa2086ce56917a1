//! Pricing engine module for interior quotations.
//!
//! Turns a rate card and a room/item tree into item, room and project totals.
//! The calculators are pure; everything else here feeds them validated data.

pub mod calculators;
pub mod entry;
pub mod errors;
pub mod models;
pub mod rates;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod templates;

// Re-export commonly used items
pub use calculators::{compute_totals, display_amount, price_line_item, round_money};
pub use entry::LineItemDraft;
pub use errors::PricingError;
pub use models::{Client, ItemTotal, LineItem, Project, RateConfiguration, Room, RoomTotal, Totals};
pub use routes::router;
pub use templates::{ItemTemplate, RoomType, TemplateSelection};
