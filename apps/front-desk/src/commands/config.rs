//! # Config Commands
//!
//! Read-only access to the desk configuration and the discount tiers in use.

use albergo_core::discount::DiscountTier;
use tracing::debug;

use crate::state::{ConfigState, HotelState};

/// Gets the current desk configuration.
///
/// ## When Used
/// - Desk startup (hotel name in the header)
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Discount tiers the hotel accepts, in registration order.
pub fn list_discounts(hotel: &HotelState) -> Vec<DiscountTier> {
    debug!("list_discounts command");
    hotel.with_hotel(|h| h.discounts().tiers().to_vec())
}
