//! Reusable UI components

mod design_card;

pub use design_card::DesignCard;
