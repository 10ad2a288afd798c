//! Domain model for the order form: menu entries with fixed unit prices,
//! clamped quantities, the total animation, scripted form events and the
//! surface port the controller drives.

pub mod animation;
pub mod event;
pub mod menu;
pub mod order;
pub mod ports;
pub mod quantity;
