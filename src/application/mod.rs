//! Application layer: the form controller that keeps the displayed total,
//! submit state and per-line feedback consistent with current quantities,
//! and the frame loop that drives it.

pub mod controller;
pub mod replay;
