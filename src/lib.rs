//! Rumble Arena - AI core for a real-time 2D combat game

pub mod actions;
pub mod ai;
pub mod arena;
pub mod core;
