mod core;

pub use core::ScoutEngine;
