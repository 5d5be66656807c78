//! Battle Odds - exact outcome distributions for turn-based tactical combat
//!
//! Computes the full discrete probability distribution of hit-point outcomes
//! for attack exchanges between two units, given terrain, officers, powers,
//! and tower counts. Everything is enumerated exactly; nothing is sampled.

pub mod combat;
pub mod core;
pub mod data;
pub mod dist;
pub mod report;
