//! Concrete games built on the engine.
//!
//! - `chronology`: the timeline placement game and its setup

pub mod chronology;
