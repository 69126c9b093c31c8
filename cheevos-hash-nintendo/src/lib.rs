//! Nintendo console hash recipes.
//!
//! - NES (Famicom), iNES format
//! - SNES (Super Famicom)

pub mod nes;
pub mod snes;

pub use nes::{NesHasher, NesHeader};
pub use snes::SnesHasher;
