//! Sega console hash recipes.
//!
//! - Genesis / Mega Drive (the achievement database also routes Master
//!   System, Game Gear and SG-1000 extensions through this recipe)

pub mod genesis;

pub use genesis::GenesisHasher;
