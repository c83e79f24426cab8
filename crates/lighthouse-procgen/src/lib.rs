//! Floor layout generation for Lighthouse.
//!
//! Produces a plain-data [`FloorLayout`] per floor index: four rooms around a
//! cross-shaped corridor, the central stairs, furniture, potions and the enemy
//! roster. The simulation crate spawns the layout into its world.

pub mod generator;
pub mod layout;
pub mod tiers;

pub use generator::generate_floor;
pub use layout::FloorLayout;
