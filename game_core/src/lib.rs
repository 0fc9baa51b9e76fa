pub mod components;
pub mod config;
pub mod driver;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use state::*;
