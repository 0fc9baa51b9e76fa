pub mod collision;
pub mod movement;
pub mod scoring;
pub mod victory;

pub use collision::*;
pub use movement::*;
pub use scoring::*;
pub use victory::*;
