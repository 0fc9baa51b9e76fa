pub mod clock;
pub mod frame;
pub mod input;
pub mod runner;
pub mod settings;
pub mod sink;
