pub mod cache;
pub mod config;
pub mod frame;
pub mod input;
pub mod output;
pub mod ramp;
pub mod renderer;
pub mod ui;
