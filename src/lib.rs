pub mod app;
pub mod cli;
pub mod core;
pub mod traits;
pub mod window;
