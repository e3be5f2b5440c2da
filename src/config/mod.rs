//! Configuration module for crudgen

pub mod defaults;
mod settings;

pub use settings::GenConfig;
