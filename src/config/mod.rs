//! Configuration loading
//!
//! Settings come from defaults, an optional TOML file and the process
//! environment, in increasing order of precedence.

pub mod loader;
pub mod settings;

pub use loader::load_settings;
pub use settings::Settings;
