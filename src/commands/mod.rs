pub mod galaxy;
pub mod provider;
pub mod settings;
