pub mod config;
pub mod fixup;
pub mod genesis;
pub mod keys;
pub mod params;
pub mod store;
pub mod validation;
