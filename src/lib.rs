pub mod app;
pub mod config;
pub mod error;
pub mod geocode;
pub mod lookup;
pub mod station;
pub mod view;
