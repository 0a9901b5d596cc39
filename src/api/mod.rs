// Remote catalog document store
pub mod client;
pub mod regions;

pub use client::{get_json, set_silent};
pub use regions::load_regions_from_api;
