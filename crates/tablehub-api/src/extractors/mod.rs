//! Custom Axum extractors and request field parsers.

pub mod fields;
pub mod json;

pub use fields::{parse_date_field, parse_time_slot_field, party_size_hint};
pub use json::ApiJson;
