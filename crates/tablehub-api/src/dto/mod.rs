//! Request and response DTOs. Field names are camelCase on the wire.

pub mod request;
pub mod response;

pub use request::{CheckAvailabilityRequest, CreateBookingRequest, SlotsRequest};
pub use response::{
    BlackoutDateResponse, BookingHoursResponse, CreateBookingResponse, HealthResponse,
    SettingsResponse, SlotListingResponse, SlotResponse,
};
