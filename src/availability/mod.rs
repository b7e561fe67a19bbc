//! Availability for the rolling 90-day window.
//!
//! Booked ranges come from the channel manager's iCal feed, with a JSON API
//! and generated data as fallbacks. Free days are priced by the pricing module.

pub mod feed;
pub mod models;
pub mod resolver;
pub mod routes;
pub mod sources;

pub use models::{
    AvailabilityEntry, AvailabilityError, AvailabilitySource, AvailabilityWindow, DateRange,
    ResolvedAvailability, WINDOW_DAYS,
};
pub use resolver::AvailabilityResolver;
pub use routes::router;
pub use sources::CalendarSource;
