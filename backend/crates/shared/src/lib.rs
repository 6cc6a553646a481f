//! Shared Kernel
//!
//! Vocabulary used by every crate of the places API:
//! - [`id`] - string-backed typed ids for states, cities, amenities, places, users
//! - [`error`] - [`error::app_error::AppError`] and its `{"error": ...}` rendering
//!
//! Nothing here knows about storage or search.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
