//! Shared numeric and date helpers.

pub mod numeric_utils;
pub mod time_utils;
