//! Small browser and formatting helpers.

pub mod fragment;
pub mod format;
