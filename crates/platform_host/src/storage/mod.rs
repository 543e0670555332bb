//! Storage contracts for lightweight desktop preferences.

pub mod prefs;
