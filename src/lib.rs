//! Akriti Phone
//!
//! A simulated smartphone rendered as a terminal application, used as an
//! evidence prop in an interactive mystery experience. Players unlock the
//! phone with a PIN found elsewhere in the room and browse its fixed
//! contents (messages, photos, notes, calls, recordings) for clues.

pub mod app;
pub mod auth;
pub mod content;
pub mod ui;

pub use app::App;
