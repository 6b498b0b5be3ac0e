//! Screen modules for different views

pub mod conversation;
pub mod gallery;
pub mod home;
pub mod lock;
pub mod messages;
pub mod notes;
pub mod phone;
pub mod recorder;
