//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod notice;
pub mod registration;

// Re-export commonly used models
pub use event::{CategoryFilter, Event, EventCategory, SortKey};
pub use notice::{Notice, NoticeKind};
pub use registration::Registration;
