//! UI Components for the Smart Note application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Title bar with environment and API status
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`AudioUpload`] - Audio file upload
//! - [`YoutubeForm`] - YouTube link submission
//! - [`SummaryView`] - Summary returned by the backend
//! - [`LogsPanel`] - Processing logs

mod header;
mod hero;
mod upload;
mod youtube;
mod summary;
mod footer;
mod logs;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use youtube::*;
pub use summary::*;
pub use footer::*;
pub use logs::*;
