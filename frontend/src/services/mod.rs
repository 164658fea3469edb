//! Backend services.
//!
//! This module provides everything that talks to the Smart Note backend:
//!
//! # Services
//!
//! - [`transport`] - `fetch` wrapper with the configured timeout
//! - [`health`] - liveness probe and API description
//! - [`audio`] - audio file upload
//! - [`youtube`] - YouTube URL submission
//! - [`process`] - decoding of processing results

pub mod transport;
pub mod health;
pub mod process;
pub mod audio;
pub mod youtube;

pub use transport::*;
pub use health::*;
pub use process::*;
pub use audio::*;
pub use youtube::*;
