//! # Fitlog TUI
//!
//! A terminal client for the exercise tracker API.
//!
//! ## Features
//! - Create users (`POST /api/exercise/new-user`)
//! - Show / hide the user list (`GET /api/exercise/users`)
//! - Log exercises (`POST /api/exercise/add`)
//! - Activity log of settled requests
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (view model + per-flow request tracking)
//! - Network Layer (Tokio runtime, reqwest)

pub mod activity;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use models::{ExerciseInput, Flow, Notice, NoticeKind, User, UserInput};
pub use config::Config;
pub use error::ApiError;
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, UiState};
pub use network::{ApiClient, NetworkActor};
