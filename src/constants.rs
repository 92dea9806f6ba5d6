//! Application constants
//!
//! Centralized location for API paths, user-facing messages and configuration defaults.

/// Default base URL of the exercise tracker API
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file (written next to the working directory)
pub const DEFAULT_LOG_FILE: &str = "fitlog.log";

/// Default tracing level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Directory under $HOME holding config.yaml
pub const CONFIG_DIR: &str = ".fitlog";

/// Config file name
pub const CONFIG_FILE: &str = "config.yaml";

// API paths
pub const NEW_USER_PATH: &str = "/api/exercise/new-user";
pub const USERS_PATH: &str = "/api/exercise/users";
pub const ADD_EXERCISE_PATH: &str = "/api/exercise/add";

// User-facing messages
pub const USERNAME_TAKEN: &str = "Username is already taken!";
pub const EXERCISE_LOGGED: &str = "Exercise logged!";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong.";
pub const USERS_UNAVAILABLE: &str = "Could not load users.";

/// Application name
pub const APP_NAME: &str = "Fitlog TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
