//! View model - the UI-visible state and how each API result reconciles into it
//!
//! Every `apply_*` method takes exactly one of the success or failure branches.
//! None of them touch the network; the App layer feeds them settled results.

use crate::constants::{EXERCISE_LOGGED, SOMETHING_WENT_WRONG, USERNAME_TAKEN, USERS_UNAVAILABLE};
use crate::error::ApiError;
use crate::models::{Notice, User};

/// How a flow settled, for the activity log
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Conflict,
    Failure,
}

impl Outcome {
    pub fn of<T>(result: &Result<T, ApiError>) -> Outcome {
        match result {
            Ok(_) => Outcome::Success,
            Err(ApiError::Conflict) => Outcome::Conflict,
            Err(_) => Outcome::Failure,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "ok",
            Outcome::Conflict => "conflict",
            Outcome::Failure => "failed",
        }
    }
}

/// State of a single request/response flow: `Idle -> Pending -> Idle`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    Pending {
        request_id: u64,
    },
}

impl FlowState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FlowState::Pending { .. })
    }

    /// Enter Pending; refused while a request is already outstanding
    pub fn begin(&mut self, request_id: u64) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = FlowState::Pending { request_id };
        true
    }

    /// Leave Pending if `request_id` is the outstanding request
    pub fn settle(&mut self, request_id: u64) -> bool {
        match *self {
            FlowState::Pending { request_id: pending } if pending == request_id => {
                *self = FlowState::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Status line, cached user list and its visibility
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub status_message: String,
    pub users: Vec<User>,
    pub users_visible: bool,
}

impl UiState {
    /// Flip visibility; returns true when the list must be fetched (hidden -> shown)
    pub fn toggle_users(&mut self) -> bool {
        self.users_visible = !self.users_visible;
        self.users_visible
    }

    pub fn apply_user_created(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                self.status_message =
                    format!("User Created! username:{} id: {}", user.username, user.id);
                self.users.push(user);
            }
            Err(_) => {
                self.status_message = String::from(USERNAME_TAKEN);
            }
        }
    }

    /// Replace the list wholesale on success.
    ///
    /// On failure the cached list is kept and the panel hidden again, so the
    /// next toggle retries. The returned notice should be shown to the user.
    pub fn apply_users_listed(&mut self, result: Result<Vec<User>, ApiError>) -> Option<Notice> {
        match result {
            Ok(users) => {
                self.users = users;
                None
            }
            Err(_) => {
                self.users_visible = false;
                Some(Notice::failure(USERS_UNAVAILABLE))
            }
        }
    }

    /// Exercise creation never changes `UiState`; it only produces a notice
    pub fn exercise_notice(result: &Result<(), ApiError>) -> Notice {
        match result {
            Ok(()) => Notice::success(EXERCISE_LOGGED),
            Err(_) => Notice::failure(SOMETHING_WENT_WRONG),
        }
    }
}
