//! App state - pure data structure with no I/O logic

use crate::activity::ActivityLog;
use crate::app::view_model::{FlowState, UiState};
use crate::constants::DEFAULT_API_URL;
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::RenderState;
use crate::models::{ExerciseInput, Flow, Notice, UserInput};

/// Exercise form contents, kept as typed text until submission
#[derive(Clone, Debug, Default)]
pub struct ExerciseForm {
    pub user_id: String,
    pub description: String,
    pub duration: String,
    pub date: String,
}

impl ExerciseForm {
    /// Build the request body; an empty duration is sent as 0 and an empty date is left out
    pub fn to_input(&self) -> ExerciseInput {
        let date = self.date.trim();
        ExerciseInput {
            user_id: self.user_id.clone(),
            description: self.description.clone(),
            duration: self.duration.parse().unwrap_or(0),
            date: (!date.is_empty()).then(|| date.to_string()),
        }
    }
}

/// Per-flow request tracking
#[derive(Clone, Debug, Default)]
pub struct Flows {
    pub create_user: FlowState,
    pub list_users: FlowState,
    pub create_exercise: FlowState,
}

impl Flows {
    pub fn get(&self, flow: Flow) -> &FlowState {
        match flow {
            Flow::CreateUser => &self.create_user,
            Flow::ListUsers => &self.list_users,
            Flow::CreateExercise => &self.create_exercise,
        }
    }

    pub fn get_mut(&mut self, flow: Flow) -> &mut FlowState {
        match flow {
            Flow::CreateUser => &mut self.create_user,
            Flow::ListUsers => &mut self.list_users,
            Flow::CreateExercise => &mut self.create_exercise,
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub api_url: String,

    // Forms
    pub username: String,
    pub exercise: ExerciseForm,

    // Editing
    pub active_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // View model
    pub ui: UiState,
    pub users_scroll: u16,

    // Requests
    pub flows: Flows,
    /// User id sent with the outstanding exercise request
    pub submitted_exercise_user: Option<String>,
    pub next_request_id: u64,
    pub activity: ActivityLog,

    // Popups
    pub notice: Option<Notice>,
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        AppState {
            api_url: api_url.into(),
            username: String::new(),
            exercise: ExerciseForm::default(),
            active_field: Field::Username,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            ui: UiState::default(),
            users_scroll: 0,
            flows: Flows::default(),
            submitted_exercise_user: None,
            next_request_id: 1,
            activity: ActivityLog::new(),
            notice: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_field {
            Field::Username => &self.username,
            Field::UserId => &self.exercise.user_id,
            Field::Description => &self.exercise.description,
            Field::Duration => &self.exercise.duration,
            Field::Date => &self.exercise.date,
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_field {
            Field::Username => &mut self.username,
            Field::UserId => &mut self.exercise.user_id,
            Field::Description => &mut self.exercise.description,
            Field::Duration => &mut self.exercise.duration,
            Field::Date => &mut self.exercise.date,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            api_url: self.api_url.clone(),
            username: self.username.clone(),
            user_id: self.exercise.user_id.clone(),
            description: self.exercise.description.clone(),
            duration: self.exercise.duration.clone(),
            date: self.exercise.date.clone(),
            active_field: self.active_field,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            status_message: self.ui.status_message.clone(),
            users: self.ui.users.clone(),
            users_visible: self.ui.users_visible,
            users_scroll: self.users_scroll,
            creating_user: self.flows.create_user.is_pending(),
            loading_users: self.flows.list_users.is_pending(),
            creating_exercise: self.flows.create_exercise.is_pending(),
            activity: self.activity.iter().cloned().collect(),
            notice: self.notice.clone(),
            show_help: self.show_help,
        }
    }

    pub(crate) fn user_input(&self) -> UserInput {
        UserInput::new(self.username.clone())
    }
}
