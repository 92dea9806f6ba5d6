//! Render state - data structure sent from App layer to UI for rendering

use crate::activity::ActivityEntry;
use crate::messages::ui_events::{Field, InputMode};
use crate::models::{Notice, User};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub api_url: String,

    // Forms
    pub username: String,
    pub user_id: String,
    pub description: String,
    pub duration: String,
    pub date: String,

    // Editing
    pub active_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // View model
    pub status_message: String,
    pub users: Vec<User>,
    pub users_visible: bool,
    pub users_scroll: u16,

    // Flow progress
    pub creating_user: bool,
    pub loading_users: bool,
    pub creating_exercise: bool,

    pub activity: Vec<ActivityEntry>,

    // Popups
    pub notice: Option<Notice>,
    pub show_help: bool,
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        self.creating_user || self.loading_users || self.creating_exercise
    }

    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::UserId => &self.user_id,
            Field::Description => &self.description,
            Field::Duration => &self.duration,
            Field::Date => &self.date,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        use crate::constants::DEFAULT_API_URL;
        RenderState {
            api_url: String::from(DEFAULT_API_URL),
            username: String::new(),
            user_id: String::new(),
            description: String::new(),
            duration: String::new(),
            date: String::new(),
            active_field: Field::Username,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status_message: String::new(),
            users: Vec::new(),
            users_visible: false,
            users_scroll: 0,
            creating_user: false,
            loading_users: false,
            creating_exercise: false,
            activity: Vec::new(),
            notice: None,
            show_help: false,
        }
    }
}
