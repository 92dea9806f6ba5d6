//! Command handlers - business logic for processing UI events and API results

use crate::app::view_model::{Outcome, UiState};
use crate::app::AppState;
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Flow;

/// Longest duration the form accepts, in digits (keeps the value inside u32)
const MAX_DURATION_DIGITS: usize = 9;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
        self.cursor_position = self.current_input().len();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
        self.cursor_position = self.current_input().len();
    }

    pub fn scroll_up(&mut self) {
        self.users_scroll = self.users_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = u16::try_from(self.ui.users.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.users_scroll = self.users_scroll.saturating_add(1).min(max);
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let field = self.active_field;
        if !field.accepts(c) {
            return;
        }
        if field == Field::Duration && self.current_input().len() >= MAX_DURATION_DIGITS {
            return;
        }

        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Flows
    // ========================

    /// Start the create-user flow; `None` while one is already pending
    pub fn create_user(&mut self) -> Option<NetworkCommand> {
        let id = self.begin_flow(Flow::CreateUser)?;
        Some(NetworkCommand::CreateUser {
            id,
            input: self.user_input(),
        })
    }

    /// Flip the users panel; only the hidden -> shown transition fetches
    pub fn toggle_users(&mut self) -> Option<NetworkCommand> {
        if !self.ui.toggle_users() {
            return None;
        }
        self.users_scroll = 0;
        let id = self.begin_flow(Flow::ListUsers)?;
        Some(NetworkCommand::ListUsers { id })
    }

    /// Start the create-exercise flow; `None` while one is already pending
    pub fn create_exercise(&mut self) -> Option<NetworkCommand> {
        let id = self.begin_flow(Flow::CreateExercise)?;
        let input = self.exercise.to_input();
        self.submitted_exercise_user = Some(input.user_id.clone());
        Some(NetworkCommand::CreateExercise { id, input })
    }

    fn begin_flow(&mut self, flow: Flow) -> Option<u64> {
        if self.flows.get(flow).is_pending() {
            tracing::info!(flow = flow.as_str(), "Ignoring request while one is pending");
            return None;
        }
        let id = self.next_id();
        self.flows.get_mut(flow).begin(id);
        Some(id)
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        let id = response.id();
        let flow = response.flow();
        let time_ms = response.time_ms();

        if !self.flows.get_mut(flow).settle(id) {
            tracing::warn!(id, flow = flow.as_str(), "Dropping response for a request that is not pending");
            return;
        }

        match response {
            NetworkResponse::UserCreated { result, .. } => {
                let outcome = Outcome::of(&result);
                let detail = match &result {
                    Ok(user) => format!("{} (id {})", user.username, user.id),
                    Err(e) => e.to_string(),
                };
                self.ui.apply_user_created(result);
                self.activity.record(flow, outcome, detail, time_ms);
            }
            NetworkResponse::UsersListed { result, .. } => {
                let outcome = Outcome::of(&result);
                let detail = match &result {
                    Ok(users) => format!("{} users", users.len()),
                    Err(e) => e.to_string(),
                };
                if let Some(notice) = self.ui.apply_users_listed(result) {
                    self.notice = Some(notice);
                }
                self.activity.record(flow, outcome, detail, time_ms);
            }
            NetworkResponse::ExerciseCreated { result, .. } => {
                let outcome = Outcome::of(&result);
                let user_id = self.submitted_exercise_user.take().unwrap_or_default();
                let detail = match &result {
                    Ok(()) => format!("user {}", user_id),
                    Err(e) => e.to_string(),
                };
                self.notice = Some(UiState::exercise_notice(&result));
                self.activity.record(flow, outcome, detail, time_ms);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{NoticeKind, User};

    fn typed(state: &mut AppState, field: Field, text: &str) {
        state.active_field = field;
        state.start_editing();
        for c in text.chars() {
            state.enter_char(c);
        }
        state.stop_editing();
    }

    #[test]
    fn test_create_user_scenario() {
        let mut state = AppState::default();
        typed(&mut state, Field::Username, "alice");

        let cmd = state.create_user().unwrap();
        let NetworkCommand::CreateUser { id, input } = cmd else {
            panic!("expected CreateUser");
        };
        assert_eq!(input.username, "alice");
        assert!(state.to_render_state().creating_user);

        state.handle_response(NetworkResponse::UserCreated {
            id,
            result: Ok(User::new("1", "alice")),
            time_ms: 3,
        });
        assert_eq!(state.ui.status_message, "User Created! username:alice id: 1");
        assert_eq!(state.ui.users, vec![User::new("1", "alice")]);
        assert!(!state.flows.create_user.is_pending());
        assert_eq!(state.activity.len(), 1);
    }

    #[test]
    fn test_create_user_conflict_scenario() {
        let mut state = AppState::default();
        state.ui.users = vec![User::new("1", "alice")];
        typed(&mut state, Field::Username, "bob");

        let id = state.create_user().and_then(|c| c.id()).unwrap();
        state.handle_response(NetworkResponse::UserCreated {
            id,
            result: Err(ApiError::Conflict),
            time_ms: 1,
        });
        assert_eq!(state.ui.status_message, "Username is already taken!");
        assert_eq!(state.ui.users.len(), 1);
        assert_eq!(state.activity.get(0).map(|e| e.outcome), Some(Outcome::Conflict));
    }

    #[test]
    fn test_pending_flow_ignores_second_invocation() {
        let mut state = AppState::default();
        assert!(state.create_user().is_some());
        assert!(state.create_user().is_none());
        assert!(state.create_exercise().is_some());
        assert!(state.create_exercise().is_none());
    }

    #[test]
    fn test_toggle_fetches_only_when_showing() {
        let mut state = AppState::default();

        let cmd = state.toggle_users();
        assert!(matches!(cmd, Some(NetworkCommand::ListUsers { .. })));
        let id = cmd.and_then(|c| c.id()).unwrap();

        state.handle_response(NetworkResponse::UsersListed {
            id,
            result: Ok(vec![User::new("2", "bob")]),
            time_ms: 2,
        });
        assert!(state.toggle_users().is_none());
        assert!(!state.ui.users_visible);
        assert_eq!(state.ui.users, vec![User::new("2", "bob")]);
    }

    #[test]
    fn test_toggle_while_fetch_pending_does_not_refetch() {
        let mut state = AppState::default();
        assert!(state.toggle_users().is_some());
        assert!(state.toggle_users().is_none());
        assert!(state.toggle_users().is_none());
        assert!(state.ui.users_visible);
    }

    #[test]
    fn test_list_failure_keeps_users() {
        let mut state = AppState::default();
        state.ui.users = vec![User::new("1", "alice")];
        let id = state.toggle_users().and_then(|c| c.id()).unwrap();

        state.handle_response(NetworkResponse::UsersListed {
            id,
            result: Err(ApiError::Status(500)),
            time_ms: 2,
        });
        assert_eq!(state.ui.users, vec![User::new("1", "alice")]);
        assert!(!state.ui.users_visible);
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Failure));

        // Next toggle retries
        assert!(state.toggle_users().is_some());
    }

    #[test]
    fn test_exercise_success_leaves_ui_state_alone() {
        let mut state = AppState::default();
        state.ui.users = vec![User::new("1", "alice")];
        state.ui.users_visible = true;
        let before = state.ui.clone();

        typed(&mut state, Field::UserId, "1");
        typed(&mut state, Field::Description, "rowing");
        typed(&mut state, Field::Duration, "4x5");

        let cmd = state.create_exercise().unwrap();
        let NetworkCommand::CreateExercise { id, input } = cmd else {
            panic!("expected CreateExercise");
        };
        assert_eq!(input.duration, 45);
        assert_eq!(input.date, None);

        state.handle_response(NetworkResponse::ExerciseCreated {
            id,
            result: Ok(()),
            time_ms: 1,
        });
        assert_eq!(state.ui, before);
        assert_eq!(state.notice.as_ref().map(|n| n.message.as_str()), Some("Exercise logged!"));

        state.dismiss_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_exercise_failure_notice() {
        let mut state = AppState::default();
        let id = state.create_exercise().and_then(|c| c.id()).unwrap();
        state.handle_response(NetworkResponse::ExerciseCreated {
            id,
            result: Err(ApiError::Status(400)),
            time_ms: 1,
        });
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some("Something went wrong.")
        );
    }

    #[test]
    fn test_exercise_activity_names_submitted_user() {
        let mut state = AppState::default();
        typed(&mut state, Field::UserId, "7");
        let id = state.create_exercise().and_then(|c| c.id()).unwrap();

        // Field edited while the request is in flight
        typed(&mut state, Field::UserId, "3");
        state.handle_response(NetworkResponse::ExerciseCreated {
            id,
            result: Ok(()),
            time_ms: 1,
        });
        assert_eq!(state.activity.get(0).map(|e| e.detail.as_str()), Some("user 7"));
        assert!(state.submitted_exercise_user.is_none());
    }

    #[test]
    fn test_scroll_saturates_with_huge_user_list() {
        let mut state = AppState::default();
        state.ui.users = (0..70_000).map(|i| User::new(i.to_string(), "u")).collect();
        state.users_scroll = u16::MAX - 1;
        state.scroll_down();
        assert_eq!(state.users_scroll, u16::MAX);
        state.scroll_down();
        assert_eq!(state.users_scroll, u16::MAX);

        state.ui.users.truncate(3);
        state.users_scroll = 0;
        for _ in 0..5 {
            state.scroll_down();
        }
        assert_eq!(state.users_scroll, 2);
    }

    #[test]
    fn test_unknown_response_is_dropped() {
        let mut state = AppState::default();
        state.handle_response(NetworkResponse::UserCreated {
            id: 99,
            result: Ok(User::new("1", "ghost")),
            time_ms: 1,
        });
        assert!(state.ui.users.is_empty());
        assert!(state.ui.status_message.is_empty());
        assert!(state.activity.is_empty());
    }

    #[test]
    fn test_editing_is_utf8_aware() {
        let mut state = AppState::default();
        typed(&mut state, Field::Username, "zoë");
        state.start_editing();
        state.delete_char();
        assert_eq!(state.username, "zo");
        state.move_cursor_left();
        state.enter_char('é');
        assert_eq!(state.username, "zéo");
    }

    #[test]
    fn test_date_is_sent_when_given() {
        let mut state = AppState::default();
        typed(&mut state, Field::Date, "2024-03-01");
        let input = state.exercise.to_input();
        assert_eq!(input.date.as_deref(), Some("2024-03-01"));
        assert_eq!(input.duration, 0);
    }
}
