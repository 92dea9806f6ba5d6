//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Field navigation
    NextField,
    PrevField,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Flows
    SubmitUser,
    ToggleUsers,
    SubmitExercise,

    // Popups
    DismissNotice,
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Which form a field belongs to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Form {
    NewUser,
    Exercise,
}

/// Focused input field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Username,
    UserId,
    Description,
    Duration,
    Date,
}

impl Field {
    pub fn next(&self) -> Field {
        match self {
            Field::Username => Field::UserId,
            Field::UserId => Field::Description,
            Field::Description => Field::Duration,
            Field::Duration => Field::Date,
            Field::Date => Field::Username,
        }
    }

    pub fn prev(&self) -> Field {
        match self {
            Field::Username => Field::Date,
            Field::UserId => Field::Username,
            Field::Description => Field::UserId,
            Field::Duration => Field::Description,
            Field::Date => Field::Duration,
        }
    }

    pub fn form(&self) -> Form {
        match self {
            Field::Username => Form::NewUser,
            _ => Form::Exercise,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::UserId => "User ID",
            Field::Description => "Description",
            Field::Duration => "Duration (min)",
            Field::Date => "Date",
        }
    }

    /// Whether `c` may be typed into this field
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Field::Duration => c.is_ascii_digit(),
            _ => !c.is_control(),
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_field: Field,
    input_mode: InputMode,
    show_help: bool,
    show_notice: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Popups swallow the key
    if show_notice {
        return Some(UiEvent::DismissNotice);
    }
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
            KeyCode::Char('c') => Some(UiEvent::SubmitUser),
            KeyCode::Char('l') => Some(UiEvent::SubmitExercise),
            KeyCode::Char('u') => Some(UiEvent::ToggleUsers),
            KeyCode::Up => Some(UiEvent::ScrollUp),
            KeyCode::Down => Some(UiEvent::ScrollDown),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Tab => Some(UiEvent::NextField),
            KeyCode::BackTab => Some(UiEvent::PrevField),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            KeyCode::Enter => match active_field.form() {
                Form::NewUser => Some(UiEvent::SubmitUser),
                Form::Exercise => Some(UiEvent::SubmitExercise),
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_submits_the_owning_form() {
        let ev = key_to_ui_event(press(KeyCode::Enter), Field::Username, InputMode::Editing, false, false);
        assert_eq!(ev, Some(UiEvent::SubmitUser));
        let ev = key_to_ui_event(press(KeyCode::Enter), Field::Date, InputMode::Editing, false, false);
        assert_eq!(ev, Some(UiEvent::SubmitExercise));
    }

    #[test]
    fn test_notice_swallows_keys() {
        let ev = key_to_ui_event(press(KeyCode::Char('q')), Field::Username, InputMode::Normal, true, true);
        assert_eq!(ev, Some(UiEvent::DismissNotice));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_ui_event(key, Field::Description, InputMode::Editing, false, true),
            Some(UiEvent::Quit)
        );
    }

    #[test]
    fn test_field_cycle_round_trips() {
        let mut field = Field::Username;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, Field::Username);
        assert_eq!(Field::Username.prev(), Field::Date);
    }

    #[test]
    fn test_duration_accepts_digits_only() {
        assert!(Field::Duration.accepts('7'));
        assert!(!Field::Duration.accepts('x'));
        assert!(Field::Description.accepts('x'));
    }
}
