//! Fitlog TUI - Actor-based client for the exercise tracker API
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - view model reconciling API results
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use fitlog_tui::constants::{APP_NAME, APP_VERSION};
use fitlog_tui::messages::ui_events::{key_to_ui_event, Field, InputMode};
use fitlog_tui::ui::{centered_rect, notice_color, outcome_color, render_field};
use fitlog_tui::{
    ApiClient, AppActor, AppState, Config, NetworkActor, NetworkCommand, NetworkResponse,
    RenderState, UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    // Initialize logging to file; the terminal belongs to the UI
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let log_name = config
        .log_file
        .file_name()
        .context("log_file must name a file")?;
    let file_appender = tracing_appender::rolling::never(log_dir, log_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    let level = config.tracing_level();
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(*level.as_ref().unwrap_or(&tracing::Level::INFO))
        .init();
    if let Err(e) = &level {
        tracing::warn!(error = %e, "Falling back to info logging");
    }

    tracing::info!(api_url = %config.api_url, version = APP_VERSION, "Starting");
    let client = ApiClient::new(&config).context("building HTTP client")?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(AppState::new(config.api_url.clone()), net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_field,
                    current_state.input_mode,
                    current_state.show_help,
                    current_state.notice.is_some(),
                ) {
                    let quit = event == UiEvent::Quit;
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, main_chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[1]);

    draw_forms(f, state, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    draw_users(f, state, right[0]);
    draw_activity(f, state, right[1]);

    draw_status_bar(f, state, main_chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }

    if state.notice.is_some() {
        draw_notice_popup(f, state, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::styled(format!(" {} ", state.api_url), Style::default().fg(Color::Gray)),
        Span::styled(
            if state.is_loading() { " [...]" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_forms(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Status message
            Constraint::Length(1), // Spacer / exercise title
            Constraint::Length(3), // User ID
            Constraint::Length(3), // Description
            Constraint::Length(3), // Duration
            Constraint::Length(3), // Date
            Constraint::Min(0),
        ])
        .split(area);

    let user_title = if state.creating_user { " New User [...] " } else { " New User (c:create) " };
    draw_field(f, state, Field::Username, user_title.to_string(), "username", chunks[0]);

    let status = Paragraph::new(state.status_message.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .wrap(Wrap { trim: true });
    f.render_widget(status, chunks[1]);

    let exercise_title = if state.creating_exercise {
        " Log Exercise [...] "
    } else {
        " Log Exercise (l:log) "
    };
    f.render_widget(
        Paragraph::new(Span::styled(exercise_title, Style::default().fg(Color::Magenta).bold())),
        chunks[2],
    );

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let date_placeholder = format!("defaults to today ({})", today);

    draw_field(f, state, Field::UserId, format!(" {} ", Field::UserId.label()), "id from the users list", chunks[3]);
    draw_field(f, state, Field::Description, format!(" {} ", Field::Description.label()), "what you did", chunks[4]);
    draw_field(f, state, Field::Duration, format!(" {} ", Field::Duration.label()), "0", chunks[5]);
    draw_field(f, state, Field::Date, format!(" {} ", Field::Date.label()), &date_placeholder, chunks[6]);
}

fn draw_field(f: &mut Frame, state: &RenderState, field: Field, title: String, placeholder: &str, area: Rect) {
    let is_focused = state.active_field == field;
    let is_editing = is_focused && state.input_mode == InputMode::Editing;
    let widget = render_field(state.field_value(field), placeholder, title, is_focused, is_editing);
    f.render_widget(widget, area);

    if is_editing {
        let value = state.field_value(field);
        let column = value[..state.cursor_position.min(value.len())].chars().count() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + column + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_users(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = if state.loading_users {
        format!(" Users ({}) [...] ", state.users.len())
    } else {
        format!(" Users ({}) (u:toggle) ", state.users.len())
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if !state.users_visible {
        let hint = Paragraph::new(Span::styled("Hidden. Press 'u' to load users.", Style::default().fg(Color::DarkGray)))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state
        .users
        .iter()
        .skip(state.users_scroll as usize)
        .map(|user| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>6} ", user.id), Style::default().fg(Color::Cyan)),
                Span::raw(user.username.clone()),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

fn draw_activity(f: &mut Frame, state: &RenderState, area: Rect) {
    let lines: Vec<Line> = state
        .activity
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(entry.timestamp.format("%H:%M:%S ").to_string(), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<16}", entry.flow.as_str()), Style::default().bold()),
                Span::styled(format!("{:<9}", entry.outcome.as_str()), Style::default().fg(outcome_color(entry.outcome))),
                Span::raw(format!("{} ({}ms)", entry.detail, entry.time_ms)),
            ])
        })
        .collect();

    let activity = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Activity "))
        .wrap(Wrap { trim: false });
    f.render_widget(activity, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.input_mode == InputMode::Editing {
        " ESC:stop editing | Enter:submit | arrows:move | Tab:next field "
    } else {
        " Tab:field | e:edit | c:create user | l:log exercise | u:users | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 FITLOG TUI - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch fields
   ↑ / ↓              Scroll users

 FORMS
   e / Enter          Edit current field
   Enter (editing)    Submit the field's form
   c                  Create user
   l                  Log exercise

 USERS
   u                  Show / hide user list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn draw_notice_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let Some(notice) = &state.notice else {
        return;
    };
    let popup_area = centered_rect(40, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(notice_color(notice.kind)))
        .title(" Notice (any key to close) ")
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(notice.message.as_str())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(text, popup_area);
}
