//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which composes the stores, the
//! session, and the navigator, handles user input per screen, and renders
//! the interface. All store I/O happens synchronously inside the key
//! handlers; errors surface as a modal notice.

use std::path::Path;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::error::{Error, Result};
use crate::nav::{Navigator, Screen};
use crate::session::Session;
use crate::task::{format_due_relative, format_status, Task};
use crate::tasks::TaskStore;
use crate::tui::colors::{DARK_RED, INDIGO};
use crate::tui::form::{AuthForm, TaskForm};
use crate::tui::input::InputField;
use crate::tui::utils::centered_rect;
use crate::users::UserStore;

const WELCOME_ITEMS: &[&str] = &["Sign In", "Sign Up", "Quit"];
const MENU_ITEMS: &[&str] = &[
    "Create Task",
    "View Tasks",
    "Update Task",
    "Delete Task",
    "Log Out",
];

/// A modal message shown over the current screen until a key is pressed.
struct Notice {
    title: &'static str,
    body: String,
    error: bool,
    fatal: bool,
}

impl Notice {
    fn info(title: &'static str, body: impl Into<String>) -> Self {
        Notice {
            title,
            body: body.into(),
            error: false,
            fatal: false,
        }
    }

    fn from_error(err: &Error) -> Self {
        Notice {
            title: if err.is_fatal() { "Fatal Error" } else { "Error" },
            body: err.to_string(),
            error: true,
            fatal: err.is_fatal(),
        }
    }
}

/// TUI state: active screen, stores, session, forms, and list selection.
pub struct App {
    nav: Navigator,
    session: Session,
    users: UserStore,
    tasks: TaskStore,
    list_state: ListState,
    task_cache: Vec<Task>,
    auth_form: AuthForm,
    task_form: TaskForm,
    editing: Option<u64>,
    pending_delete: Option<u64>,
    notice: Option<Notice>,
    status_message: String,
    should_exit: bool,
}

impl App {
    /// Create a new App over the given data directory.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let users = UserStore::load(data_dir)?;
        let mut app = App {
            nav: Navigator::new(),
            session: Session::new(),
            users,
            tasks: TaskStore::new(data_dir),
            list_state: ListState::default(),
            task_cache: Vec::new(),
            auth_form: AuthForm::login(),
            task_form: TaskForm::new(),
            editing: None,
            pending_delete: None,
            notice: None,
            status_message: String::new(),
            should_exit: false,
        };
        app.list_state.select(Some(0));
        Ok(app)
    }

    /// Main event loop.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            self.handle_input()?;

            if self.should_exit {
                break;
            }
        }
        Ok(())
    }

    fn handle_input(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Dispatch one key press to the active screen's handler.
    fn handle_key(&mut self, key: KeyEvent) {
        // A visible notice swallows the next key press.
        if let Some(notice) = self.notice.take() {
            if notice.fatal {
                self.should_exit = true;
            }
            return;
        }
        self.status_message.clear();

        match self.nav.current() {
            Screen::Welcome => self.handle_welcome_key(key.code),
            Screen::Login => self.handle_login_key(key),
            Screen::SignUp => self.handle_sign_up_key(key),
            Screen::Menu => self.handle_menu_key(key.code),
            Screen::CreateTask => self.handle_create_task_key(key),
            Screen::ViewTasks => self.handle_view_tasks_key(key.code),
            Screen::UpdateTask => self.handle_update_task_key(key),
            Screen::DeleteTask => self.handle_delete_task_key(key.code),
        }
    }

    /// Switch screens through the navigator, resetting per-screen state and
    /// refreshing the task cache when the target asks for it.
    fn navigate(&mut self, to: Screen) {
        match self.nav.activate(to) {
            Ok(refresh) => {
                self.list_state.select(Some(0));
                self.editing = None;
                self.pending_delete = None;
                match to {
                    Screen::Login => self.auth_form = AuthForm::login(),
                    Screen::SignUp => self.auth_form = AuthForm::sign_up(),
                    Screen::CreateTask => self.task_form = TaskForm::new(),
                    _ => {}
                }
                if refresh {
                    self.refresh_tasks();
                }
            }
            Err(e) => self.report(e),
        }
    }

    /// Re-read the active user's list from the store.
    fn refresh_tasks(&mut self) {
        let loaded = self
            .session
            .current_user()
            .and_then(|user| self.tasks.load(user));
        match loaded {
            Ok(list) => {
                self.task_cache = list;
                if self.task_cache.is_empty() {
                    self.list_state.select(None);
                } else {
                    let selected = self.list_state.selected().unwrap_or(0);
                    self.list_state
                        .select(Some(selected.min(self.task_cache.len() - 1)));
                }
            }
            Err(e) => {
                self.task_cache.clear();
                self.list_state.select(None);
                self.report(e);
            }
        }
    }

    fn report(&mut self, err: Error) {
        self.notice = Some(Notice::from_error(&err));
    }

    fn select_prev(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            if selected > 0 {
                self.list_state.select(Some(selected - 1));
            }
        }
    }

    fn select_next(&mut self, len: usize) {
        if let Some(selected) = self.list_state.selected() {
            if selected + 1 < len {
                self.list_state.select(Some(selected + 1));
            }
        }
    }

    fn selected_task(&self) -> Option<&Task> {
        self.list_state
            .selected()
            .and_then(|i| self.task_cache.get(i))
    }

    // ---- per-screen input ----

    fn handle_welcome_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(WELCOME_ITEMS.len()),
            KeyCode::Enter => match self.list_state.selected() {
                Some(0) => self.navigate(Screen::Login),
                Some(1) => self.navigate(Screen::SignUp),
                Some(2) => self.should_exit = true,
                _ => {}
            },
            KeyCode::Esc | KeyCode::Char('q') => self.should_exit = true,
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('n') {
            self.navigate(Screen::SignUp);
            return;
        }
        match key.code {
            KeyCode::Esc => self.navigate(Screen::Welcome),
            KeyCode::Tab | KeyCode::Down => self.auth_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.auth_form.prev_field(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => self.auth_form.active_mut().handle_backspace(),
            KeyCode::Delete => self.auth_form.active_mut().handle_delete(),
            KeyCode::Left => self.auth_form.active_mut().move_cursor_left(),
            KeyCode::Right => self.auth_form.active_mut().move_cursor_right(),
            KeyCode::Char(c) => self.auth_form.active_mut().handle_char(c),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let username = self.auth_form.username.value.clone();
        let password = self.auth_form.password.value.clone();
        match self.users.authenticate(&username, &password) {
            Ok(()) => {
                self.session.log_in(&username);
                self.navigate(Screen::Menu);
            }
            Err(e) => self.report(e),
        }
    }

    fn handle_sign_up_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('l') {
            self.navigate(Screen::Login);
            return;
        }
        match key.code {
            KeyCode::Esc => self.navigate(Screen::Welcome),
            KeyCode::Tab | KeyCode::Down => self.auth_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.auth_form.prev_field(),
            KeyCode::Enter => self.submit_sign_up(),
            KeyCode::Backspace => self.auth_form.active_mut().handle_backspace(),
            KeyCode::Delete => self.auth_form.active_mut().handle_delete(),
            KeyCode::Left => self.auth_form.active_mut().move_cursor_left(),
            KeyCode::Right => self.auth_form.active_mut().move_cursor_right(),
            KeyCode::Char(c) => self.auth_form.active_mut().handle_char(c),
            _ => {}
        }
    }

    fn submit_sign_up(&mut self) {
        let username = self.auth_form.username.value.clone();
        let password = self.auth_form.password.value.clone();
        let confirm = self
            .auth_form
            .confirm
            .as_ref()
            .map(|f| f.value.clone())
            .unwrap_or_default();

        // Confirmation is checked before the store is touched.
        if password != confirm {
            self.report(Error::PasswordMismatch);
            return;
        }
        match self.users.register(&username, &password) {
            Ok(()) => {
                self.notice = Some(Notice::info(
                    "Success",
                    format!("Account '{username}' created. You can log in now."),
                ));
                self.navigate(Screen::Login);
            }
            Err(e) => self.report(e),
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(MENU_ITEMS.len()),
            KeyCode::Enter => match self.list_state.selected() {
                Some(0) => self.navigate(Screen::CreateTask),
                Some(1) => self.navigate(Screen::ViewTasks),
                Some(2) => self.navigate(Screen::UpdateTask),
                Some(3) => self.navigate(Screen::DeleteTask),
                Some(4) => self.log_out(),
                _ => {}
            },
            KeyCode::Esc | KeyCode::Char('q') => self.log_out(),
            _ => {}
        }
    }

    fn log_out(&mut self) {
        self.session.log_out();
        self.task_cache.clear();
        self.navigate(Screen::Welcome);
    }

    fn handle_create_task_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate(Screen::Menu),
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Enter => self.submit_create(),
            KeyCode::Backspace => self.task_form.active_mut().handle_backspace(),
            KeyCode::Delete => self.task_form.active_mut().handle_delete(),
            KeyCode::Left => self.task_form.active_mut().move_cursor_left(),
            KeyCode::Right => self.task_form.active_mut().move_cursor_right(),
            KeyCode::Char(c) => self.task_form.active_mut().handle_char(c),
            _ => {}
        }
    }

    fn submit_create(&mut self) {
        let draft = self.task_form.draft();
        let result = self
            .session
            .current_user()
            .and_then(|user| self.tasks.append(user, draft));
        match result {
            Ok(task) => {
                self.notice = Some(Notice::info(
                    "Success",
                    format!("Task '{}' created", task.title),
                ));
                self.navigate(Screen::Menu);
            }
            Err(e) => self.report(e),
        }
    }

    fn handle_view_tasks_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(self.task_cache.len()),
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.navigate(Screen::Menu),
            _ => {}
        }
    }

    fn handle_update_task_key(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.handle_edit_form_key(key);
            return;
        }
        match key.code {
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(self.task_cache.len()),
            KeyCode::Enter => {
                if let Some(task) = self.selected_task().cloned() {
                    self.editing = Some(task.id);
                    self.task_form = TaskForm::from_task(&task);
                } else {
                    self.status_message = Error::NoSelection.to_string();
                }
            }
            KeyCode::Esc => self.navigate(Screen::Menu),
            _ => {}
        }
    }

    fn handle_edit_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.editing = None,
            KeyCode::Tab | KeyCode::Down => self.task_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.task_form.prev_field(),
            KeyCode::Enter => self.submit_update(),
            KeyCode::Backspace => self.task_form.active_mut().handle_backspace(),
            KeyCode::Delete => self.task_form.active_mut().handle_delete(),
            KeyCode::Left => self.task_form.active_mut().move_cursor_left(),
            KeyCode::Right => self.task_form.active_mut().move_cursor_right(),
            KeyCode::Char(c) => self.task_form.active_mut().handle_char(c),
            _ => {}
        }
    }

    fn submit_update(&mut self) {
        let Some(id) = self.editing else { return };
        let draft = self.task_form.draft();
        let result = self
            .session
            .current_user()
            .and_then(|user| self.tasks.update(user, id, draft));
        self.editing = None;
        match result {
            Ok(task) => {
                self.status_message = format!("Task '{}' updated", task.title);
            }
            Err(e) => self.report(e),
        }
        self.refresh_tasks();
    }

    fn handle_delete_task_key(&mut self, key: KeyCode) {
        if let Some(id) = self.pending_delete {
            match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.pending_delete = None;
                    self.submit_delete(id);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.pending_delete = None;
                }
                _ => {}
            }
            return;
        }
        match key {
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(self.task_cache.len()),
            KeyCode::Enter => {
                let selected = self.selected_task().map(|t| t.id);
                if let Some(id) = selected {
                    self.pending_delete = Some(id);
                } else {
                    self.status_message = Error::NoSelection.to_string();
                }
            }
            KeyCode::Esc => self.navigate(Screen::Menu),
            _ => {}
        }
    }

    fn submit_delete(&mut self, id: u64) {
        let result = self
            .session
            .current_user()
            .and_then(|user| self.tasks.remove(user, id));
        match result {
            Ok(task) => {
                self.status_message = format!("Task '{}' deleted", task.title);
            }
            Err(e) => self.report(e),
        }
        self.refresh_tasks();
    }

    // ---- rendering ----

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.nav.current() {
            Screen::Welcome => self.render_welcome(f, chunks[0]),
            Screen::Login | Screen::SignUp => self.render_auth(f, chunks[0]),
            Screen::Menu => self.render_menu(f, chunks[0]),
            Screen::CreateTask => self.render_task_form(f, chunks[0]),
            Screen::ViewTasks => self.render_task_list(f, chunks[0]),
            Screen::UpdateTask => {
                if self.editing.is_some() {
                    self.render_task_form(f, chunks[0]);
                } else {
                    self.render_task_list(f, chunks[0]);
                }
            }
            Screen::DeleteTask => {
                self.render_task_list(f, chunks[0]);
                if self.pending_delete.is_some() {
                    self.render_delete_confirmation(f, chunks[0]);
                }
            }
        }

        self.render_status_bar(f, chunks[1]);

        if self.notice.is_some() {
            self.render_notice(f, f.area());
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, title: &str) {
        let header_text = vec![Line::from(vec![Span::styled(
            title.to_uppercase(),
            Style::default().fg(INDIGO).add_modifier(Modifier::BOLD),
        )])];

        let header = Paragraph::new(header_text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));

        f.render_widget(header, area);
    }

    fn render_welcome(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_header(f, chunks[0], "taskbook");

        let items: Vec<ListItem> = WELCOME_ITEMS
            .iter()
            .map(|item| ListItem::new(Line::from(format!("  {}", item))))
            .collect();

        let menu = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Let's Get Started"),
            )
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(menu, chunks[1], &mut self.list_state);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let user = self.session.current_user().unwrap_or("?").to_string();
        self.render_header(f, chunks[0], &format!("Menu ({user})"));

        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|item| ListItem::new(Line::from(format!("  {}", item))))
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(menu, chunks[1], &mut self.list_state);
    }

    fn render_auth(&mut self, f: &mut Frame, area: Rect) {
        let screen = self.nav.current();
        let area = centered_rect(60, 70, area);
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // username
                Constraint::Length(3), // password
                Constraint::Length(3), // confirm (sign up only)
                Constraint::Min(0),
            ])
            .split(area);

        self.render_header(f, chunks[0], screen.title());
        render_field(f, chunks[1], "Username", &self.auth_form.username);
        render_field(f, chunks[2], "Password", &self.auth_form.password);
        if let Some(confirm) = &self.auth_form.confirm {
            render_field(f, chunks[3], "Confirm Password", confirm);
        }
    }

    fn render_task_form(&mut self, f: &mut Frame, area: Rect) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // title
                Constraint::Length(3), // description
                Constraint::Length(3), // due date
                Constraint::Min(0),
            ])
            .split(area);

        let header = if self.editing.is_some() {
            "Edit Task"
        } else {
            "Create Task"
        };
        self.render_header(f, chunks[0], header);
        render_field(f, chunks[1], "Title", &self.task_form.title);
        render_field(f, chunks[2], "Description", &self.task_form.desc);
        render_field(f, chunks[3], "Due Date (YYYY-MM-DD)", &self.task_form.due);
    }

    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_header(f, chunks[0], self.nav.current().title());

        if self.task_cache.is_empty() {
            let empty = Paragraph::new("No tasks yet. Create one from the menu.")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(empty, chunks[1]);
            return;
        }

        let today = Local::now().date_naive();
        let items: Vec<ListItem> = self
            .task_cache
            .iter()
            .enumerate()
            .map(|(i, t)| {
                ListItem::new(Line::from(format!(
                    "  {}. {} - {} (due {})",
                    i + 1,
                    t.title,
                    format_status(t.status),
                    format_due_relative(&t.due, today),
                )))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Tasks"))
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol("► ");

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    fn render_delete_confirmation(&mut self, f: &mut Frame, area: Rect) {
        let area = centered_rect(70, 40, area);
        f.render_widget(Clear, area);

        let title = self
            .pending_delete
            .and_then(|id| self.task_cache.iter().find(|t| t.id == id))
            .map(|t| t.title.clone())
            .unwrap_or_default();

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Are you sure?",
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Red),
            )),
            Line::from(""),
            Line::from(format!("This will permanently delete task: {}", title)),
            Line::from(""),
            Line::from("Press Y to confirm deletion, N or Esc to cancel"),
        ];

        let confirmation = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Delete Task")
                    .border_style(Style::default().fg(DARK_RED)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(confirmation, area);
    }

    fn render_notice(&mut self, f: &mut Frame, area: Rect) {
        let Some(notice) = &self.notice else { return };
        let area = centered_rect(60, 30, area);
        f.render_widget(Clear, area);

        let border = if notice.error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(INDIGO)
        };

        let text = vec![
            Line::from(""),
            Line::from(notice.body.clone()),
            Line::from(""),
            Line::from("Press any key to continue"),
        ];

        let popup = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(notice.title)
                    .border_style(border),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(popup, area);
    }

    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.nav.current() {
                Screen::Welcome => "Use ↑↓ to navigate, Enter to select, q/Esc to quit".to_string(),
                Screen::Login => {
                    "Tab to switch fields, Enter to log in, Ctrl+N to sign up, Esc to go back"
                        .to_string()
                }
                Screen::SignUp => {
                    "Tab to switch fields, Enter to create account, Ctrl+L to log in, Esc to go back"
                        .to_string()
                }
                Screen::Menu => "Use ↑↓ to navigate, Enter to select, Esc to log out".to_string(),
                Screen::CreateTask => "Tab to switch fields, Enter to save, Esc to cancel".to_string(),
                Screen::ViewTasks => "Use ↑↓ to scroll, Esc to go back".to_string(),
                Screen::UpdateTask => {
                    if self.editing.is_some() {
                        "Tab to switch fields, Enter to save, Esc to cancel edit".to_string()
                    } else {
                        "Use ↑↓ to navigate, Enter to edit, Esc to go back".to_string()
                    }
                }
                Screen::DeleteTask => {
                    if self.pending_delete.is_some() {
                        "Press Y to confirm, N or Esc to cancel".to_string()
                    } else {
                        "Use ↑↓ to navigate, Enter to delete, Esc to go back".to_string()
                    }
                }
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(status, area);
    }
}

/// Render one labeled input field, highlighting the focused one and placing
/// the terminal cursor in it.
fn render_field(f: &mut Frame, area: Rect, label: &str, field: &InputField) {
    let border = if field.active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(field.display()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border),
    );
    f.render_widget(widget, area);

    if field.active {
        f.set_cursor_position((area.x + field.cursor_chars() as u16 + 1, area.y + 1));
    }
}
