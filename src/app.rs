//! Application state and logic for the TUI.
//!
//! The [`App`] struct owns the screens, the catalog/detail loaders and the
//! user store handle; [`App::run`] is the event loop wiring keyboard input
//! and fetch completions into state mutations. All mutation happens on the
//! loop's task; background fetches only ever report back over channels.

use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::api::CatalogClient;
use crate::auth::{validate_login, validate_registration, User};
use crate::catalog::{CatalogDone, CatalogLoader, DetailDone, DetailLoader};
use crate::traits::{HttpClient, UserStore};
use crate::ui;

/// Fire `reached_bottom` when the selection is within this many rows of
/// the end of the accumulated list.
const LOAD_MORE_THRESHOLD: usize = 3;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Home,
    Detail,
    Profile,
}

/// One text field in a form.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    /// Render as bullets (passwords).
    pub masked: bool,
}

impl FormField {
    fn new(label: &'static str, masked: bool) -> Self {
        Self {
            label,
            value: String::new(),
            masked,
        }
    }
}

/// A focusable stack of text fields.
#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl Form {
    fn login() -> Self {
        Self {
            fields: vec![FormField::new("Email", false), FormField::new("Password", true)],
            focus: 0,
        }
    }

    fn register() -> Self {
        Self {
            fields: vec![
                FormField::new("Name", false),
                FormField::new("Email", false),
                FormField::new("Password", true),
            ],
            focus: 0,
        }
    }

    pub fn value(&self, index: usize) -> &str {
        &self.fields[index].value
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    fn insert(&mut self, c: char) {
        self.fields[self.focus].value.push(c);
    }

    fn backspace(&mut self) {
        self.fields[self.focus].value.pop();
    }

    fn clear_passwords(&mut self) {
        for field in &mut self.fields {
            if field.masked {
                field.value.clear();
            }
        }
    }
}

/// One resolved event loop iteration.
enum Pending {
    Input(Option<std::io::Result<Event>>),
    Catalog(CatalogDone),
    Detail(DetailDone),
}

/// The application.
pub struct App<C: HttpClient + 'static> {
    pub screen: Screen,
    pub catalog: CatalogLoader<C>,
    pub detail: DetailLoader<C>,
    store: Arc<dyn UserStore>,
    pub session: Option<User>,
    pub login_form: Form,
    pub register_form: Form,
    /// Selected row on the home list.
    pub selected: usize,
    /// One-line status/error message for the active screen.
    pub flash: Option<String>,
    pub should_quit: bool,
}

impl<C: HttpClient + 'static> App<C> {
    pub fn new(api: Arc<CatalogClient<C>>, store: Arc<dyn UserStore>, page_size: u32) -> Self {
        let session = match store.current_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "could not read session, starting logged out");
                None
            }
        };
        let screen = if session.is_some() {
            Screen::Home
        } else {
            Screen::Login
        };

        Self {
            screen,
            catalog: CatalogLoader::new(Arc::clone(&api), page_size),
            detail: DetailLoader::new(api),
            store,
            session,
            login_form: Form::login(),
            register_form: Form::register(),
            selected: 0,
            flash: None,
            should_quit: false,
        }
    }

    /// Run the event loop until quit.
    pub async fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let mut input = EventStream::new();

        if self.screen == Screen::Home {
            self.catalog.appear();
        }

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self))?;

            // Arms only move values out; mutation happens below, after the
            // borrowed futures are dropped.
            let pending = tokio::select! {
                event = input.next() => Pending::Input(event),
                Some(done) = self.catalog.recv_done() => Pending::Catalog(done),
                Some(done) = self.detail.recv_done() => Pending::Detail(done),
            };

            match pending {
                Pending::Input(Some(Ok(Event::Key(key)))) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key);
                }
                Pending::Input(Some(Ok(_))) => {}
                Pending::Input(Some(Err(e))) => return Err(e.into()),
                Pending::Input(None) => break,
                Pending::Catalog(done) => self.catalog.apply(done),
                Pending::Detail(done) => self.detail.apply(done),
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Register => self.handle_register_key(key),
            Screen::Home => self.handle_home_key(key),
            Screen::Detail => self.handle_detail_key(key),
            Screen::Profile => self.handle_profile_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.flash = None;
                self.screen = Screen::Register;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.login_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.login_form.focus_prev(),
            KeyCode::Backspace => self.login_form.backspace(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Char(c) => self.login_form.insert(c),
            _ => {}
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.flash = None;
                self.screen = Screen::Login;
            }
            KeyCode::Tab | KeyCode::Down => self.register_form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.register_form.focus_prev(),
            KeyCode::Backspace => self.register_form.backspace(),
            KeyCode::Enter => self.submit_register(),
            KeyCode::Char(c) => self.register_form.insert(c),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-10),
            KeyCode::PageDown => self.move_selection(10),
            KeyCode::Enter => self.open_selected_detail(),
            KeyCode::Char('p') => {
                self.flash = None;
                self.screen = Screen::Profile;
            }
            KeyCode::Char('r') => self.retry_catalog(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.screen = Screen::Home;
                // Idempotent: re-entering the list is a no-op once loaded.
                self.catalog.appear();
            }
            KeyCode::Char('r') => self.detail.appear(),
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.screen = Screen::Home;
                self.catalog.appear();
            }
            KeyCode::Char('l') => self.logout(),
            _ => {}
        }
    }

    fn submit_login(&mut self) {
        let email = self.login_form.value(0).trim().to_string();
        let password = self.login_form.value(1).to_string();
        if let Err(e) = validate_login(&email, &password) {
            self.flash = Some(e.to_string());
            return;
        }
        match self.store.login(&email, &password) {
            Ok(user) => {
                self.session = Some(user);
                self.login_form.clear_passwords();
                self.enter_home();
            }
            Err(e) => {
                self.login_form.clear_passwords();
                self.flash = Some(e.to_string());
            }
        }
    }

    fn submit_register(&mut self) {
        let name = self.register_form.value(0).trim().to_string();
        let email = self.register_form.value(1).trim().to_string();
        let password = self.register_form.value(2).to_string();
        if let Err(e) = validate_registration(&name, &email, &password) {
            self.flash = Some(e.to_string());
            return;
        }
        match self.store.register(&name, &email, &password) {
            Ok(user) => {
                self.session = Some(user);
                self.register_form.clear_passwords();
                self.enter_home();
            }
            Err(e) => {
                self.register_form.clear_passwords();
                self.flash = Some(e.to_string());
            }
        }
    }

    fn enter_home(&mut self) {
        tracing::info!("entering home screen");
        self.flash = None;
        self.screen = Screen::Home;
        self.catalog.appear();
    }

    fn logout(&mut self) {
        if let Err(e) = self.store.logout() {
            tracing::warn!(error = %e, "logout failed");
            self.flash = Some(e.to_string());
            return;
        }
        self.session = None;
        self.selected = 0;
        self.catalog.reset();
        self.flash = None;
        self.screen = Screen::Login;
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.catalog.state().items.len();
        if len == 0 {
            return;
        }
        let current = self.selected as i64;
        self.selected = (current + delta).clamp(0, len as i64 - 1) as usize;

        if delta > 0 && self.selected + LOAD_MORE_THRESHOLD >= len {
            self.catalog.reached_bottom();
        }
    }

    fn open_selected_detail(&mut self) {
        let Some(item) = self.catalog.state().items.get(self.selected) else {
            return;
        };
        self.detail.open(item.clone());
        self.detail.appear();
        self.screen = Screen::Detail;
    }

    fn retry_catalog(&mut self) {
        if self.catalog.state().items.is_empty() {
            self.catalog.appear();
        } else {
            self.catalog.reached_bottom();
        }
    }
}
