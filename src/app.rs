//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: all state
//! changes flow through `App::update`, and rendering is a function of the
//! current state. The view-model (rows, page count, clamped page) is
//! recomputed from the dataset whenever sort or pagination state changes.

use tracing::{debug, info, trace};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::config::Config;
use crate::events::{Event, KeyContext};
use crate::model::{
    compute_view, next_page_size, prev_page_size, toggle_sort, Pagination, Record, SortSpec,
    ViewModel,
};
use crate::tasks::ApiMessage;
use crate::ui::{
    render_context_help, HelpView, LoadingIndicator, NotificationManager, TableContext, TableView,
    Theme,
};

/// The current view/screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Initial fetch in flight.
    #[default]
    Loading,
    /// Displaying the launch table.
    Table,
    /// Help screen is displayed.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current view state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// The full dataset, as fetched. Never mutated by the view-model.
    records: Vec<Record>,
    /// The active sort directive.
    sort: Option<SortSpec>,
    /// Page size and requested page.
    pagination: Pagination,
    /// The derived view the renderer consumes.
    view: ViewModel,
    /// Cursor/selection/scroll state of the table presentation.
    table_view: TableView,
    /// Toast messages.
    notifications: NotificationManager,
    /// Spinner for the initial fetch.
    loading: LoadingIndicator,
    /// Application configuration.
    config: Config,
    /// Color theme.
    theme: Theme,
    /// Set when the user asked for a refresh; the main loop consumes it
    /// and spawns the fetch task.
    pending_refresh: bool,
}

impl App {
    /// Create a new application instance with the given configuration.
    pub fn new(config: Config) -> Self {
        debug!("Creating application instance");

        let pagination = Pagination::new(config.default_page_size);
        let view = compute_view(&[], None, &pagination);

        let mut loading = LoadingIndicator::with_message("Fetching launches...");
        loading.start();

        Self {
            state: AppState::Loading,
            should_quit: false,
            records: Vec::new(),
            sort: None,
            pagination,
            view,
            table_view: TableView::new(),
            notifications: NotificationManager::new(),
            loading,
            config,
            theme: Theme::default(),
            pending_refresh: false,
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// The derived view currently rendered.
    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// The active sort directive.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// The pagination state.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Get a reference to the notification manager.
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the pending-refresh flag. The main loop calls this each
    /// iteration and spawns a fetch task when it returns true.
    pub fn take_pending_refresh(&mut self) -> bool {
        std::mem::take(&mut self.pending_refresh)
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
                self.state = AppState::Exiting;
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
                // Redraw happens on the next frame; column planning adapts
                // to the new width by itself.
            }
            Event::Tick => {
                self.loading.tick();
                self.notifications.tick();
            }
        }
    }

    /// Handle a result coming back from a background task.
    pub fn handle_api_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::LaunchesFetched { result, is_refresh } => match result {
                Ok(records) => {
                    info!(count = records.len(), is_refresh, "Dataset updated");
                    self.records = records;
                    self.recompute();
                    self.loading.stop();
                    if self.state == AppState::Loading {
                        self.state = AppState::Table;
                    }
                    self.notifications
                        .success(format!("Loaded {} launches", self.records.len()));
                }
                Err(message) => {
                    // The dataset keeps its previous contents (empty on the
                    // initial fetch) and the table simply shows zero rows.
                    debug!(error = %message, is_refresh, "Fetch failed");
                    self.loading.stop();
                    if self.state == AppState::Loading {
                        self.state = AppState::Table;
                    }
                    self.notifications.error(message);
                }
            },
        }
    }

    /// Recompute the view-model after a state change. The requested page
    /// stays in `pagination` as-is; only the derived view carries the
    /// clamped page, so shrinking and re-growing the page count can return
    /// to the originally requested page.
    fn recompute(&mut self) {
        self.view = compute_view(&self.records, self.sort.as_ref(), &self.pagination);
        self.table_view.clamp_selection(self.view.rows.len());
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match self.state {
            AppState::Loading => self.handle_loading_keys(key_event),
            AppState::Table => self.handle_table_keys(key_event),
            AppState::Help => self.handle_help_keys(key_event),
            AppState::Exiting => {}
        }
    }

    fn handle_loading_keys(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('q') {
            self.should_quit = true;
            self.state = AppState::Exiting;
        }
    }

    fn handle_help_keys(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('?') => self.state = AppState::Table,
            KeyCode::Char('q') => {
                self.should_quit = true;
                self.state = AppState::Exiting;
            }
            _ => {}
        }
    }

    fn handle_table_keys(&mut self, key_event: KeyEvent) {
        let vim = self.config.vim_mode;

        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                self.state = AppState::Exiting;
            }
            KeyCode::Char('?') => self.state = AppState::Help,
            KeyCode::Char('r') => {
                info!("Manual refresh requested");
                self.pending_refresh = true;
                self.notifications.info("Refreshing launches...");
            }

            // Column cursor.
            KeyCode::Left => self.table_view.cursor_left(),
            KeyCode::Right => self.table_view.cursor_right(self.config.columns.len()),
            KeyCode::Char('h') if vim => self.table_view.cursor_left(),
            KeyCode::Char('l') if vim => {
                self.table_view.cursor_right(self.config.columns.len())
            }

            // Row selection within the page.
            KeyCode::Up => self.table_view.select_up(),
            KeyCode::Down => self.table_view.select_down(self.view.rows.len()),
            KeyCode::Char('k') if vim => self.table_view.select_up(),
            KeyCode::Char('j') if vim => self.table_view.select_down(self.view.rows.len()),

            // Sorting.
            KeyCode::Char('s') | KeyCode::Enter => self.toggle_sort_on_cursor(),

            // Paging. Steps start from the clamped page the user actually
            // sees, not from the raw requested page.
            KeyCode::Char('n') | KeyCode::PageDown => {
                let page = (self.view.current_page + 1).min(self.view.total_pages);
                self.pagination.set_page(page);
                self.recompute();
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                let page = self.view.current_page.saturating_sub(1).max(1);
                self.pagination.set_page(page);
                self.recompute();
            }
            KeyCode::Char('g') => {
                self.pagination.set_page(1);
                self.recompute();
            }
            KeyCode::Char('G') => {
                self.pagination.set_page(self.view.total_pages);
                self.recompute();
            }

            // Page size.
            KeyCode::Char('-') => {
                let size = prev_page_size(&self.config.page_sizes, self.pagination.page_size);
                self.set_page_size(size);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let size = next_page_size(&self.config.page_sizes, self.pagination.page_size);
                self.set_page_size(size);
            }

            _ => {}
        }
    }

    /// Toggle the sort directive on the focused column, if it is sortable.
    fn toggle_sort_on_cursor(&mut self) {
        let Some(column) = self.config.columns.get(self.table_view.cursor()) else {
            return;
        };
        if !column.sortable {
            debug!(column = %column.key, "Ignoring sort on unsortable column");
            return;
        }

        let next = toggle_sort(self.sort.as_ref(), &column.key);
        debug!(column = %next.key, direction = ?next.direction, "Sort toggled");
        self.sort = Some(next);
        // The page is intentionally not reset; the view clamps it if the
        // page count changed.
        self.recompute();
    }

    /// Change the page size. The requested page is left alone; the derived
    /// view clamps it into the new page count.
    fn set_page_size(&mut self, size: usize) {
        if size != self.pagination.page_size {
            debug!(size, "Page size changed");
            self.pagination.set_page_size(size);
            self.recompute();
        }
    }

    /// Render the application.
    pub fn render(&mut self, frame: &mut Frame) {
        let [main_area, hints_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        match self.state {
            AppState::Loading => {
                self.loading.render(frame, main_area);
                render_context_help(frame, hints_area, KeyContext::Loading);
            }
            AppState::Table | AppState::Exiting => {
                let ctx = TableContext {
                    columns: &self.config.columns,
                    view: &self.view,
                    sort: self.sort.as_ref(),
                    page_size: self.pagination.page_size,
                    left_fixed: self.config.left_fixed_columns,
                    right_fixed: self.config.right_fixed_columns,
                    theme: &self.theme,
                };
                self.table_view.render(frame, main_area, &ctx);
                render_context_help(frame, hints_area, KeyContext::Table);
            }
            AppState::Help => {
                HelpView::render(frame, main_area);
                render_context_help(frame, hints_area, KeyContext::Help);
            }
        }

        self.notifications.render(frame, main_area);
    }
}
