use std::{io, path::PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use derive_getters::Getters;
use derive_new::new;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{
    app::{
        export::{ExportKind, export_orders, export_realized, export_unrealized},
        ui,
    },
    models::{Order, RealizedGainsReport, UnrealizedGainsReport},
};

#[derive(Clone, Copy, Debug, Default, Display, EnumIter, Eq, PartialEq)]
pub enum Tab {
    #[default]
    #[strum(to_string = "Realized Gains")]
    Realized,
    #[strum(to_string = "Unrealized Gains")]
    Unrealized,
    #[strum(to_string = "Order History")]
    Orders,
}

impl Tab {
    fn position(&self) -> usize {
        Tab::iter().position(|tab| tab == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        let count = Tab::iter().len();
        Tab::iter().nth((self.position() + 1) % count).unwrap_or_default()
    }

    pub fn previous(&self) -> Tab {
        let count = Tab::iter().len();
        Tab::iter()
            .nth((self.position() + count - 1) % count)
            .unwrap_or_default()
    }

    pub fn export_kind(&self) -> ExportKind {
        match self {
            Tab::Realized => ExportKind::RealizedGains,
            Tab::Unrealized => ExportKind::UnrealizedGains,
            Tab::Orders => ExportKind::OrderHistory,
        }
    }
}

/// Everything the screens show. Computed once before the UI starts.
#[derive(Clone, Debug, Default, Getters, new)]
pub struct Reports {
    realized: RealizedGainsReport,
    unrealized: UnrealizedGainsReport,
    orders: Vec<Order>,
}

impl Reports {
    pub fn row_count(&self, tab: Tab) -> usize {
        match tab {
            Tab::Realized => self.realized.records().len(),
            Tab::Unrealized => self.unrealized.records().len(),
            Tab::Orders => self.orders.len(),
        }
    }

    pub fn export(&self, tab: Tab, path: &str) -> Result<PathBuf> {
        match tab {
            Tab::Realized => export_realized(&self.realized, path),
            Tab::Unrealized => export_unrealized(&self.unrealized, path),
            Tab::Orders => export_orders(&self.orders, path),
        }
    }
}

pub struct App {
    reports: Reports,
    tab: Tab,
    table_state: TableState,
    popup_message: Option<String>,
    error_popup: Option<String>,
}

impl App {
    pub fn new(reports: Reports) -> Self {
        Self {
            reports,
            tab: Tab::default(),
            table_state: TableState::default(),
            popup_message: None,
            error_popup: None,
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn popup_message(&self) -> &Option<String> {
        &self.popup_message
    }

    pub fn error_popup(&self) -> &Option<String> {
        &self.error_popup
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.table_state.select(None);
    }

    fn select_next(&mut self) {
        let rows = self.reports.row_count(self.tab);
        if rows == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < rows => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn select_previous(&mut self) {
        let rows = self.reports.row_count(self.tab);
        if rows == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => rows - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    /// Writes the current tab to `<kind>-<date>.csv` in the working directory.
    fn export_current(&mut self, today: NaiveDate) {
        let file_name = self.tab.export_kind().default_file_name(today);
        match self.reports.export(self.tab, &file_name) {
            Ok(path) => self.popup_message = Some(format!("Exported to {}", path.display())),
            Err(e) => self.error_popup = Some(format!("Export failed: {:?}", e)),
        }
    }

    /// Applies one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, today: NaiveDate) -> bool {
        if self.error_popup.is_some() || self.popup_message.is_some() {
            self.error_popup = None;
            self.popup_message = None;
            return code == KeyCode::Char('q');
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Tab | KeyCode::Right => self.switch_tab(self.tab.next()),
            KeyCode::BackTab | KeyCode::Left => self.switch_tab(self.tab.previous()),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_previous(),
            KeyCode::Char('e') => self.export_current(today),
            _ => {}
        }
        false
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.reports,
                    self.tab,
                    &mut self.table_state,
                    &self.popup_message,
                    &self.error_popup,
                )
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if self.handle_key(key.code, Local::now().date_naive()) {
                    return Ok(());
                }
            }
        }
    }
}
