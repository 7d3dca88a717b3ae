use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::directory::visible_patients;
use crate::interactive::constants::FILTER_BAR_HEIGHT;
use crate::interactive::domain::models::LoadState;
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, filter_bar::FilterBar, patient_table::PatientTable, sort_selector::SortSelector,
};
use crate::schemas::Patient;

const STATUS_HINTS: &str = "Tab: Sort | ↑/↓: Select | Ctrl+R: Reload | Esc: Quit";

pub struct Renderer {
    filter_bar: FilterBar,
    sort_selector: SortSelector,
    patient_table: PatientTable,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            filter_bar: FilterBar::new(),
            sort_selector: SortSelector::new(),
            patient_table: PatientTable::new(),
        }
    }

    /// Three mutually exclusive branches: the loading indicator, the
    /// error line, or the directory with its controls and table.
    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        match &state.load {
            LoadState::Loading => self.render_loading(f),
            LoadState::Failed(err) => self.render_error(f, f.area(), &err.to_string()),
            LoadState::Loaded(patients) => self.render_directory(f, state, patients),
        }
    }

    fn render_loading(&self, f: &mut Frame) {
        f.render_widget(Paragraph::new("Loading..."), f.area());
    }

    fn render_error(&self, f: &mut Frame, area: Rect, message: &str) {
        let text = Paragraph::new(format!("Error: {message}"))
            .style(Style::default().fg(Color::Red));
        f.render_widget(text, area);
    }

    fn render_directory(&mut self, f: &mut Frame, state: &AppState, patients: &[Patient]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                 // Title
                Constraint::Length(FILTER_BAR_HEIGHT), // Filter input
                Constraint::Length(1),                 // Sort selector
                Constraint::Min(0),                    // Table
                Constraint::Length(1),                 // Status line
            ])
            .split(f.area());

        let title = Paragraph::new("Patients").style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(title, chunks[0]);

        self.filter_bar.set_text(state.view.filter.clone());
        self.sort_selector.set_selected(state.view.sort_key);

        self.filter_bar.render(f, chunks[1]);
        self.sort_selector.render(f, chunks[2]);

        match visible_patients(patients, &state.view.filter, state.view.sort_key) {
            Ok(visible) => {
                self.patient_table.set_patients(visible);
                self.patient_table.set_selected_index(state.view.selected_index);
                self.patient_table.render(f, chunks[3]);
            }
            Err(err) => self.render_error(f, chunks[3], &err.to_string()),
        }

        let status = state.ui.message.as_deref().unwrap_or(STATUS_HINTS);
        let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status_bar, chunks[4]);
    }

    pub fn filter_bar_mut(&mut self) -> &mut FilterBar {
        &mut self.filter_bar
    }

    pub fn sort_selector_mut(&mut self) -> &mut SortSelector {
        &mut self.sort_selector
    }

    pub fn patient_table_mut(&mut self) -> &mut PatientTable {
        &mut self.patient_table
    }
}
