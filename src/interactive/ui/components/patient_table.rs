use crate::interactive::constants::PAGE_SIZE;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::schemas::Patient;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
};

/// The directory table: one header row plus one row per visible
/// patient, columns in display-name, id, birth, registration order.
#[derive(Default)]
pub struct PatientTable {
    patients: Vec<Patient>,
    selected_index: usize,
}

impl PatientTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_patients(&mut self, patients: Vec<Patient>) {
        self.patients = patients;
        if self.selected_index >= self.patients.len() {
            self.selected_index = self.patients.len().saturating_sub(1);
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.patients.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_patient(&self) -> Option<&Patient> {
        self.patients.get(self.selected_index)
    }

    fn move_up(&mut self, step: usize) -> bool {
        if self.selected_index == 0 || self.patients.is_empty() {
            return false;
        }
        self.selected_index = self.selected_index.saturating_sub(step);
        true
    }

    fn move_down(&mut self, step: usize) -> bool {
        let last = match self.patients.len() {
            0 => return false,
            len => len - 1,
        };
        if self.selected_index >= last {
            return false;
        }
        self.selected_index = (self.selected_index + step).min(last);
        true
    }
}

impl Component for PatientTable {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let header = Row::new(["Name", "ID", "Date of Birth", "Date of Registration"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.patients.iter().map(|patient| {
            Row::new([
                patient.display_name(),
                patient.id.clone(),
                patient.date_of_birth.clone(),
                patient.date_of_registration.clone(),
            ])
        });

        let widths = [
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(14),
            Constraint::Length(20),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));

        let mut table_state = TableState::default();
        table_state.select((!self.patients.is_empty()).then_some(self.selected_index));
        f.render_stateful_widget(table, area, &mut table_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let moved = match key.code {
            KeyCode::Up => self.move_up(1),
            KeyCode::Down => self.move_down(1),
            KeyCode::PageUp => self.move_up(PAGE_SIZE),
            KeyCode::PageDown => self.move_down(PAGE_SIZE),
            _ => false,
        };

        moved.then(|| Message::SelectPatient(self.selected_index))
    }
}
