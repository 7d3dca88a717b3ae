use crate::directory::{SortKey, visible_patients};
use crate::interactive::domain::models::LoadState;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;

pub struct AppState {
    pub load: LoadState,
    /// Current load generation; settled fetches carrying another value
    /// belong to a superseded load and are dropped.
    pub generation: u64,
    pub view: ViewState,
    pub ui: UiState,
}

pub struct ViewState {
    pub filter: String,
    pub sort_key: Option<SortKey>,
    pub selected_index: usize,
}

pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            generation: 0,
            view: ViewState {
                filter: String::new(),
                sort_key: None,
                selected_index: 0,
            },
            ui: UiState { message: None },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::FilterChanged(filter) => {
                self.view.filter = filter;
                self.clamp_selection();
                Command::None
            }
            Message::SortKeyChanged(key) => {
                self.view.sort_key = key;
                self.clamp_selection();
                Command::None
            }
            Message::SelectPatient(index) => {
                if index < self.visible_len() {
                    self.view.selected_index = index;
                }
                Command::None
            }
            Message::ReloadRequested => {
                // A new generation is the "page reload": anything still
                // outstanding settles into a stale generation
                self.generation += 1;
                self.load = LoadState::Loading;
                self.view.selected_index = 0;
                Command::ExecuteFetch
            }
            Message::FetchSettled(generation, result) => {
                if generation == self.generation {
                    self.load = match result {
                        Ok(patients) => LoadState::Loaded(patients),
                        Err(err) => LoadState::Failed(err),
                    };
                    self.clamp_selection();
                }
                Command::None
            }
        }
    }

    /// Rows the current filter/sort selection leaves visible. A failed
    /// derivation counts as zero; the renderer reports the error.
    pub fn visible_len(&self) -> usize {
        visible_patients(self.load.patients(), &self.view.filter, self.view.sort_key)
            .map(|visible| visible.len())
            .unwrap_or(0)
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.view.selected_index >= len {
            self.view.selected_index = len.saturating_sub(1);
        }
    }
}
