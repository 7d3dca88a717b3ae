use crate::directory::SortKey;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Sort key selector. Tab cycles forward through insertion order and
/// the four keys, BackTab cycles backward.
#[derive(Default)]
pub struct SortSelector {
    selected: Option<SortKey>,
}

impl SortSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_selected(&mut self, selected: Option<SortKey>) {
        self.selected = selected;
    }

    pub fn selected(&self) -> Option<SortKey> {
        self.selected
    }

    fn next(&self) -> Option<SortKey> {
        match self.selected {
            None => SortKey::ALL.first().copied(),
            Some(key) => SortKey::ALL
                .iter()
                .position(|k| *k == key)
                .and_then(|i| SortKey::ALL.get(i + 1))
                .copied(),
        }
    }

    fn prev(&self) -> Option<SortKey> {
        match self.selected {
            None => SortKey::ALL.last().copied(),
            Some(key) => SortKey::ALL
                .iter()
                .position(|k| *k == key)
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| SortKey::ALL.get(i))
                .copied(),
        }
    }

    fn option_span(&self, label: &str, is_selected: bool) -> Span<'static> {
        if is_selected {
            Span::styled(
                format!("[{label}]"),
                Style::default().bg(Color::White).fg(Color::Black),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray))
        }
    }
}

impl Component for SortSelector {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Sort by: ",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        spans.push(self.option_span("-", self.selected.is_none()));
        for key in SortKey::ALL {
            spans.push(Span::raw(" "));
            spans.push(self.option_span(key.as_str(), self.selected == Some(key)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Tab => {
                self.selected = self.next();
                Some(Message::SortKeyChanged(self.selected))
            }
            KeyCode::BackTab => {
                self.selected = self.prev();
                Some(Message::SortKeyChanged(self.selected))
            }
            _ => None,
        }
    }
}
