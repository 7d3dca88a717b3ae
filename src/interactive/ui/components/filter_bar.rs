use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Text input narrowing the table by display name.
#[derive(Default)]
pub struct FilterBar {
    text: String,
    cursor_position: usize,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync from app state. Only an actual change moves the cursor, so
    /// the per-frame sync does not fight cursor navigation.
    pub fn set_text(&mut self, text: String) {
        if text != self.text {
            self.text = text;
            self.cursor_position = self.text.chars().count();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum()
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut pos = from;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Delete the char range and report whether the text changed
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }

        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.text.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor_position == 0 {
            return false;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_char_at_cursor(&mut self) -> bool {
        if self.cursor_position >= self.char_count() {
            return false;
        }
        let start = self.cursor_position;
        self.delete_range(start, start + 1)
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor_position);
        self.text.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::FilterChanged(self.text.clone()))
    }
}

impl Component for FilterBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let input_text = if self.cursor_position < self.char_count() {
            let before: String = self.text.chars().take(self.cursor_position).collect();
            let rest: String = self.text.chars().skip(self.cursor_position).collect();

            vec![
                Span::raw(before),
                Span::styled(
                    rest.chars().next().unwrap_or(' ').to_string(),
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(rest.chars().skip(1).collect::<String>()),
            ]
        } else {
            vec![
                Span::raw(self.text.clone()),
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
            ]
        };

        let input = Paragraph::new(Line::from(input_text))
            .block(Block::default().title("Filter by name:").borders(Borders::ALL))
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                // Ctrl+U - delete from cursor to beginning of line
                KeyCode::Char('u') => {
                    if self.cursor_position > 0 && self.delete_range(0, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                // Ctrl+W - delete word before cursor
                KeyCode::Char('w') => {
                    let boundary = self.find_prev_word_boundary(self.cursor_position);
                    if self.delete_range(boundary, self.cursor_position) {
                        self.changed()
                    } else {
                        None
                    }
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                // Alt chords are navigation elsewhere, not input
                if key.modifiers.contains(KeyModifiers::ALT) {
                    return None;
                }
                self.insert_char(c);
                self.changed()
            }
            KeyCode::Backspace => {
                if self.delete_char_before_cursor() {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Delete => {
                if self.delete_char_at_cursor() {
                    self.changed()
                } else {
                    None
                }
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
