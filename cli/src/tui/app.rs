use chrono::Local;
use ratatui::widgets::TableState;
use notetask_core::{Session, Task, TaskStats};
use uuid::Uuid;

pub enum InputMode {
    Normal,
    Composing,
}

pub struct App {
    pub session: Session,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub message: Option<String>,
}

impl App {
    pub fn new() -> App {
        App {
            session: Session::new(),
            state: TableState::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            message: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.session.tasks()
    }

    pub fn stats(&self) -> TaskStats {
        self.session.stats()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.state.selected().and_then(|i| self.tasks().get(i))
    }

    fn selected_id(&self) -> Option<Uuid> {
        self.selected_task().map(|t| t.id)
    }

    pub fn next(&mut self) {
        if self.tasks().is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.tasks().len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.tasks().is_empty() {
            return;
        }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks().len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_done(&mut self) {
        if let Some(id) = self.selected_id() {
            let _ = self.session.toggle_done(&id);
        }
    }

    pub fn delete_task(&mut self) {
        let selected = self.state.selected();
        if let Some(id) = self.selected_id() {
            let _ = self.session.delete(&id);

            // Keep the selection in range after removal.
            if self.tasks().is_empty() {
                self.state.select(None);
            } else if let Some(i) = selected {
                if i >= self.tasks().len() {
                    self.state.select(Some(self.tasks().len() - 1));
                } else {
                    self.state.select(Some(i));
                }
            }
        }
    }

    pub fn clear_tasks(&mut self) {
        self.session.clear();
        self.state.select(None);
        self.message = Some("Cleared all tasks.".to_string());
    }

    pub fn enter_compose_mode(&mut self) {
        self.input_mode = InputMode::Composing;
        self.input.clear();
        self.cursor_position = 0;
        self.message = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Run the extraction pipeline over the composed notes and append
    /// the new tasks to the session.
    pub fn submit_notes(&mut self) {
        if self.input.trim().is_empty() {
            self.message = Some("Please enter some notes to extract tasks.".to_string());
            self.exit_input_mode();
            return;
        }

        let today = Local::now().date_naive();
        let was_empty = self.session.is_empty();
        let added = self.session.extract_notes(&self.input, today);

        self.message = Some(match added {
            0 => "No tasks found in the notes.".to_string(),
            1 => "Added 1 task.".to_string(),
            n => format!("Added {} tasks.", n),
        });

        if was_empty && !self.session.is_empty() {
            self.state.select(Some(0));
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }
}
