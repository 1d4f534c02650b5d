use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::render::{render, Props, SegmentList};

/// How long a status message stays in the info line
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Delimiter,
}

pub struct App {
    pub field: Field,

    // Component input being edited
    pub props: Props,

    // Rendered from `props` after every edit
    pub list: SegmentList,
    pub selected: usize,

    pub config: AppConfig,
    config_path: Option<PathBuf>,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(props: Props, config: AppConfig, config_path: Option<PathBuf>) -> Self {
        let list = render(&props);
        Self {
            field: Field::Text,
            props,
            list,
            selected: 0,
            config,
            config_path,
            status_message: None,
            status_message_time: None,
        }
    }

    /// Set a status message (auto-clears after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    /// Periodic housekeeping between redraws
    pub fn tick(&mut self) {
        if let Some(since) = self.status_message_time {
            if since.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    /// The delimiter as typed, empty when unset
    pub fn delimiter_input(&self) -> &str {
        self.props.delimiter.as_deref().unwrap_or("")
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.field = match self.field {
                    Field::Text => Field::Delimiter,
                    Field::Delimiter => Field::Text,
                };
            }

            KeyCode::Down => self.move_down(),
            KeyCode::Up => self.move_up(),
            KeyCode::Char('n') if ctrl => self.move_down(),
            KeyCode::Char('p') if ctrl => self.move_up(),

            KeyCode::Char('s') if ctrl => self.save_delimiter(),
            KeyCode::Char('u') if ctrl => {
                self.focused_input().clear();
                self.refresh();
            }

            KeyCode::Char(c) if !ctrl => {
                self.focused_input().push(c);
                self.refresh();
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                self.refresh();
            }

            _ => {}
        }

        Ok(())
    }

    fn focused_input(&mut self) -> &mut String {
        match self.field {
            Field::Text => &mut self.props.text,
            Field::Delimiter => self.props.delimiter.get_or_insert_with(String::new),
        }
    }

    /// Re-render the list from the current props
    fn refresh(&mut self) {
        self.list = render(&self.props);
        if self.selected >= self.list.len() {
            self.selected = self.list.len().saturating_sub(1);
        }
        tracing::trace!(
            "Rendered {} items with separator {:?}",
            self.list.len(),
            self.list.separator.as_str()
        );
    }

    fn move_down(&mut self) {
        if self.selected + 1 < self.list.len() {
            self.selected += 1;
        }
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn save_delimiter(&mut self) {
        let delimiter = self.props.delimiter.clone().filter(|d| !d.is_empty());
        self.config.delimiter = delimiter;

        let path = match &self.config_path {
            Some(p) => Ok(p.clone()),
            None => AppConfig::default_path(),
        };

        match path.and_then(|p| self.config.save_to(&p)) {
            Ok(()) => {
                tracing::info!("Saved default delimiter {:?}", self.list.separator.as_str());
                self.set_status(format!("Default delimiter saved: \"{}\"", self.list.separator));
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.set_status(format!("Error: {}", e));
            }
        }
    }
}
