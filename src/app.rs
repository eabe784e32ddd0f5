use std::collections::VecDeque;
use std::io::{self, Write};

use anyhow::Result;

use crate::command::{Command, split_commands};
use crate::error::EditError;
use crate::model::config::{AppConfig, ErrorPolicy};
use crate::model::editor::Editor;
use crate::msg::Msg;

/// Whether the dispatcher keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct App {
    pub editor: Editor,
    pub config: AppConfig,
    pub should_quit: bool,
    /// Command strings of the current line not yet executed, oldest first.
    pending: VecDeque<String>,
    /// Diagnostics waiting to be shown to the user.
    notifications: VecDeque<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            editor: Editor::new(),
            config,
            should_quit: false,
            pending: VecDeque::new(),
            notifications: VecDeque::new(),
        }
    }

    // ── MVU: Update ──────────────────────────────────────────────

    pub fn update(&mut self, msg: Msg) -> Result<()> {
        match msg {
            Msg::Line(line) => self.handle_line(&line)?,
            Msg::Undecodable(err) => self.report_failure("<undecodable line>", err.into())?,
            Msg::Quit => self.should_quit = true,
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim_end_matches(['\r', '\n']);
        self.pending.extend(split_commands(line).map(str::to_string));
        tracing::debug!(queued = self.pending.len(), "line received");

        while let Some(raw) = self.pending.pop_front() {
            match self.execute(&raw) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.pending.clear();
                    self.should_quit = true;
                    break;
                }
                Err(err) => self.report_failure(&raw, err)?,
            }
        }

        Ok(())
    }

    /// Queue a diagnostic for `err`; under the abort policy also end the session.
    fn report_failure(&mut self, input: &str, err: EditError) -> Result<()> {
        tracing::warn!(input, "command failed: {err}");
        self.push_notification(format!("error: {err}"));
        if self.config.editor.on_error == ErrorPolicy::Abort {
            self.pending.clear();
            return Err(anyhow::Error::new(err).context(format!("\"{input}\"")));
        }
        Ok(())
    }

    fn execute(&mut self, raw: &str) -> Result<Flow, EditError> {
        let command = Command::parse(raw)?;
        tracing::debug!(command = command.name(), "dispatch");

        match command {
            Command::Type(text) => self.editor.insert(&text),
            Command::Select { start, end } => self.editor.select(start, end)?,
            Command::MoveCursor(offset) => self.editor.move_cursor(offset),
            Command::Copy => {
                self.editor.copy();
                tracing::debug!(entries = self.editor.clipboard().len(), "clipboard");
            }
            Command::Paste(steps_back) => {
                if !self.editor.paste(steps_back) {
                    tracing::debug!(
                        steps_back,
                        entries = self.editor.clipboard().len(),
                        "paste skipped: no such clipboard entry"
                    );
                }
            }
            Command::Exit => return Ok(Flow::Exit),
            Command::Unknown(op) => tracing::debug!("ignoring unknown operation {op:?}"),
        }

        tracing::trace!(
            cursor = self.editor.cursor(),
            selecting = self.editor.selection().is_active(),
            "applied"
        );
        Ok(Flow::Continue)
    }

    fn push_notification(&mut self, message: String) {
        self.notifications.push_back(message);
    }

    /// Write and clear pending diagnostics.
    pub fn flush_notifications(&mut self, err: &mut impl Write) -> io::Result<()> {
        for note in self.notifications.drain(..) {
            writeln!(err, "{note}")?;
        }
        err.flush()
    }

    // ── MVU: View ────────────────────────────────────────────────

    pub fn view(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}{}", self.config.general.output_label, self.editor.text())?;
        out.flush()
    }
}
