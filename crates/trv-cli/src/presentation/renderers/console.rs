use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, StatusBadge, StatusLevel,
};
use crate::types::OutputFormat;

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render to a string without printing.
    pub fn format<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            let mut out = serde_json::to_string_pretty(result)?;
            out.push('\n');
            return Ok(out);
        }

        let mut out = String::new();
        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), self.paint(badge))?;
            writeln!(out)?;
        }
        write!(out, "{}", result.content.create_view())?;
        Ok(out)
    }

    fn paint(&self, badge: &StatusBadge) -> String {
        if !self.color {
            return badge.label.clone();
        }
        match badge.level {
            StatusLevel::Success => badge.label.green().bold().to_string(),
            StatusLevel::Info => badge.label.bold().to_string(),
            StatusLevel::Warning => badge.label.yellow().bold().to_string(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.format(&result)?);
        Ok(())
    }
}
