//! Console input service.
//!
//! Prompts on the terminal via dialoguer. Listings are paged by screen
//! height when stdout is a terminal; piped output gets the whole list at
//! once so scripts and tests see everything.

use std::io;

use crossterm::terminal;
use is_terminal::IsTerminal;
use dialoguer::{Input, Select};

use crate::domain::ports::input_service::{Choice, InputService};
use crate::error::CertResult;
use crate::ui::output::format_rows;

const MIN_PAGE_ROWS: usize = 4;

/// Terminal-backed input service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }

    fn page_size() -> usize {
        let (_cols, rows) = terminal::size().unwrap_or((80, 24));
        usize::from(rows.saturating_sub(2)).max(MIN_PAGE_ROWS)
    }
}

impl InputService for ConsoleInput {
    fn show_paged_list(&self, choices: &[Choice]) -> CertResult<()> {
        if choices.is_empty() {
            return Ok(());
        }
        let rendered = format_rows(choices);
        if !io::stdout().is_terminal() {
            print!("{rendered}");
            return Ok(());
        }

        let lines: Vec<&str> = rendered.lines().collect();
        let page = Self::page_size();
        for (index, chunk) in lines.chunks(page).enumerate() {
            if index > 0 {
                let _: String = Input::new()
                    .with_prompt("<Enter> for more")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(io::Error::other)?;
            }
            for line in chunk {
                println!("{line}");
            }
        }
        Ok(())
    }

    fn request_string(&self, prompt: &str) -> CertResult<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)?;
        Ok(answer)
    }

    fn choose_from(&self, prompt: &str, options: &[String]) -> CertResult<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }
        let selection = Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(io::Error::other)?;
        Ok(selection)
    }
}
