//! Interactive fuzzy picker

use std::io;

use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use log::debug;

use crate::config::picker as picker_config;
use crate::error::{Result, SkError};

/// Lets the user choose one string out of a list
pub trait Picker {
    /// Returns the chosen string, or `None` if the user cancelled
    fn pick(&self, prompt: &str, candidates: &[String]) -> Result<Option<String>>;
}

/// Terminal picker with fuzzy filtering; the first candidate starts highlighted
pub struct FuzzyPicker;

impl FuzzyPicker {
    /// Visible rows, derived from the terminal height
    fn page_size() -> usize {
        match crossterm::terminal::size() {
            Ok((_, rows)) => usize::from(rows.saturating_sub(picker_config::RESERVED_LINES)).max(1),
            Err(_) => picker_config::FALLBACK_PAGE_SIZE,
        }
    }
}

impl Picker for FuzzyPicker {
    fn pick(&self, prompt: &str, candidates: &[String]) -> Result<Option<String>> {
        let selection = FuzzySelect::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} {}", picker_config::PROMPT, prompt))
            .items(candidates)
            .default(0)
            .max_length(Self::page_size())
            .interact_opt();

        match selection {
            Ok(Some(index)) => {
                let chosen = candidates.get(index).cloned().ok_or_else(|| {
                    SkError::Selection(format!("Picker returned unknown index {}", index))
                })?;
                debug!("User picked '{}'", chosen);
                Ok(Some(chosen))
            }
            Ok(None) => Ok(None),
            // Ctrl-C while reading a key
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(SkError::Selection(format!("Failed to run picker: {}", e))),
        }
    }
}
