//! Candidate ordering and validation around the picker

use log::{debug, info};

use crate::error::{Result, SkError};
use crate::ui::Picker;

/// Move `current` to the front, keeping the relative order of the rest
pub fn current_first(names: Vec<String>, current: &str) -> Vec<String> {
    let (mut ordered, rest): (Vec<String>, Vec<String>) =
        names.into_iter().partition(|name| name == current);
    ordered.extend(rest);
    ordered
}

/// The chosen value must be an exact member of the candidates
pub fn validate(candidates: &[String], chosen: &str) -> bool {
    candidates.iter().any(|c| c == chosen)
}

/// Shows candidate lists through a [`Picker`]
pub struct Presenter<'a> {
    picker: &'a dyn Picker,
}

impl<'a> Presenter<'a> {
    pub fn new(picker: &'a dyn Picker) -> Self {
        Self { picker }
    }

    /// Let the user pick one of `names`, offering `current` first.
    ///
    /// `kind` names what is being chosen ("context", "namespace").
    pub fn choose(&self, kind: &str, names: Vec<String>, current: &str) -> Result<Option<String>> {
        let candidates = current_first(names, current);
        self.present(kind, &candidates)
    }

    /// Returns `None` on cancellation; an empty list cancels without prompting.
    pub fn present(&self, kind: &str, candidates: &[String]) -> Result<Option<String>> {
        if candidates.is_empty() {
            info!("No {} to choose from", kind);
            return Ok(None);
        }

        let chosen = match self.picker.pick(&format!("Select {}", kind), candidates)? {
            Some(chosen) => chosen,
            None => {
                debug!("{} selection cancelled", kind);
                return Ok(None);
            }
        };

        if !validate(candidates, &chosen) {
            return Err(SkError::Selection(format!(
                "'{}' is not a valid {} selection",
                chosen, kind
            )));
        }
        Ok(Some(chosen))
    }
}
