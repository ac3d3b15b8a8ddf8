//! Operation mode selected from CLI flags

use crate::cli::Cli;
use crate::error::{Result, SkError};
use crate::state::validate_favorite_name;

/// What the interactive picker is asked to choose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickScope {
    ContextOnly,
    ContextThenNamespace,
    NamespaceOnly,
}

/// The single operation an invocation performs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    PrintCurrent,
    LoadFavorite(String),
    StoreFavorite(String),
    SwitchPrevious,
    ListFavorites,
    InteractivePick(PickScope),
}

impl Mode {
    /// Pick the mode requested on the command line.
    ///
    /// Precedence: current > load favorite > store favorite > previous >
    /// list favorites > interactive pick.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.favorite.is_some() && cli.store_favorite.is_some() {
            return Err(SkError::Usage(
                "Can't use -f and -F at the same time".to_string(),
            ));
        }

        if cli.print_current {
            return Ok(Mode::PrintCurrent);
        }
        if let Some(name) = &cli.favorite {
            validate_favorite_name(name)?;
            return Ok(Mode::LoadFavorite(name.clone()));
        }
        if let Some(name) = &cli.store_favorite {
            validate_favorite_name(name)?;
            return Ok(Mode::StoreFavorite(name.clone()));
        }
        if cli.previous {
            return Ok(Mode::SwitchPrevious);
        }
        if cli.list_favorites {
            return Ok(Mode::ListFavorites);
        }

        let scope = if cli.namespace_only {
            PickScope::NamespaceOnly
        } else if cli.namespace {
            PickScope::ContextThenNamespace
        } else {
            PickScope::ContextOnly
        };
        Ok(Mode::InteractivePick(scope))
    }

    /// Whether this mode may rewrite the kubeconfig
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Mode::LoadFavorite(_) | Mode::SwitchPrevious | Mode::InteractivePick(_)
        )
    }
}
