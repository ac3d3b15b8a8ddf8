//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults;

/// Switch kubeconfig context and namespace
#[derive(Parser, Debug)]
#[command(name = "sk")]
#[command(version)]
#[command(
    about = "Interactively switch kubeconfig context and namespace",
    long_about = None
)]
#[command(after_help = "EXAMPLES:\n  \
        sk              # pick a context\n  \
        sk -n           # pick a context, then a namespace\n  \
        sk -N           # pick a namespace in the current context\n  \
        sk -p           # go back to the previous context/namespace\n  \
        sk -F work      # remember the current selection as 'work'\n  \
        sk -f work      # switch to the 'work' favorite")]
pub struct Cli {
    /// Print the currently selected context and namespace
    #[arg(short = 'c', long = "current")]
    pub print_current: bool,

    /// Switch to the previously used context and namespace. Has no effect if state can't be retrieved.
    #[arg(short = 'p', long = "previous")]
    pub previous: bool,

    /// Select namespace from the ones available for the selected context
    #[arg(short = 'n', long = "namespace")]
    pub namespace: bool,

    /// Only select namespace from the ones available for the current context
    #[arg(short = 'N', long = "namespace-only")]
    pub namespace_only: bool,

    /// List all stored favorites
    #[arg(short = 'l', long = "list-favorites")]
    pub list_favorites: bool,

    /// Switch to a stored favorite context and namespace
    #[arg(short = 'f', long = "favorite", value_name = "NAME")]
    pub favorite: Option<String>,

    /// Store current context and namespace as favorite
    #[arg(short = 'F', long = "store-favorite", value_name = "NAME")]
    pub store_favorite: Option<String>,

    /// Kubeconfig file (defaults to ~/.kube/config)
    #[arg(long, env = crate::config::kube::ENV_VAR, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}
