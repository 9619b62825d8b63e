//! Filter argument types for list commands

use clap::Args;

/// Search and limit arguments shared by the resource list commands.
#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Filter by text (name, code, ...)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Maximum results to show
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

impl ListArgs {
    /// Search text when it is non-blank.
    pub fn search_ref(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
