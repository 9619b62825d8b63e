//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::session::guard::{self, SessionState};
use crate::session::store::TokenStore;
use crate::session::token;

/// Run the status command to display configuration and session status.
///
/// Read-only: an expired token is reported, not cleared.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    println!("{}\n", "Inventario Status".bold());

    let config_note = if ctx.config_path.exists() {
        String::new()
    } else {
        format!(" {}", "(not created, using defaults)".dimmed())
    };
    println!(
        "Config file: {}{}",
        ctx.config_path.display().to_string().cyan(),
        config_note
    );
    println!("API: {}", ctx.config.api_url.cyan());
    println!();

    match guard::current_state(ctx.store.as_ref()) {
        SessionState::NoToken => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run 'inventario login' to sign in");
        }
        SessionState::ExpiredToken => {
            println!("{} Session expired", "⚠".yellow());
            println!("  → Run 'inventario login' to sign in again");
        }
        SessionState::Authorized => {
            let expiry = ctx
                .store
                .read()
                .as_deref()
                .and_then(token::expires_at);
            match expiry {
                Some(expires) => {
                    let remaining = expires.signed_duration_since(chrono::Utc::now());
                    println!(
                        "{} Signed in (expires in {}h {}m)",
                        "✓".green(),
                        remaining.num_hours(),
                        remaining.num_minutes() % 60
                    );
                }
                None => println!("{} Signed in (no expiry in token)", "✓".green()),
            }
        }
    }

    println!("{} Token file: {}", "○".dimmed(), ctx.store.path().display());
    println!();

    Ok(())
}
