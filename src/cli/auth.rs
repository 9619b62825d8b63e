//! Login and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::context::{CommandContext, is_interactive};
use crate::error::{Error, Result, SessionError};
use crate::session::login::{LOGIN_FAILED_FALLBACK, login_error_message};
use crate::session::store::TokenStore;

/// Run the login command.
///
/// Missing credentials are prompted for when a terminal is attached.
pub async fn login(
    opts: &GlobalOptions,
    email: Option<&str>,
    password: Option<&str>,
    return_to: Option<&str>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let route = match (email, password) {
        (Some(email), Some(password)) => ctx
            .login(email, password, return_to)
            .await
            .map_err(login_failure)?,
        (email, password) if is_interactive() => {
            let theme = ColorfulTheme::default();
            let email = match email {
                Some(e) => e.to_string(),
                None => Input::with_theme(&theme)
                    .with_prompt("Email")
                    .interact_text()?,
            };
            let password = match password {
                Some(p) => p.to_string(),
                None => Password::with_theme(&theme)
                    .with_prompt("Password")
                    .interact()?,
            };
            ctx.login(&email, &password, return_to)
                .await
                .map_err(login_failure)?
        }
        _ => return Err(SessionError::EmptyCredentials.into()),
    };

    // keep the address the token was issued by
    if opts.api_url.is_some() || !ctx.config_path.exists() {
        ctx.config.save_to(&ctx.config_path)?;
        log::debug!("Saved config to {}", ctx.config_path.display());
    }

    println!("{} Signed in", "✓".green());
    println!(
        "  Continue with {}",
        format!("inventario open {}", route.landing()).cyan()
    );
    Ok(())
}

/// Turn a sign-in error into the message the user should see.
fn login_failure(err: Error) -> Error {
    match err {
        Error::Session(SessionError::EmptyCredentials) => err,
        other => {
            SessionError::LoginFailed(login_error_message(&other, LOGIN_FAILED_FALLBACK)).into()
        }
    }
}

/// Run the logout command.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let had_session = ctx.store.read().is_some();
    ctx.store.clear()?;

    if had_session {
        println!("{} Signed out", "✓".green());
    } else {
        println!("{} No active session", "○".dimmed());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_login_failure_uses_server_message() {
        let err: Error =
            ApiError::Unauthorized(r#"{"message":"Credenciales inválidas"}"#.to_string()).into();
        assert_eq!(
            login_failure(err).to_string(),
            "Sign-in failed: Credenciales inválidas"
        );
    }

    #[test]
    fn test_login_failure_keeps_empty_credentials() {
        let err = login_failure(SessionError::EmptyCredentials.into());
        assert!(matches!(err, Error::Session(SessionError::EmptyCredentials)));
    }
}
