//! Login, signup, logout, and the page guard.
//!
//! The forms are cosmetic: whatever is typed is only echoed back in the
//! greeting. Signing in just sets the local session flag.

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use aura_types::session::{GateDecision, Page};

use crate::state::AppState;

/// Which form the login page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    SignIn,
    SignUp,
}

/// Run the session gate for `page`.
///
/// Returns true when the page may continue initializing. On a redirect a
/// hint is printed and the caller must stop.
pub async fn enter(state: &AppState, page: Page, json: bool) -> bool {
    match state.gate.check(page).await {
        GateDecision::Proceed => true,
        GateDecision::Redirect(target) => {
            print_redirect(page, target, json);
            false
        }
    }
}

fn print_redirect(from: Page, to: Page, json: bool) {
    if json {
        let result = serde_json::json!({
            "page": from.to_string(),
            "redirect": to.to_string(),
        });
        println!("{result}");
        return;
    }

    println!();
    match to {
        Page::Login => println!(
            "  {} Not signed in. Run {} first.",
            style("!").yellow().bold(),
            style("aura login").cyan()
        ),
        _ => println!(
            "  {} Already signed in. See {}.",
            style("*").cyan().bold(),
            style("aura status").cyan()
        ),
    }
    println!();
}

/// Show the login page, starting on `view`.
pub async fn login(
    state: &AppState,
    view: AuthView,
    name: Option<String>,
    email: Option<String>,
    json: bool,
) -> Result<()> {
    if !enter(state, Page::Login, json).await {
        return Ok(());
    }

    let interactive = !json && email.is_none() && console::user_attended();
    let (view, display_name) = if interactive {
        let view = choose_view(view)?;
        (view, prompt_form(view)?)
    } else {
        (view, name.or(email))
    };

    let target = match view {
        AuthView::SignIn => state.gate.login().await?,
        AuthView::SignUp => state.gate.signup().await?,
    };
    tracing::info!(?view, %target, "session flag set");

    if json {
        let result = serde_json::json!({
            "logged_in": true,
            "redirect": target.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let who = display_name.unwrap_or_else(|| "athlete".to_string());
        println!();
        println!(
            "  {} Welcome, {}.",
            style("ok").green(),
            style(who).cyan().bold()
        );
        println!(
            "  {}",
            style("Try `aura chat` or `aura browse`.").dim()
        );
        println!();
    }

    Ok(())
}

/// Toggle between the sign-in and sign-up forms.
fn choose_view(default: AuthView) -> Result<AuthView> {
    let items = ["Sign in", "Create account"];
    let default_idx = match default {
        AuthView::SignIn => 0,
        AuthView::SignUp => 1,
    };
    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Aura")
        .items(&items)
        .default(default_idx)
        .interact()?;
    Ok(if idx == 0 {
        AuthView::SignIn
    } else {
        AuthView::SignUp
    })
}

/// Prompt the form fields for `view`. Returns a name to greet with.
fn prompt_form(view: AuthView) -> Result<Option<String>> {
    let theme = ColorfulTheme::default();

    let name = match view {
        AuthView::SignUp => Some(
            Input::<String>::with_theme(&theme)
                .with_prompt("Name")
                .interact_text()?,
        ),
        AuthView::SignIn => None,
    };

    let email: String = Input::with_theme(&theme)
        .with_prompt("Email")
        .interact_text()?;

    // Read and discarded.
    let _ = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    Ok(name.filter(|n| !n.trim().is_empty()).or(Some(email)))
}

/// Clear the session flag.
pub async fn logout(state: &AppState, json: bool) -> Result<()> {
    let target = state.gate.logout().await?;

    if json {
        let result = serde_json::json!({
            "logged_in": false,
            "redirect": target.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!("  {} Signed out.", style("ok").green());
        println!();
    }

    Ok(())
}
