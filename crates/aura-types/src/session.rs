//! Page and session-gate types.
//!
//! The gate is a presentation convenience: it decides which page to show
//! based on a locally persisted flag. It is not an access-control boundary.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Storage key holding the session flag.
pub const SESSION_FLAG_KEY: &str = "aura_logged_in";

/// The only value that reads as "logged in".
pub const SESSION_FLAG_VALUE: &str = "true";

/// A view of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Sign-in / sign-up view. The only unprotected page.
    Login,
    /// Main dashboard.
    Dashboard,
    /// Exercise carousel.
    Workouts,
    /// Coach chat.
    Coach,
}

impl Page {
    /// Page that login/signup navigate to.
    pub const MAIN: Page = Page::Dashboard;

    pub fn is_protected(self) -> bool {
        !matches!(self, Page::Login)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Login => write!(f, "login"),
            Page::Dashboard => write!(f, "dashboard"),
            Page::Workouts => write!(f, "workouts"),
            Page::Coach => write!(f, "coach"),
        }
    }
}

/// Outcome of checking the gate on page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Continue initializing the requested page.
    Proceed,
    /// Navigate elsewhere and skip the requested page's initialization.
    Redirect(Page),
}
