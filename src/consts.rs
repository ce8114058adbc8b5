//! Shared timing and endpoint constants.

// ── Notifications ───────────────────────────────────────────────

/// How long a toast stays fully visible before its exit transition.
pub const NOTIFICATION_DISPLAY_MS: u64 = 3000;

/// Length of the exit transition; the element is removed when it ends.
pub const NOTIFICATION_EXIT_MS: u64 = 300;

// ── Session ─────────────────────────────────────────────────────

/// Endpoint answering with the signed-in user.
pub const CURRENT_USER_ENDPOINT: &str = "/api/users/me";

/// Endpoint terminating the cookie session.
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

/// Where the page goes after a successful logout.
pub const LOGOUT_REDIRECT: &str = "/";

/// Delay between the logout toast and the redirect.
pub const LOGOUT_REDIRECT_DELAY_MS: u64 = 1000;

// ── Forms ───────────────────────────────────────────────────────

/// How long a submit button stays busy after its form is submitted.
pub const SUBMIT_RESTORE_MS: u64 = 2000;

// ── Requests ────────────────────────────────────────────────────

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
