pub const SITE_NAME: &str = "Sentralyx";

/// Delay before a search box sends its query.
pub const SEARCH_DEBOUNCE_MS: u32 = 350;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Toasts beyond this are dropped, oldest first.
pub const MAX_TOASTS: usize = 5;

/// Refresh interval of an open ticket chat.
pub const TICKET_POLL_INTERVAL_MS: u32 = 5_000;
