//! Router access as an injected capability.
//!
//! `ui` does not know any platform's `Route` enum; shells implement
//! [`Navigate`] on top of their own router and hand it to the navbar.

/// Path the brand label leads to.
pub const ROOT_PATH: &str = "/";

pub trait Navigate {
    /// Fire-and-forget navigation request.
    fn navigate_to(&self, path: &str);
}
