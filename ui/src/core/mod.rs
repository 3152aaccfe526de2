//! Platform-agnostic state and decisions behind the navigation chrome.

pub mod config;
pub mod layout;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod store;
pub mod theme;
pub mod viewport;
