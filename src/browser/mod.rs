//! Browser session management and launch configuration

pub mod config;
pub mod session;

pub use config::{DEFAULT_USER_AGENT, LaunchOptions};
pub use session::BrowserSession;
