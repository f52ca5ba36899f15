use std::path::PathBuf;
use std::time::Duration;

/// Desktop Chrome user agent sent instead of the HeadlessChrome default
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Options for launching a Chrome/Chromium instance
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Run without a visible window
    pub headless: bool,

    /// Viewport width in pixels
    pub window_width: u32,

    /// Viewport height in pixels
    pub window_height: u32,

    /// Explicit browser binary; when unset the default executable lookup is used
    pub chrome_path: Option<PathBuf>,

    /// Chrome user data directory
    pub user_data_dir: Option<PathBuf>,

    /// Enable the Chrome sandbox (off by default, as in containers it usually cannot start)
    pub sandbox: bool,

    /// User agent override applied through the DevTools protocol
    pub user_agent: Option<String>,

    /// Extra command line flags appended after the stealth flags
    pub extra_args: Vec<String>,

    /// How long the browser may sit idle before headless_chrome shuts it down
    pub idle_timeout: Duration,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            chrome_path: None,
            user_data_dir: None,
            sandbox: false,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            extra_args: Vec::new(),
            idle_timeout: Duration::from_secs(5 * 60),
        }
    }
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    pub fn user_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.user_data_dir = Some(dir.into());
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Override the user agent, or pass `None` to keep Chrome's own
    pub fn user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_desktop_profile() {
        let opts = LaunchOptions::default();

        assert!(opts.headless);
        assert!(!opts.sandbox);
        assert_eq!((opts.window_width, opts.window_height), (1920, 1080));
        assert_eq!(opts.user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
        assert!(opts.chrome_path.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let opts = LaunchOptions::new()
            .headless(false)
            .window_size(800, 600)
            .chrome_path("/usr/bin/chromium")
            .user_agent(None)
            .arg("--lang=en-US");

        assert!(!opts.headless);
        assert_eq!(opts.window_width, 800);
        assert_eq!(opts.window_height, 600);
        assert_eq!(opts.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
        assert!(opts.user_agent.is_none());
        assert_eq!(opts.extra_args, vec!["--lang=en-US".to_string()]);
    }
}
