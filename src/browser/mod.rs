use anyhow::{Context, Result};

/// The platform navigation primitive: given a URL, replace the current view
/// with it. The real implementation opens the system browser; tests record
/// the requested destination instead.
pub trait Navigator {
    fn go_to(&self, url: &str) -> Result<()>;
}

/// Opens URLs in the user's default browser.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn go_to(&self, url: &str) -> Result<()> {
        open_url(url)
    }
}

/// Open a URL in the user's default browser
///
/// # Errors
/// Returns error if browser cannot be opened (e.g., no browser available)
pub fn open_url(url: &str) -> Result<()> {
    webbrowser::open(url)
        .with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(())
}
