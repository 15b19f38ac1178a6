//! Rendered-page fetching through a headless Chrome instance.
//!
//! `headless_chrome` is synchronous, so each fetch runs on the blocking pool.
//! A fresh browser is launched per page and torn down when it drops.

use std::time::Duration;

use headless_chrome::{Browser, LaunchOptions};

use crate::error::ScraperError;

/// Launch settings shared by every rendered fetch.
#[derive(Debug, Clone)]
pub struct BrowserFetcher {
    user_agent: String,
    timeout: Duration,
}

impl BrowserFetcher {
    #[must_use]
    pub fn new(user_agent: &str, timeout_secs: u64) -> Self {
        Self {
            user_agent: user_agent.to_owned(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Navigates to `url`, waits until `ready_selector` is present, and
    /// returns the rendered document HTML.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Browser`] if Chrome cannot be launched, the
    /// navigation fails, or the selector does not appear within the timeout.
    pub async fn fetch_rendered(
        &self,
        url: &str,
        ready_selector: &'static str,
    ) -> Result<String, ScraperError> {
        let fetcher = self.clone();
        let target = url.to_owned();
        tokio::task::spawn_blocking(move || fetcher.render_blocking(&target, ready_selector))
            .await
            .map_err(|e| browser_error(url, e))?
    }

    fn render_blocking(&self, url: &str, ready_selector: &str) -> Result<String, ScraperError> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .idle_browser_timeout(self.timeout)
            .build()
            .map_err(|e| browser_error(url, e))?;

        let browser = Browser::new(options).map_err(|e| browser_error(url, e))?;
        let tab = browser.new_tab().map_err(|e| browser_error(url, e))?;
        tab.set_user_agent(&self.user_agent, None, None)
            .map_err(|e| browser_error(url, e))?;
        tab.navigate_to(url).map_err(|e| browser_error(url, e))?;
        tab.wait_until_navigated()
            .map_err(|e| browser_error(url, e))?;
        tab.wait_for_element_with_custom_timeout(ready_selector, self.timeout)
            .map_err(|e| browser_error(url, e))?;
        let html = tab.get_content().map_err(|e| browser_error(url, e))?;

        tracing::debug!(url, bytes = html.len(), "rendered page captured");
        Ok(html)
    }
}

fn browser_error(url: &str, err: impl std::fmt::Display) -> ScraperError {
    ScraperError::Browser {
        url: url.to_owned(),
        reason: err.to_string(),
    }
}
