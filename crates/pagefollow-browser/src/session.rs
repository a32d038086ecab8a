use crate::site::{SiteConfig, landing_timeout, needs_activation};
use crate::{Error, Result};
use async_trait::async_trait;
use chromiumoxide::Page;
use chromiumoxide::browser::Browser;
use chromiumoxide::element::Element;
use futures::StreamExt;
use pagefollow_core::{ConfirmationGate, Credentials, FollowAction, FollowSession};
use std::process::Child;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use url::Url;

const CONNECT_RETRIES: u32 = 5;
const POLL_INTERVAL: Duration = Duration::from_millis(250);

const TWO_FACTOR_PROMPT: &str =
    "Complete the verification step on your device, then confirm to continue";

/// One live Chrome DevTools Protocol session.
///
/// Owns the Chrome child process and the CDP connection; both are torn
/// down together when the session closes. All site interaction for a
/// batch goes through the single page held here.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    chrome: Option<Child>,
    handler_task: JoinHandle<()>,
    gate: Arc<dyn ConfirmationGate>,
    site: SiteConfig,
}

impl BrowserSession {
    /// Connect to a freshly launched Chrome process.
    ///
    /// Retries the CDP connection a bounded number of times since Chrome
    /// takes a moment to open its debugging port. On failure the child
    /// process is killed before the error is returned.
    pub async fn connect(
        mut chrome: Child,
        debugging_port: u16,
        site: SiteConfig,
        gate: Arc<dyn ConfirmationGate>,
    ) -> Result<Self> {
        match Self::connect_cdp(debugging_port).await {
            Ok((browser, page, handler_task)) => Ok(Self {
                browser,
                page,
                chrome: Some(chrome),
                handler_task,
                gate,
                site,
            }),
            Err(e) => {
                let _ = chrome.kill();
                let _ = chrome.wait();
                Err(e)
            }
        }
    }

    async fn connect_cdp(debugging_port: u16) -> Result<(Browser, Page, JoinHandle<()>)> {
        let cdp_url = format!("http://localhost:{}", debugging_port);
        tracing::info!("Connecting to Chrome on port {}", debugging_port);

        let (browser, mut handler) = {
            let mut retries = CONNECT_RETRIES;
            loop {
                tracing::debug!("Attempting CDP connection to {}...", cdp_url);
                match Browser::connect(&cdp_url).await {
                    Ok(result) => {
                        tracing::debug!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        retries -= 1;
                        if retries == 0 {
                            return Err(Error::Cdp(format!(
                                "Failed to connect to Chrome after {} attempts: {}",
                                CONNECT_RETRIES, e
                            )));
                        }
                        tracing::debug!(
                            "CDP connection attempt failed, retrying... ({} left)",
                            retries
                        );
                        tokio::time::sleep(Duration::from_millis(500)).await;
                    }
                }
            }
        };

        // Must run for every subsequent CDP command to complete.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Give Chrome a moment to create its initial page.
        tokio::time::sleep(Duration::from_millis(500)).await;

        let page = match Self::initial_page(&browser).await {
            Ok(page) => page,
            Err(e) => {
                handler_task.abort();
                return Err(e);
            }
        };

        Ok((browser, page, handler_task))
    }

    async fn initial_page(browser: &Browser) -> Result<Page> {
        if let Some(page) = browser.pages().await?.first() {
            Ok(page.clone())
        } else {
            Ok(browser.new_page("about:blank").await?)
        }
    }

    /// Kill the Chrome process and drop the CDP connection. Safe to call
    /// more than once.
    pub async fn shutdown(&mut self) {
        if let Some(mut chrome) = self.chrome.take() {
            tracing::info!("Closing browser session");
            if let Err(e) = self.browser.close().await {
                tracing::debug!("CDP close failed, killing the process directly: {}", e);
            }
            self.handler_task.abort();
            let _ = chrome.kill();
            let _ = chrome.wait();
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<()> {
        tracing::info!("Navigating to login page");
        self.page.goto(self.site.login_url.as_str()).await?;

        let username = self
            .wait_for_element(&self.site.username_selector, self.site.element_timeout)
            .await?;
        username.click().await?;
        username.type_str(&credentials.username).await?;

        let password = self
            .page
            .find_element(self.site.password_selector.as_str())
            .await?;
        password.click().await?;
        password.type_str(&credentials.password).await?;
        password.press_key("Enter").await?;

        let landing_bound = verification_pause(
            self.gate.as_ref(),
            &self.site,
            credentials.two_factor_enabled,
        )
        .await?;
        self.wait_for_landing(landing_bound).await
    }

    /// Poll until the current URL shows the authenticated landing marker.
    async fn wait_for_landing(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(url) = self.page.url().await? {
                if url.contains(&self.site.landing_marker) {
                    tracing::info!("Login confirmed, landed at {}", url);
                    return Ok(());
                }
            }
            if Instant::now() >= deadline {
                return Err(Error::Timeout {
                    what: format!(
                        "authenticated landing URL containing \"{}\"",
                        self.site.landing_marker
                    ),
                    after: timeout,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    async fn follow_page(&self, raw_url: &str) -> Result<FollowAction> {
        let url = normalize_url(raw_url)?;
        self.page.goto(url.as_str()).await?;
        self.wait_for_element("body", self.site.element_timeout)
            .await?;

        let control = self
            .wait_for_element(&self.site.follow_selector, self.site.element_timeout)
            .await?;
        let label = control.inner_text().await?.unwrap_or_default();

        if !needs_activation(&label) {
            return Ok(FollowAction::AlreadyFollowing);
        }

        control.click().await?;
        self.wait_for_settle().await;
        Ok(FollowAction::Activated)
    }

    /// Poll for an element until it exists or the bound elapses.
    async fn wait_for_element(&self, selector: &str, timeout: Duration) -> Result<Element> {
        let deadline = Instant::now() + timeout;
        loop {
            match self.page.find_element(selector).await {
                Ok(element) => return Ok(element),
                Err(_) if Instant::now() < deadline => {
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
                Err(_) => {
                    return Err(Error::Timeout {
                        what: format!("element matching {}", selector),
                        after: timeout,
                    });
                }
            }
        }
    }

    /// The page flips the control text asynchronously after a click.
    /// Poll until it reads as following, or give up at the settle bound;
    /// the click already went through either way, so this never fails
    /// the item.
    async fn wait_for_settle(&self) {
        let deadline = Instant::now() + self.site.settle_timeout;
        while Instant::now() < deadline {
            if let Ok(control) = self.page.find_element(self.site.follow_selector.as_str()).await
            {
                if let Ok(Some(label)) = control.inner_text().await {
                    if !needs_activation(&label) {
                        return;
                    }
                }
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        tracing::debug!(
            "Follow state did not settle within {:?}",
            self.site.settle_timeout
        );
    }
}

#[async_trait]
impl FollowSession for BrowserSession {
    async fn authenticate(&mut self, credentials: &Credentials) -> pagefollow_core::Result<()> {
        self.login(credentials)
            .await
            .map_err(|e| pagefollow_core::Error::Auth(e.to_string()))
    }

    async fn follow(&mut self, url: &str) -> pagefollow_core::Result<FollowAction> {
        self.follow_page(url)
            .await
            .map_err(|e| pagefollow_core::Error::Page {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn close(&mut self) {
        self.shutdown().await;
    }
}

/// The human verification step between form submit and the landing wait.
///
/// When two-factor is enabled, blocks on the confirmation gate and fails
/// the login if the user declines; the landing bound it hands back is
/// only available once the pause has completed, so the gate always fires
/// before the landing poll starts.
async fn verification_pause(
    gate: &dyn ConfirmationGate,
    site: &SiteConfig,
    two_factor_enabled: bool,
) -> Result<Duration> {
    if two_factor_enabled {
        tracing::info!("Waiting for manual verification to complete");
        if !gate.confirm(TWO_FACTOR_PROMPT).await {
            return Err(Error::Browser(
                "verification step was not confirmed".to_string(),
            ));
        }
    }
    Ok(landing_timeout(site, two_factor_enabled))
}

/// Validate a target URL, defaulting the scheme to https when absent.
fn normalize_url(raw: &str) -> Result<Url> {
    let candidate = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    Url::parse(&candidate).map_err(|e| Error::Browser(format!("invalid URL {:?}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingGate {
        calls: AtomicUsize,
        answer: bool,
    }

    impl RecordingGate {
        fn answering(answer: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                answer,
            }
        }
    }

    #[async_trait]
    impl ConfirmationGate for RecordingGate {
        async fn confirm(&self, _prompt: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
        }
    }

    #[tokio::test]
    async fn test_two_factor_login_fires_gate_once_then_uses_long_bound() {
        let gate = RecordingGate::answering(true);
        let site = SiteConfig::default();

        let bound = verification_pause(&gate, &site, true).await.unwrap();

        assert_eq!(gate.calls.load(Ordering::SeqCst), 1);
        assert_eq!(bound, site.two_factor_timeout);
    }

    #[tokio::test]
    async fn test_plain_login_never_invokes_gate_and_uses_short_bound() {
        let gate = RecordingGate::answering(true);
        let site = SiteConfig::default();

        let bound = verification_pause(&gate, &site, false).await.unwrap();

        assert_eq!(gate.calls.load(Ordering::SeqCst), 0);
        assert_eq!(bound, site.element_timeout);
    }

    #[tokio::test]
    async fn test_declined_verification_fails_the_login() {
        let gate = RecordingGate::answering(false);
        let site = SiteConfig::default();

        let result = verification_pause(&gate, &site, true).await;

        assert_eq!(gate.calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(Error::Browser(_))));
    }

    #[test]
    fn test_normalize_url_keeps_explicit_scheme() {
        let url = normalize_url("http://example.com/jobs").unwrap();
        assert_eq!(url.as_str(), "http://example.com/jobs");
    }

    #[test]
    fn test_normalize_url_defaults_to_https() {
        let url = normalize_url("example.com/jobs").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        assert!(normalize_url("https://").is_err());
    }

    // Login and follow flows need a running Chrome instance; the batch
    // semantics around them are covered against a scripted session in
    // pagefollow-core.
}
