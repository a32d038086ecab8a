use std::time::Duration;

/// Where the login form lives and how to recognize the pieces of the
/// follow workflow on the target site.
///
/// The defaults match the professional-network site the tool was built
/// for; every field can be overridden for other sites or for tests.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Login form URL.
    pub login_url: String,
    /// Substring of the post-login URL confirming the authenticated area.
    pub landing_marker: String,
    /// CSS selector for the username field.
    pub username_selector: String,
    /// CSS selector for the password field.
    pub password_selector: String,
    /// CSS selector for the follow control on a career page.
    pub follow_selector: String,
    /// Bound on waits for pages and elements to appear.
    pub element_timeout: Duration,
    /// Bound on the landing wait after the manual verification step.
    /// Much longer than `element_timeout` because a human completes the
    /// step on another device.
    pub two_factor_timeout: Duration,
    /// Bound on waiting for the control to reflect the following state
    /// after a click.
    pub settle_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            login_url: "https://www.linkedin.com/login".to_string(),
            landing_marker: "feed".to_string(),
            username_selector: "#username".to_string(),
            password_selector: "#password".to_string(),
            follow_selector: r#"button[aria-label*="Follow"]"#.to_string(),
            element_timeout: Duration::from_secs(10),
            two_factor_timeout: Duration::from_secs(60),
            settle_timeout: Duration::from_secs(2),
        }
    }
}

/// Bound on the post-login landing wait.
///
/// Manual verification happens on human time, so the two-factor path
/// gets the much longer bound.
pub fn landing_timeout(site: &SiteConfig, two_factor_enabled: bool) -> Duration {
    if two_factor_enabled {
        site.two_factor_timeout
    } else {
        site.element_timeout
    }
}

/// Whether the control's visible text calls for a click.
///
/// The guard that makes the follow operation idempotent: a control
/// already reading "Following" is left alone.
pub fn needs_activation(label: &str) -> bool {
    !label.contains("Following")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_yet_followed_label_needs_activation() {
        assert!(needs_activation("Follow"));
        assert!(needs_activation("Follow Acme Corp"));
        assert!(needs_activation(""));
    }

    #[test]
    fn test_following_label_is_left_alone() {
        assert!(!needs_activation("Following"));
        assert!(!needs_activation("✓ Following"));
        assert!(!needs_activation("Following Acme Corp"));
    }

    #[test]
    fn test_default_two_factor_bound_exceeds_element_bound() {
        let site = SiteConfig::default();
        assert!(site.two_factor_timeout > site.element_timeout);
    }

    #[test]
    fn test_landing_timeout_picks_the_bound_for_the_login_path() {
        let site = SiteConfig::default();
        assert_eq!(landing_timeout(&site, false), site.element_timeout);
        assert_eq!(landing_timeout(&site, true), site.two_factor_timeout);
    }
}
