use async_trait::async_trait;
use dialoguer::Confirm;
use pagefollow_core::ConfirmationGate;

/// Blocks the login flow on a terminal yes/no prompt until the user has
/// completed the out-of-band verification step.
pub struct TerminalGate;

#[async_trait]
impl ConfirmationGate for TerminalGate {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        // dialoguer blocks its thread; keep it off the runtime workers.
        tokio::task::spawn_blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(true)
                .interact()
                .unwrap_or(false)
        })
        .await
        .unwrap_or(false)
    }
}
