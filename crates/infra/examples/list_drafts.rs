//! Example: Listing draft posts and generating a follow-up
//!
//! Reads credentials from the environment (or an `aisocial.toml` next to the
//! working directory), walks every page of draft posts, then asks the AI
//! endpoint for a variation of the newest one.
//!
//! # Setup
//!
//! 1. Set credentials: ```bash export AISOCIAL_API_KEY=... ```
//!
//! 2. Optionally point at another deployment: ```bash export
//!    AISOCIAL_BASE_URL=http://localhost:8080 ```
//!
//! 3. Run this example: ```bash RUST_LOG=aisocial_infra=debug cargo run
//!    --example list_drafts ```

use std::sync::Arc;

use aisocial_domain::{AiGenerateRequest, ListPostsParams, PostStatus, Tone};
use aisocial_infra::{ApiClient, ApiCommands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let client = Arc::new(ApiClient::from_env()?);
    let commands = ApiCommands::new(client);

    let mut drafts = Vec::new();
    let mut params = ListPostsParams::default().status(PostStatus::Draft);
    loop {
        let page = commands.list_posts(&params).await?;
        let next = page.next_cursor().map(str::to_owned);
        drafts.extend(page.data);
        match next {
            Some(cursor) => params = params.cursor(cursor),
            None => break,
        }
    }
    tracing::info!(count = drafts.len(), "Fetched draft posts");

    let Some(latest) = drafts.first() else {
        tracing::info!("No drafts to work from");
        return Ok(());
    };

    let request = AiGenerateRequest::new(format!("Rewrite for a wider audience: {}", latest.content))
        .tone(Tone::Friendly)
        .platforms(latest.platforms.clone())
        .variations(2);

    match commands.generate_content(&request).await {
        Ok(generated) => tracing::info!(%generated, "Generated variations"),
        Err(err) if err.is_transport() => tracing::warn!(error = %err, "API unreachable"),
        Err(err) => tracing::warn!(status = err.status_code(), error = %err, "Generation failed"),
    }

    Ok(())
}
