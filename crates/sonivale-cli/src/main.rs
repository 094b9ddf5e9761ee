//! Sonivale terminal player entry point.

use std::error::Error;
use std::io;

use sonivale_cli::config::Config;
use sonivale_cli::error::AppError;
use sonivale_cli::play::{play, select_storyline};
use sonivale_cli::render::{render_intro, render_storylines};
use sonivale_content::application::query_handlers::storyline_summary;
use sonivale_content::domain::repository::ContentRepository;
use sonivale_content_store::fs_content_repository::FsContentRepository;
use sonivale_core::clock::SystemClock;
use sonivale_core::error::DomainError;
use sonivale_narrative::domain::aggregates::StorylinePlayer;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so they stay out of the story text.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .json()
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;
    tracing::info!(content_path = %config.content_path.display(), "Starting Sonivale player");

    let repo = FsContentRepository::new(&config.content_path);
    let catalog = repo.load_catalog().await?;
    let storyline = match select_storyline(&catalog, config.storyline_id.as_deref()) {
        Ok(storyline) => storyline,
        Err(err @ AppError::Domain(DomainError::StorylineNotFound(_))) => {
            render_storylines(&catalog, &mut io::stderr().lock())?;
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    let session_id = Uuid::new_v4();
    tracing::info!(%session_id, storyline_id = %storyline.id, "session started");

    let mut player = StorylinePlayer::new(session_id, storyline);
    let mut stdout = io::stdout().lock();
    render_intro(&storyline_summary(storyline), &mut stdout)?;
    let summary = play(
        &mut player,
        &catalog,
        &SystemClock,
        io::stdin().lock(),
        &mut stdout,
    )?;

    tracing::info!(
        %session_id,
        completed = summary.completed,
        events = summary.events,
        "session ended"
    );

    Ok(())
}
