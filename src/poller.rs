use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::message::format_message;
use crate::profile::Profile;
use crate::reddit::{self, Post};
use crate::{publisher, state};

/// What a run decided to do: persist this permalink and send this message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub permalink: String,
    pub message: String,
}

/// Dedupe decision as a pure function of the previous marker and the fetched
/// post, so the flow is testable without a feed or a dfx binary. Returns
/// `None` when the top post has already been announced.
pub fn plan(last_seen: Option<&str>, post: &Post, profile: Profile) -> Option<Notification> {
    if last_seen == Some(post.permalink.as_str()) {
        return None;
    }
    Some(Notification {
        permalink: post.permalink.clone(),
        message: format_message(profile, post),
    })
}

/// One cron run: fetch, dedupe, persist, publish. The permalink is persisted
/// before publishing and is not rolled back if dfx fails, so a post that
/// failed to go out is not re-announced on the next tick.
pub async fn run(config: &Config) -> Result<()> {
    let post = reddit::fetch_top_post().await?;
    let last_seen = state::load(&config.state_file);

    let Some(notification) = plan(last_seen.as_deref(), &post, config.profile) else {
        info!("top post unchanged ({}), nothing to do", post.permalink);
        return Ok(());
    };

    state::store(&config.state_file, &notification.permalink)?;
    publisher::publish(config.profile, &notification.message).await?;
    info!("announced {}", notification.permalink);
    Ok(())
}
