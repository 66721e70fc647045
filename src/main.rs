use parlor::{AppContext, AppResult, spaces};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// The signed-in identity for this session. Fixed; there is no way to
/// switch viewers at runtime.
const VIEWER: &str = "b6134024-fe83-11e9-a439-3b4373fd7cea";

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "parlor=info".into()),
        )
        .init();

    let viewer = Uuid::parse_str(VIEWER)?;
    let ctx = AppContext::bootstrap("spaces.json", viewer)?;

    for space in &ctx.data.spaces {
        let runs = spaces::message_runs(&space.messages);
        info!(
            space = %space.entity_id,
            unread = space.unread_count,
            messages = space.messages.len(),
            runs = runs.len(),
            "{}",
            ctx.space_title(space)
        );
    }

    Ok(())
}
