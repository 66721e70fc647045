pub mod fixture;
pub mod model;
pub mod spaces;

use tracing::info;

use crate::model::{AppData, EntityId, Space};
use crate::spaces::UnknownAuthor;

pub type AppResult<T> = anyhow::Result<T>;

/// Everything the running app holds: the loaded store and the viewer
/// identity. Built once at startup and handed to whoever needs it; there
/// are no process-wide globals.
pub struct AppContext {
    pub data: AppData,
    pub viewer: EntityId,
}

impl AppContext {
    /// Load the fixture and check that every message author resolves in
    /// the people table. A dangling author means the fixture is broken,
    /// so bootstrap refuses it outright.
    pub fn bootstrap(resource: &str, viewer: EntityId) -> AppResult<Self> {
        let data = fixture::load(resource)?;
        check_authors(&data)?;
        info!(
            revision = data.revision,
            spaces = data.spaces.len(),
            "loaded fixture {}",
            resource
        );
        Ok(Self { data, viewer })
    }

    pub fn space_title(&self, space: &Space) -> String {
        spaces::title_for_viewer(&self.data, space, self.viewer)
    }

    pub fn author_display_name(&self, author: EntityId) -> Result<String, UnknownAuthor> {
        spaces::author_display_name(&self.data, author, self.viewer)
    }
}

fn check_authors(data: &AppData) -> AppResult<()> {
    for space in &data.spaces {
        for message in &space.messages {
            if data.person(message.author).is_none() {
                anyhow::bail!(
                    "message {} in space {} has unknown author {}",
                    message.entity_id,
                    space.entity_id,
                    message.author
                );
            }
        }
    }
    Ok(())
}
