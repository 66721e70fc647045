use thiserror::Error;

use crate::model::{AppData, EntityId, Message, Space};

/// Label for a participant id that doesn't resolve in the people table.
/// Titles degrade instead of failing; authors are held to a stricter
/// standard (see [`author_display_name`]).
pub const UNKNOWN_NAME: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("author {0} is not in the people table")]
pub struct UnknownAuthor(pub EntityId);

/// What a space is called from where the viewer sits: everyone else's
/// name, joined with ", " in participant order. A space the viewer has to
/// themselves gets the empty string.
pub fn title_for_viewer(data: &AppData, space: &Space, viewer: EntityId) -> String {
    space
        .participants
        .iter()
        .filter(|&&id| id != viewer)
        .map(|&id| data.person(id).map_or(UNKNOWN_NAME, |p| p.name.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maximal runs of consecutive messages by one author, in order. Runs are
/// subslices of the input; none is ever empty, so an empty thread yields
/// no runs at all.
pub fn message_runs(messages: &[Message]) -> Vec<&[Message]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..messages.len() {
        if messages[i].author != messages[i - 1].author {
            runs.push(&messages[start..i]);
            start = i;
        }
    }
    if start < messages.len() {
        runs.push(&messages[start..]);
    }
    runs
}

/// The name to show against a message: "You" for the viewer's own, the
/// person's name otherwise. A dangling author id is an error rather than
/// a sentinel; author references are expected to resolve.
pub fn author_display_name(
    data: &AppData,
    author: EntityId,
    viewer: EntityId,
) -> Result<String, UnknownAuthor> {
    if author == viewer {
        return Ok("You".to_owned());
    }
    data.person(author)
        .map(|p| p.name.clone())
        .ok_or(UnknownAuthor(author))
}
