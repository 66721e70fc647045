use std::collections::HashSet;

use parlor::model::{AppData, Space};
use parlor::{AppContext, fixture, spaces};
use uuid::Uuid;

const VIEWER: &str = "b6134024-fe83-11e9-a439-3b4373fd7cea";

fn space_ids(data: &AppData) -> Vec<Uuid> {
    data.spaces.iter().map(|s| s.entity_id).collect()
}

fn message_ids(space: &Space) -> Vec<Uuid> {
    space.messages.iter().map(|m| m.entity_id).collect()
}

#[test]
fn bundled_fixture_round_trips() {
    let data = fixture::load("spaces.json").expect("bundled fixture loads");
    let encoded = serde_json::to_vec(&data).expect("re-encode");
    let again = fixture::decode("spaces.json", &encoded).expect("re-decode");

    assert_eq!(data.revision, again.revision);

    let people: HashSet<Uuid> = data.people.keys().copied().collect();
    let people_again: HashSet<Uuid> = again.people.keys().copied().collect();
    assert_eq!(people, people_again);
    for (id, person) in &data.people {
        assert_eq!(&again.people[id], person);
    }

    assert_eq!(space_ids(&data), space_ids(&again));
    for (before, after) in data.spaces.iter().zip(&again.spaces) {
        assert_eq!(before.participants, after.participants);
        assert_eq!(before.unread_count, after.unread_count);
        assert_eq!(message_ids(before), message_ids(after));
    }
}

#[test]
fn bundled_fixture_bootstraps_for_the_viewer() {
    let viewer = Uuid::parse_str(VIEWER).unwrap();
    let ctx = AppContext::bootstrap("spaces.json", viewer).expect("bootstrap");

    assert!(ctx.data.spaces.len() >= 2);
    for space in &ctx.data.spaces {
        let title = ctx.space_title(space);
        if space.participants.iter().any(|&p| p != viewer) {
            assert!(!title.is_empty(), "space {} has no title", space.entity_id);
            assert!(!title.contains("unknown"), "unresolved participant in {title}");
        } else {
            assert_eq!(title, "");
        }
    }
}

#[test]
fn bundled_fixture_threads_group_and_resolve() {
    let viewer = Uuid::parse_str(VIEWER).unwrap();
    let ctx = AppContext::bootstrap("spaces.json", viewer).expect("bootstrap");

    for space in &ctx.data.spaces {
        let runs = spaces::message_runs(&space.messages);
        assert_eq!(
            runs.iter().map(|r| r.len()).sum::<usize>(),
            space.messages.len()
        );
        for run in runs {
            let author = run[0].author;
            assert!(run.iter().all(|m| m.author == author));
            // authors in the shipped fixture always resolve
            let name = ctx.author_display_name(author).expect("author resolves");
            if author == viewer {
                assert_eq!(name, "You");
            } else {
                assert!(!name.is_empty());
            }
        }
    }
}
