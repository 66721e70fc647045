use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub type EntityId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub entity_id: EntityId,
    pub name: String,
}

/// `author` is an id into [`AppData::people`], not an embedded record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub entity_id: EntityId,
    pub author: EntityId,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
}

/// A conversation. `participants` and `messages` keep fixture order;
/// messages arrive pre-sorted chronologically and are never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub entity_id: EntityId,
    pub participants: Vec<EntityId>,
    pub unread_count: u32,
    pub messages: Vec<Message>,
}

/// Root store, built once by the loader and read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppData {
    pub revision: i64,
    #[serde(with = "people_table")]
    pub people: HashMap<EntityId, Person>,
    pub spaces: Vec<Space>,
}

impl AppData {
    pub fn person(&self, id: EntityId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn space(&self, id: EntityId) -> Option<&Space> {
        self.spaces.iter().find(|s| s.entity_id == id)
    }
}

/// `revision` is a version counter; two stores with the same revision hold
/// the same data, so equality is just the revision check.
impl PartialEq for AppData {
    fn eq(&self, other: &Self) -> bool {
        self.revision == other.revision
    }
}

impl Eq for AppData {}

/// On the wire `people` is an array of records; in memory it is keyed by
/// `entityId`. Duplicate ids in a fixture are a decode error.
mod people_table {
    use super::{EntityId, Person};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S>(people: &HashMap<EntityId, Person>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(people.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<EntityId, Person>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Person>::deserialize(deserializer)?;
        let mut people = HashMap::with_capacity(entries.len());
        for person in entries {
            let id = person.entity_id;
            if people.insert(id, person).is_some() {
                return Err(D::Error::custom(format!("duplicate person {id}")));
            }
        }
        Ok(people)
    }
}
