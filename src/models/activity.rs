use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One extracurricular offering.
///
/// `name` is the catalog key, so it is left out of the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    // Advisory only; signups are not rejected once this is reached.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.participants.len() > self.max_participants as usize
    }
}

/// Snapshot of every activity in seed order.
///
/// Serializes as a JSON object keyed by activity name, keys in seed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog(pub Vec<Activity>);

impl Catalog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| a.name.as_str())
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}
