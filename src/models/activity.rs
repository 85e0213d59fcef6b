use serde::ser::{Serialize, SerializeMap, Serializer};

// One extracurricular offering. `participants` keeps signup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Wire shape of a single activity; the name lives in the enclosing map key.
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityRecord {
    fn from(a: &Activity) -> Self {
        Self {
            description: a.description.clone(),
            schedule: a.schedule.clone(),
            max_participants: a.max_participants,
            participants: a.participants.clone(),
        }
    }
}

/// Owned snapshot of the directory. Serializes as a JSON object keyed by
/// activity name, in directory order.
#[derive(Debug, Clone, Default)]
pub struct ActivityList(pub Vec<Activity>);

impl ActivityList {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }
}

impl Serialize for ActivityList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, &ActivityRecord::from(activity))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("{} description", name),
            schedule: "Mondays".to_string(),
            max_participants: 5,
            participants: vec!["a@mergington.edu".to_string()],
        }
    }

    #[test]
    fn serializes_as_object_in_directory_order() {
        let list = ActivityList(vec![sample("Zither Club"), sample("Archery")]);
        let json = serde_json::to_string(&list).unwrap();

        let zither = json.find("Zither Club").unwrap();
        let archery = json.find("Archery").unwrap();
        assert!(zither < archery, "keys reordered: {}", json);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Archery"]["max_participants"], 5);
        assert_eq!(value["Archery"]["participants"][0], "a@mergington.edu");
        assert!(value["Archery"].get("name").is_none());
    }

    #[test]
    fn participant_lookup_is_exact() {
        let activity = sample("Archery");
        assert!(activity.has_participant("a@mergington.edu"));
        assert!(!activity.has_participant("A@mergington.edu"));
    }
}
