use serde::{Deserialize, Serialize};

/// One of the four fixed priority buckets of the matrix. The kebab-case
/// key doubles as the serde wire form and as the drop-target identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Quadrant {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    // default = the lowest-priority bucket new tasks land in
    #[default]
    NotUrgentNotImportant,
}

impl Quadrant {
    /// Fixed render order of the 2x2 grid.
    pub fn all() -> [Self; 4] {
        [
            Self::UrgentImportant,
            Self::NotUrgentImportant,
            Self::UrgentNotImportant,
            Self::NotUrgentNotImportant,
        ]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::UrgentImportant => "urgent-important",
            Self::NotUrgentImportant => "not-urgent-important",
            Self::UrgentNotImportant => "urgent-not-important",
            Self::NotUrgentNotImportant => "not-urgent-not-important",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "urgent-important" => Some(Self::UrgentImportant),
            "not-urgent-important" => Some(Self::NotUrgentImportant),
            "urgent-not-important" => Some(Self::UrgentNotImportant),
            "not-urgent-not-important" => Some(Self::NotUrgentNotImportant),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::UrgentImportant => "Do First",
            Self::NotUrgentImportant => "Schedule",
            Self::UrgentNotImportant => "Delegate",
            Self::NotUrgentNotImportant => "Eliminate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::UrgentImportant => "Urgent & Important",
            Self::NotUrgentImportant => "Important, Not Urgent",
            Self::UrgentNotImportant => "Urgent, Not Important",
            Self::NotUrgentNotImportant => "Not Urgent, Not Important",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::UrgentImportant => "accent-red",
            Self::NotUrgentImportant => "accent-yellow",
            Self::UrgentNotImportant => "accent-blue",
            Self::NotUrgentNotImportant => "accent-gray",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Quadrant;

    #[test]
    fn keys_round_trip_through_the_catalog() {
        for quadrant in Quadrant::all() {
            assert_eq!(Quadrant::from_key(quadrant.as_key()), Some(quadrant));
        }
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert_eq!(Quadrant::from_key(""), None);
        assert_eq!(Quadrant::from_key("urgent"), None);
        assert_eq!(Quadrant::from_key("Urgent-Important"), None);
    }

    #[test]
    fn serde_wire_form_matches_the_key() {
        let encoded =
            serde_json::to_string(&Quadrant::UrgentImportant).expect("serialize quadrant");
        assert_eq!(encoded, "\"urgent-important\"");

        let decoded: Quadrant =
            serde_json::from_str("\"not-urgent-not-important\"").expect("deserialize quadrant");
        assert_eq!(decoded, Quadrant::NotUrgentNotImportant);
    }

    #[test]
    fn new_tasks_default_to_the_lowest_priority_bucket() {
        assert_eq!(Quadrant::default(), Quadrant::NotUrgentNotImportant);
    }
}
