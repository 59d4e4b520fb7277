use serde::{Deserialize, Serialize};

/// Closed classification of a contact's role, derived from their title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Superintendent,
    SafetyDirector,
    Coo,
    Other,
}

impl Persona {
    /// Classify a free-text job title.
    ///
    /// Case-insensitive substring match, first rule wins:
    /// superintendent, then safety/security/police, then coo/operations.
    pub fn from_title(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("superintendent") {
            Persona::Superintendent
        } else if ["safety", "security", "police"]
            .iter()
            .any(|kw| title.contains(kw))
        {
            Persona::SafetyDirector
        } else if ["coo", "operations"].iter().any(|kw| title.contains(kw)) {
            Persona::Coo
        } else {
            Persona::Other
        }
    }

    /// The wire/CSV string for this persona.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Superintendent => "superintendent",
            Persona::SafetyDirector => "safety_director",
            Persona::Coo => "coo",
            Persona::Other => "other",
        }
    }
}

/// One person at a district, with whatever contact channels enrichment found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub persona: Persona,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
}

/// A person stub as returned by the people-search capability, before
/// contact channels are attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonStub {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
}

/// Contact channels returned by the enrichment capability. Any may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactChannels {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superintendent_titles() {
        assert_eq!(
            Persona::from_title("Superintendent of Schools"),
            Persona::Superintendent
        );
        assert_eq!(
            Persona::from_title("Assistant Superintendent"),
            Persona::Superintendent
        );
    }

    #[test]
    fn test_safety_titles() {
        assert_eq!(Persona::from_title("Chief of Police"), Persona::SafetyDirector);
        assert_eq!(
            Persona::from_title("Director of Student Safety"),
            Persona::SafetyDirector
        );
        assert_eq!(
            Persona::from_title("Chief of Safety & Security"),
            Persona::SafetyDirector
        );
    }

    #[test]
    fn test_operations_titles() {
        assert_eq!(Persona::from_title("Chief Operations Officer"), Persona::Coo);
        assert_eq!(Persona::from_title("COO"), Persona::Coo);
    }

    #[test]
    fn test_other_titles() {
        assert_eq!(Persona::from_title("Executive Assistant"), Persona::Other);
    }

    #[test]
    fn test_first_rule_wins() {
        // "Superintendent of Operations" matches the superintendent rule
        // before the operations rule.
        assert_eq!(
            Persona::from_title("Superintendent of Operations"),
            Persona::Superintendent
        );
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&Persona::SafetyDirector).unwrap();
        assert_eq!(json, "\"safety_director\"");
    }
}
