use serde::{Deserialize, Serialize};

/// Team row from the teams table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub location: String,
}

/// Body of a create request.
///
/// Both fields are optional at the type level so that a missing field reaches
/// the store as NULL and trips its NOT NULL constraint. The HTTP layer rejects
/// missing fields before that happens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTeam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewTeam {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            location: Some(location.into()),
        }
    }

    /// True when both fields are present and non-empty
    pub fn is_complete(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.name) && present(&self.location)
    }
}

/// Partial update; absent (or null) fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl TeamChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }

    /// True when a supplied field is an empty string
    pub fn has_blank_field(&self) -> bool {
        [&self.name, &self.location]
            .into_iter()
            .any(|field| field.as_deref() == Some(""))
    }
}

// Response bodies

#[derive(Debug, Serialize)]
pub struct ApiStatus {
    pub api: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedTeam {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct RowCount {
    pub count: u64,
}
