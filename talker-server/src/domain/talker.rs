use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::validation::{validate_age, validate_name, validate_talk};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talker {
    pub id: u64,
    pub name: String,
    pub age: u64,
    pub talk: Talk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talk {
    pub watched_at: String,
    pub rate: u8,
}

/// Fields of a talker that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTalker {
    pub name: String,
    pub age: u64,
    pub talk: Talk,
}

impl Talker {
    pub fn new(id: u64, fields: NewTalker) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            talk: fields.talk,
        }
    }

    /// Replaces every mutable field, keeping the id.
    pub fn apply(&mut self, fields: NewTalker) {
        self.name = fields.name;
        self.age = fields.age;
        self.talk = fields.talk;
    }
}

/// Request body of create and update. Every field is optional so a missing
/// field gets its own message instead of a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalkerDraft {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub talk: Option<TalkDraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkDraft {
    pub watched_at: Option<String>,
    pub rate: Option<i64>,
}

impl TalkerDraft {
    /// Checks name, age and talk in that order; the first failure is returned.
    pub fn validate(self) -> Result<NewTalker, DomainError> {
        validate_name(self.name.as_deref())?;
        validate_age(self.age)?;
        validate_talk(self.talk.as_ref())?;

        // Presence was checked above, so the defaults are never taken.
        let talk = self.talk.unwrap_or_default();
        Ok(NewTalker {
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or_default().unsigned_abs(),
            talk: Talk {
                watched_at: talk.watched_at.unwrap_or_default(),
                // range checked by validate_rate
                rate: talk.rate.unwrap_or_default() as u8,
            },
        })
    }
}
