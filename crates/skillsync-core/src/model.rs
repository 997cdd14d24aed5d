//! Core data model types for skillsync.
//!
//! An [`Assessment`] is a skill-gap record: who, which skill, where they are
//! now and where they should get to. Field names on the wire are the
//! PascalCase keys the assessments endpoint stores.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Length of the random suffix in generated ids.
const ID_SUFFIX_LEN: usize = 9;

/// Opaque identifier of an assessment record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(String);

impl AssessmentId {
    /// Wrap an id received from the server or typed by the user.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh client-side id: `SA_<unix-millis>_<base36 suffix>`.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("SA_{millis}_{}", random_suffix()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssessmentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AssessmentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Lowercase base36 digits drawn from a v4 UUID.
fn random_suffix() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut n = uuid::Uuid::new_v4().as_u128();
    let mut out = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        out.push(ALPHABET[(n % 36) as usize] as char);
        n /= 36;
    }
    out
}

/// Proficiency level of an employee in a skill.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    /// A level string the client does not recognize, kept verbatim so that
    /// one odd server record never fails a whole list.
    Unknown(String),
}

impl SkillLevel {
    /// The four levels offered by the quick-add form, in ascending order.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
            SkillLevel::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SkillLevel::Unknown(_))
    }

    /// Lenient conversion used when decoding server data.
    fn from_wire(s: &str) -> Self {
        s.parse()
            .unwrap_or_else(|_| SkillLevel::Unknown(s.to_string()))
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            "expert" => Ok(SkillLevel::Expert),
            other => Err(format!(
                "unknown skill level: {other} (expected Beginner, Intermediate, Advanced or Expert)"
            )),
        }
    }
}

impl Serialize for SkillLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SkillLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let raw = scalar_text(value).map_err(D::Error::custom)?;
        Ok(SkillLevel::from_wire(&raw))
    }
}

/// Text of a JSON scalar: numbers and booleans are stringified, `null` is empty.
fn scalar_text(value: Value) -> Result<String, String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("expected a scalar, found {other}")),
    }
}

fn text_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    scalar_text(Value::deserialize(deserializer)?).map_err(D::Error::custom)
}

fn id_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AssessmentId, D::Error> {
    text_field(deserializer).map(AssessmentId)
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Unknown(String::new())
    }
}

/// A skill assessment record as stored by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "SkillAssessmentId", default, deserialize_with = "id_field")]
    pub id: AssessmentId,
    #[serde(rename = "Employee", default, deserialize_with = "text_field")]
    pub employee: String,
    #[serde(rename = "Skill", default, deserialize_with = "text_field")]
    pub skill: String,
    #[serde(rename = "Current", default)]
    pub current: SkillLevel,
    #[serde(rename = "Target", default)]
    pub target: SkillLevel,
}

/// Unvalidated input from the quick-add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentDraft {
    pub employee: String,
    pub skill: String,
    pub current: Option<SkillLevel>,
    pub target: Option<SkillLevel>,
}

impl AssessmentDraft {
    pub fn new(
        employee: impl Into<String>,
        skill: impl Into<String>,
        current: SkillLevel,
        target: SkillLevel,
    ) -> Self {
        Self {
            employee: employee.into(),
            skill: skill.into(),
            current: Some(current),
            target: Some(target),
        }
    }

    /// Check that all four required fields are filled in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.employee.trim().is_empty() {
            return Err(ValidationError::MissingField("Employee"));
        }
        if self.skill.trim().is_empty() {
            return Err(ValidationError::MissingField("Skill"));
        }
        match &self.current {
            None => return Err(ValidationError::MissingField("Current")),
            Some(level) if !level.is_known() => {
                return Err(ValidationError::InvalidLevel(level.to_string()))
            }
            Some(_) => {}
        }
        match &self.target {
            None => return Err(ValidationError::MissingField("Target")),
            Some(level) if !level.is_known() => {
                return Err(ValidationError::InvalidLevel(level.to_string()))
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Validate and turn the draft into a record with a fresh id.
    pub fn into_assessment(self) -> Result<Assessment, ValidationError> {
        self.into_assessment_with_id(AssessmentId::generate())
    }

    /// Validate and turn the draft into a record carrying `id`.
    ///
    /// Blank checks look at the trimmed text; the record keeps the values
    /// exactly as entered.
    pub fn into_assessment_with_id(self, id: AssessmentId) -> Result<Assessment, ValidationError> {
        self.validate()?;
        if id.is_empty() {
            return Err(ValidationError::MissingField("SkillAssessmentId"));
        }
        Ok(Assessment {
            id,
            employee: self.employee,
            skill: self.skill,
            current: self.current.unwrap_or_default(),
            target: self.target.unwrap_or_default(),
        })
    }
}
