//! Wire format of the assessments endpoint.
//!
//! Every call is a POST of `{"operation": <op>, ...payload}` to one URL.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use skillsync_core::error::ApiError;
use skillsync_core::model::{Assessment, AssessmentId};

/// The `operation` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::List => write!(f, "list"),
            Operation::Read => write!(f, "read"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// One request to the endpoint.
#[derive(Debug, Clone, Copy)]
pub enum Request<'a> {
    List,
    Read(&'a AssessmentId),
    Create(&'a Assessment),
    Update(&'a Assessment),
    Delete(&'a AssessmentId),
}

impl<'a> Request<'a> {
    pub fn operation(&self) -> Operation {
        match self {
            Request::List => Operation::List,
            Request::Read(_) => Operation::Read,
            Request::Create(_) => Operation::Create,
            Request::Update(_) => Operation::Update,
            Request::Delete(_) => Operation::Delete,
        }
    }

    /// The request body, ready to serialize.
    pub fn envelope(&self) -> Envelope<'a> {
        let payload = match *self {
            Request::List => None,
            Request::Read(id) | Request::Delete(id) => Some(Payload::Id { id }),
            Request::Create(record) | Request::Update(record) => Some(Payload::Record(record)),
        };
        Envelope {
            operation: self.operation(),
            payload,
        }
    }
}

/// `{"operation": ..., ...payload}` with the payload fields merged in.
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub operation: Operation,
    #[serde(flatten)]
    payload: Option<Payload<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Payload<'a> {
    Id {
        #[serde(rename = "SkillAssessmentId")]
        id: &'a AssessmentId,
    },
    Record(&'a Assessment),
}

/// Key under which the endpoint wraps `list` results.
const LIST_KEY: &str = "Skill-Assessments";

/// `list` replies either with a bare array or wrapped in a `Skill-Assessments` object.
pub fn decode_list(body: Value) -> Result<Vec<Assessment>, ApiError> {
    let items = match body {
        Value::Array(_) => body,
        Value::Object(mut map) => map.remove(LIST_KEY).ok_or_else(|| {
            ApiError::Decode(format!(
                "expected an array of assessments or a \"{LIST_KEY}\" object, found keys {:?}",
                map.keys().collect::<Vec<_>>()
            ))
        })?,
        other => {
            return Err(ApiError::Decode(format!(
                "expected an array of assessments or a \"{LIST_KEY}\" object, found {other}"
            )))
        }
    };
    serde_json::from_value(items).map_err(|e| ApiError::Decode(format!("invalid assessment list: {e}")))
}

/// An empty object is how the endpoint says "no such record".
pub fn decode_read(body: Value) -> Result<Option<Assessment>, ApiError> {
    match &body {
        Value::Null => return Ok(None),
        Value::Object(map) if map.is_empty() => return Ok(None),
        _ => {}
    }
    serde_json::from_value(body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
