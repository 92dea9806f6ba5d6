use serde::{Deserialize, Deserializer, Serialize};

/// Body of a user creation request
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserInput {
    pub username: String,
}

impl UserInput {
    pub fn new(username: impl Into<String>) -> Self {
        UserInput {
            username: username.into(),
        }
    }
}

/// A user as stored by the remote API
///
/// The server emits the id as `_id` (an integer); plain `id` and string ids
/// are accepted too. Ids stay opaque on this side.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id", deserialize_with = "opaque_id")]
    pub id: String,
    pub username: String,
}

impl User {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        User {
            id: id.into(),
            username: username.into(),
        }
    }
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Body of an exercise creation request
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInput {
    pub user_id: String,
    pub description: String,
    pub duration: u32,
    /// `YYYY-MM-DD`; the server uses today when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// The three request/response flows driven from the UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    CreateUser,
    ListUsers,
    CreateExercise,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::CreateUser => "create-user",
            Flow::ListUsers => "list-users",
            Flow::CreateExercise => "create-exercise",
        }
    }
}

/// Kind of a popup notice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A dismissable popup message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Notice {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_numeric_id_becomes_string() {
        let user: User = serde_json::from_str(r#"{"_id": 42, "username": "alice"}"#).unwrap();
        assert_eq!(user, User::new("42", "alice"));
    }

    #[test]
    fn test_user_accepts_plain_id_and_extra_fields() {
        let user: User =
            serde_json::from_str(r#"{"id": "abc", "username": "bob", "count": 3}"#).unwrap();
        assert_eq!(user.id, "abc");
        assert_eq!(user.username, "bob");
    }

    #[test]
    fn test_exercise_input_wire_shape() {
        let input = ExerciseInput {
            user_id: "7".into(),
            description: "run".into(),
            duration: 30,
            date: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"userId": "7", "description": "run", "duration": 30})
        );
    }
}
