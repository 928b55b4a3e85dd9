use serde::{Deserialize, Serialize};

/// A user record as returned by the remote API.
///
/// Deserialization is tolerant: any missing field falls back to its default,
/// and PascalCase field names (`Id`, `First_Name`, ...) are accepted too.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(alias = "Id")]
    pub id: i64,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "First_Name")]
    pub first_name: String,
    #[serde(alias = "Last_Name")]
    pub last_name: String,
    #[serde(alias = "Avatar", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Response wrapper `{ "data": ... }` shared by the single and list endpoints.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(alias = "Data")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
