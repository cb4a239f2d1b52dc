use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A registered user record. `id` and `creation_timestamp` are assigned
/// server-side and never change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub dob: String,
    #[serde(rename = "phonenumber")]
    pub phone_number: i64,
    #[serde(rename = "emailaddress")]
    pub email_address: String,
    #[serde(rename = "creationtimestamp")]
    pub creation_timestamp: String,
}

/// Client-settable fields of a user. Absent fields fall back to their zero
/// value; a client-supplied `id` or `creationtimestamp` is ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: String,
    pub dob: String,
    #[serde(rename = "phonenumber")]
    pub phone_number: i64,
    #[serde(rename = "emailaddress")]
    pub email_address: String,
}

/// Materialize a full record from a create payload and an assigned id,
/// stamping the creation time.
pub fn from_payload(id: String, payload: NewUser) -> User {
    User {
        id,
        name: payload.name,
        dob: payload.dob,
        phone_number: payload.phone_number,
        email_address: payload.email_address,
        creation_timestamp: Utc::now().to_rfc3339(),
    }
}
