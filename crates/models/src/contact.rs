use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A record that two users were in contact at a point in time.
///
/// Keyed by a generated sequence id rather than by `time_of_contact`, so two
/// contacts created within the same clock tick can never overwrite each
/// other. Neither user id is validated against the user store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    #[serde(rename = "useridone")]
    pub user_id_one: String,
    #[serde(rename = "useridtwo")]
    pub user_id_two: String,
    #[serde(rename = "timeofcontact")]
    pub time_of_contact: String,
}

/// Client-settable fields of a contact. `timeofcontact` is always stamped
/// server-side.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContact {
    #[serde(rename = "useridone")]
    pub user_id_one: String,
    #[serde(rename = "useridtwo")]
    pub user_id_two: String,
}

/// Materialize a full record from a create payload and an assigned id,
/// stamping the contact time.
pub fn from_payload(id: String, payload: NewContact) -> Contact {
    Contact {
        id,
        user_id_one: payload.user_id_one,
        user_id_two: payload.user_id_two,
        time_of_contact: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_are_stable() -> Result<(), anyhow::Error> {
        let c = from_payload(
            "7".into(),
            NewContact { user_id_one: "1".into(), user_id_two: "2".into() },
        );
        let v = serde_json::to_value(&c)?;
        assert_eq!(v["useridone"], "1");
        assert_eq!(v["useridtwo"], "2");
        assert!(v["timeofcontact"].as_str().is_some_and(|t| !t.is_empty()));
        Ok(())
    }

    #[test]
    fn client_cannot_set_time_of_contact() -> Result<(), anyhow::Error> {
        let p: NewContact =
            serde_json::from_str(r#"{"useridone":"1","useridtwo":"2","timeofcontact":"1970"}"#)?;
        let c = from_payload("1".into(), p);
        assert_ne!(c.time_of_contact, "1970");
        Ok(())
    }
}
