use serde::{Deserialize, Deserializer, Serialize};

/// One user as returned by the users endpoint.
///
/// Nothing is validated, a field the upstream leaves out or sends as `null` just comes through empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UserRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(deserialize_with = "null_as_default")]
    pub company: Company,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(deserialize_with = "null_as_default")]
    pub suite: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub zipcode: String,
    ///not shown anywhere, kept so the record survives a round trip through a server fn
    pub geo: Option<Geo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Geo {
    #[serde(deserialize_with = "null_as_default")]
    pub lat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lng: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Company {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "catchPhrase", deserialize_with = "null_as_default")]
    pub catch_phrase: String,
    pub bs: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Users in the order the endpoint returned them.
pub type UserCollection = Vec<UserRecord>;

impl UserRecord {
    pub fn handle_line(&self) -> String {
        format!("{} (@{})", self.name, self.username)
    }

    pub fn address_line(&self) -> String {
        format!(
            "{}, {}, {}",
            self.address.suite, self.address.street, self.address.city
        )
    }

    pub fn zip_line(&self) -> String {
        format!("Zip: {}", self.address.zipcode)
    }
}

impl Company {
    pub fn quoted_catch_phrase(&self) -> String {
        format!("\"{}\"", self.catch_phrase)
    }
}
