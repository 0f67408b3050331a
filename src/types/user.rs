use serde::{Deserialize, Serialize};

/// A user record as served by the users endpoint.
///
/// Only the fields the card shows are kept; everything else in the payload
/// (`id`, `phone`, `geo`, ...) is ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    pub address: Option<Address>,
    pub company: Option<Company>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Address {
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona", "catchPhrase": "x", "bs": "y" }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.website, "hildegard.org");
        assert_eq!(user.address.unwrap().city, "Gwenborough");
        assert_eq!(user.company.unwrap().name, "Romaguera-Crona");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let user: User = serde_json::from_str(r#"{"name": "Solo"}"#).unwrap();
        assert_eq!(user.name, "Solo");
        assert_eq!(user.email, "");
        assert!(user.address.is_none());
        assert!(user.company.is_none());
    }

    #[test]
    fn test_null_address_is_none() {
        let user: User =
            serde_json::from_str(r#"{"name": "A", "address": null, "company": null}"#).unwrap();
        assert!(user.address.is_none());
        assert!(user.company.is_none());
    }
}
