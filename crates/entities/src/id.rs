//! Numeric id coercion for store records.
//!
//! The data store assigns numeric ids but is loose about how it renders them:
//! records created through different paths come back with either a JSON
//! number or a numeric string. All entity ids deserialize through these
//! helpers so the rest of the client only ever sees `u64`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn coerce<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            RawId::Number(n) => Ok(n),
            RawId::Text(s) => s
                .parse()
                .map_err(|_| E::custom(format!("invalid numeric id: {s:?}"))),
        }
    }
}

/// Deserializes an id that may arrive as a number or a numeric string.
pub fn numeric_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer)?.coerce()
}

/// Deserializes a list of ids, coercing each element like [`numeric_id`].
pub fn numeric_id_list<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawId>::deserialize(deserializer)?
        .into_iter()
        .map(RawId::coerce)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Record {
        #[serde(deserialize_with = "super::numeric_id")]
        id: u64,
        #[serde(deserialize_with = "super::numeric_id_list")]
        members: Vec<u64>,
    }

    #[test]
    fn test_number_and_string_ids_coerce() {
        let record: Record =
            serde_json::from_str(r#"{"id": "7", "members": [1, "2", 3]}"#).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.members, vec![1, 2, 3]);
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result = serde_json::from_str::<Record>(r#"{"id": "abc", "members": []}"#);
        assert!(result.is_err());
    }
}
