//! Lenient number deserializers for request bodies
//!
//! Accept an integer either as a JSON number or as a numeric string.

use serde::{Deserialize, Deserializer};

// the trivia web client sends ids and difficulty straight from <select> values,
// so numbers arrive either as JSON numbers or as numeric strings
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

pub fn deserialize_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(v)) => Ok(Some(v)),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("Wrong value {s}, can not parse to i64"))),
    }
}

pub fn deserialize_lenient_i64_vec<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<IntOrString>>::deserialize(deserializer)?.unwrap_or_default();
    values
        .into_iter()
        .map(|value| match value {
            IntOrString::Int(v) => Ok(v),
            IntOrString::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| serde::de::Error::custom(format!("Wrong value {s}, can not parse to i64"))),
        })
        .collect()
}
