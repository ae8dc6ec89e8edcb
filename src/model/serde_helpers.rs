//! Field deserializers for browser form payloads, where numeric inputs are
//! often posted as their string value (`"4"` instead of `4`).

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Num(T),
    Text(String),
}

/// Accepts `4` or `"4"`.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Num(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

/// Like [`number_or_string`], with `null` and `""` read as `None`.
/// Pair with `#[serde(default)]` so a missing key also means `None`.
pub fn option_number_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Num(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s.trim().parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Form {
        #[serde(deserialize_with = "number_or_string")]
        rating: i32,
        #[serde(default, deserialize_with = "option_number_or_string")]
        user_id: Option<u64>,
    }

    fn parse(body: &str) -> Result<Form, serde_json::Error> {
        serde_json::from_str(body)
    }

    #[test]
    fn numbers_and_numeric_strings_both_parse() {
        let form = parse(r#"{"rating": 4, "user_id": 2}"#).unwrap();
        assert_eq!((form.rating, form.user_id), (4, Some(2)));

        let form = parse(r#"{"rating": " 4 ", "user_id": "2"}"#).unwrap();
        assert_eq!((form.rating, form.user_id), (4, Some(2)));
    }

    #[test]
    fn optional_ids_may_be_blank_or_absent() {
        assert_eq!(parse(r#"{"rating": 1}"#).unwrap().user_id, None);
        assert_eq!(parse(r#"{"rating": 1, "user_id": null}"#).unwrap().user_id, None);
        assert_eq!(parse(r#"{"rating": 1, "user_id": ""}"#).unwrap().user_id, None);
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        assert!(parse(r#"{"rating": "great"}"#).is_err());
        assert!(parse(r#"{"rating": 1, "user_id": "me"}"#).is_err());
    }
}
