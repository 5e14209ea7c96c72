/*
 * Copyright (c) 2025 Lightroom-rs Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Deserialize;
use serde::de::Error;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

// Parses an unsigned number that the API sometimes sends as a numeric string
pub fn from_uint_or_numeric_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(v) => Ok(v),
        NumberOrString::String(s) => s
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, found {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Coded {
        #[serde(deserialize_with = "from_uint_or_numeric_str")]
        code: u64,
    }

    #[test]
    fn number_and_numeric_string_match() {
        let a: Coded = serde_json::from_str(r#"{"code": 1000}"#).unwrap();
        let b: Coded = serde_json::from_str(r#"{"code": "1000"}"#).unwrap();
        assert_eq!(a.code, 1000);
        assert_eq!(a.code, b.code);
    }

    #[test]
    fn non_numeric_string_is_rejected() {
        assert!(serde_json::from_str::<Coded>(r#"{"code": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Coded>(r#"{"code": -1}"#).is_err());
    }
}
