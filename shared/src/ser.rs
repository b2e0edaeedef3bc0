/// `u64` written as a JSON string (`"6311520"`), read from either a string
/// or a number.
pub mod u64_string {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(U64Visitor)
    }

    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "an unsigned integer or a string holding one")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
            u64::try_from(value).map_err(|_| {
                E::invalid_value(de::Unexpected::Signed(value), &self)
            })
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
            value
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blocks {
        #[serde(with = "super::u64_string")]
        blocks: u64,
    }

    #[test]
    fn writes_string() {
        let json = serde_json::to_string(&Blocks { blocks: 6_311_520 }).unwrap();
        assert_eq!(json, r#"{"blocks":"6311520"}"#);
    }

    #[test]
    fn reads_string_or_number() {
        let expected = Blocks { blocks: 6_311_520 };

        let from_string: Blocks =
            serde_json::from_str(r#"{"blocks":"6311520"}"#).unwrap();
        let from_number: Blocks =
            serde_json::from_str(r#"{"blocks":6311520}"#).unwrap();

        assert_eq!(from_string, expected);
        assert_eq!(from_number, expected);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        for raw in [
            r#"{"blocks":-1}"#,
            r#"{"blocks":"-1"}"#,
            r#"{"blocks":"often"}"#,
            r#"{"blocks":1.5}"#,
        ] {
            assert!(serde_json::from_str::<Blocks>(raw).is_err(), "{raw}");
        }
    }
}
