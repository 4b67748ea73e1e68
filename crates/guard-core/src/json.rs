//! # Serde-Backed Codec
//!
//! [`JsonCodec<T>`] validates a `serde_json::Value` by deserializing it into
//! `T`, and encodes `T` back with its `Serialize` impl. Any type with serde
//! derives becomes a codec, including the validated newtypes in
//! [`crate::refined`], whose `Deserialize` impls run their predicates.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::codec::Codec;
use crate::error::ValidationError;

/// A codec from `serde_json::Value` to `T`.
pub struct JsonCodec<T> {
    name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    /// Create a codec with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _marker: PhantomData,
        }
    }
}

/// Names the codec after the last path segment of `T`
/// (`my_app::model::Person` becomes `Person`).
impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new(short_type_name::<T>())
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCodec").field("name", &self.name).finish()
    }
}

impl<T> Codec for JsonCodec<T>
where
    T: Serialize + DeserializeOwned,
{
    type Decoded = T;
    type Encoded = Value;
    type Input = Value;

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, input: &Value) -> Result<T, ValidationError> {
        T::deserialize(input).map_err(|e| ValidationError::root(e.to_string()))
    }

    fn encode(&self, value: &T) -> Value {
        match serde_json::to_value(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::error!(codec = %self.name, error = %e, "encode produced no JSON value");
                Value::Null
            }
        }
    }
}

/// Last `::` segment of the type name, keeping generic arguments intact.
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let (head, generics) = match full.find('<') {
        Some(pos) => full.split_at(pos),
        None => (full, ""),
    };
    let base = head.rsplit("::").next().unwrap_or(head);
    format!("{base}{generics}")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::adapter::{decode, encode};
    use crate::error::DecodeError;
    use crate::refined::Positive;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct Person {
        pub(super) name: String,
        pub(super) age: f64,
    }

    #[test]
    fn test_person_decodes() {
        let codec = JsonCodec::<Person>::new("Person");
        let person = decode(&codec)(&json!({"name": "John", "age": 42})).unwrap();
        assert_eq!(
            person,
            Person {
                name: "John".to_string(),
                age: 42.0
            }
        );
    }

    #[test]
    fn test_person_missing_field_rejected() {
        let codec = JsonCodec::<Person>::new("Person");
        let err = decode(&codec)(&json!({"name": "John"})).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(r#"{"name":"John"}"#), "got: {message}");
        assert!(message.contains("Person"), "got: {message}");
        assert_eq!(message, r#"{"name":"John"} is not a valid Person"#);

        let violations = err.validation().unwrap();
        assert!(violations.violations()[0].message.contains("age"));
    }

    #[test]
    fn test_multi_key_message_keeps_input_order() {
        let codec = JsonCodec::<Person>::new("Person");
        let input: Value = serde_json::from_str(r#"{"name":"John","age":"x"}"#).unwrap();
        let err = decode(&codec)(&input).unwrap_err();
        assert_eq!(err.to_string(), r#"{"name":"John","age":"x"} is not a valid Person"#);
    }

    #[test]
    fn test_wrong_type_rejected() {
        let codec = JsonCodec::<Person>::new("Person");
        let err = decode(&codec)(&json!({"name": 7, "age": 42})).unwrap_err();
        assert!(matches!(err, DecodeError::Invalid { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let codec = JsonCodec::<Person>::new("Person");
        assert!(codec
            .validate(&json!({"name": "John", "age": 42, "email": "j@x.io"}))
            .is_err());
    }

    #[test]
    fn test_encode_matches_serialize() {
        let codec = JsonCodec::<Person>::new("Person");
        let person = Person {
            name: "Ada".to_string(),
            age: 36.0,
        };
        assert_eq!(encode(&codec)(&person), json!({"name": "Ada", "age": 36.0}));
        assert_eq!(encode(&codec)(&person), codec.encode(&person));
    }

    #[test]
    fn test_encode_failure_yields_null() {
        let codec = JsonCodec::<BTreeMap<(u8, u8), u8>>::new("Pairs");
        let value = BTreeMap::from([((1, 2), 3)]);
        assert_eq!(codec.encode(&value), Value::Null);
    }

    #[test]
    fn test_default_name_is_short_type_name() {
        assert_eq!(JsonCodec::<Person>::default().name(), "Person");
        assert_eq!(JsonCodec::<Positive>::default().name(), "Positive");
        assert_eq!(JsonCodec::<Vec<u8>>::default().name(), "Vec<u8>");
    }

    #[test]
    fn test_branded_positive() {
        let codec = JsonCodec::<Positive>::new("Positive");
        let parse = decode(&codec);
        assert_eq!(parse(&json!(4)).unwrap().get(), 4.0);
        let err = parse(&json!(-1)).unwrap_err();
        assert_eq!(err.to_string(), "-1 is not a valid Positive");
    }
}
