use serde::de::DeserializeOwned;
use serde_json::Value;

/// Typed decoding of a payload received from the GUI or the gateway.
///
/// The payload is either the structured JSON value itself,
/// or that same value serialized as a JSON string.
pub trait Decode: DeserializeOwned {
    fn decode(source: &Value) -> serde_json::Result<Self> {
        match source {
            Value::String(text) => serde_json::from_str(text),
            value => Self::deserialize(value),
        }
    }

    fn decode_str(source: &str) -> serde_json::Result<Self> {
        Self::decode(&serde_json::from_str::<Value>(source)?)
    }
}
