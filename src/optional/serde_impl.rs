//! Serde support for [`Optional<T>`] (feature-gated)
//!
//! An `Optional<T>` is encoded exactly like `Option<T>`: absent values become
//! the format's null, present values are encoded inline.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Optional;

impl<T> Serialize for Optional<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_ref().into_option().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Optional<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::of_nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_present() {
        let json = serde_json::to_string(&Optional::of(5)).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn test_serialize_empty() {
        let json = serde_json::to_string(&Optional::<i32>::empty()).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_deserialize() {
        let present: Optional<String> = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(present, Optional::of("hi".to_string()));

        let absent: Optional<String> = serde_json::from_str("null").unwrap();
        assert!(absent.is_empty());
    }
}
