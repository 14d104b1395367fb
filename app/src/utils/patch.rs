use serde::{Deserialize, Deserializer};

/// Distinguishes a field that was set to `null` from a field left out of the
/// payload entirely. Wrap the field in `Option<Option<T>>` and mark it with
/// `#[serde(default, deserialize_with = "patch_field")]`: omitted stays
/// `None`, an explicit `null` becomes `Some(None)`.
pub fn patch_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::patch_field;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "patch_field")]
        value: Option<Option<i32>>,
    }

    #[test]
    fn test_omitted_field_stays_unset() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.value, None);
    }

    #[test]
    fn test_explicit_null_is_set_to_none() {
        let payload: Payload = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(payload.value, Some(None));
    }

    #[test]
    fn test_present_value_is_set() {
        let payload: Payload = serde_json::from_str(r#"{"value": 7}"#).unwrap();
        assert_eq!(payload.value, Some(Some(7)));
    }
}
