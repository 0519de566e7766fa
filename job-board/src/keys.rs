use serde_json::{Map, Value};

/// `company_name` -> `companyName`.
/// Separators are `_`, `-` and spaces, repeated or leading separators are dropped
pub fn to_camel_case(key: &str) -> String {
    let mut camel = String::with_capacity(key.len());
    for segment in key.split(['_', '-', ' ']).filter(|s| !s.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            if camel.is_empty() {
                camel.extend(first.to_lowercase());
            } else {
                camel.extend(first.to_uppercase());
            }
            camel.push_str(chars.as_str());
        }
    }
    camel
}

/// Renames the top-level keys of a row, nested values are left untouched
pub fn camelize_keys(row: Map<String, Value>) -> Map<String, Value> {
    row.into_iter()
        .map(|(key, value)| (to_camel_case(&key), value))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("id", "id")]
    #[case("company_name", "companyName")]
    #[case("is_always", "isAlways")]
    #[case("image_url", "imageUrl")]
    #[case("__private_field", "privateField")]
    #[case("apply-link", "applyLink")]
    #[case("alreadyCamel", "alreadyCamel")]
    fn test_to_camel_case(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(to_camel_case(key), expected);
    }

    #[test]
    fn test_camelize_keys_is_shallow() {
        let row = json!({
            "view_count": 3,
            "contact_info": { "phone_number": "010" }
        });
        let Value::Object(row) = row else {
            unreachable!()
        };
        let camelized = camelize_keys(row);
        assert_eq!(camelized.len(), 2);
        assert_eq!(camelized["viewCount"], 3);
        assert_eq!(camelized["contactInfo"], json!({ "phone_number": "010" }));
    }
}
