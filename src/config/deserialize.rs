// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Validates the Nexus URL, required strings, and artifact name lists.

use nonempty::NonEmpty;
use serde::Deserialize;

pub fn deserialize_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let url = s.trim().trim_end_matches('/');

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            serde::de::Error::custom(format!("url must start with http:// or https://: {s}"))
        })?;

    if rest.is_empty() {
        return Err(serde::de::Error::custom("url has no host"));
    }

    Ok(url.to_string())
}

pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom("value cannot be empty"));
    }
    Ok(s)
}

pub fn deserialize_names_option<'de, D>(
    deserializer: D,
) -> Result<Option<NonEmpty<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<Vec<String>> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(values) => {
            if let Some(blank) = values.iter().find(|n| n.trim().is_empty()) {
                return Err(serde::de::Error::custom(format!(
                    "artifact name cannot be blank: {blank:?}"
                )));
            }

            let names = NonEmpty::from_vec(values)
                .ok_or_else(|| serde::de::Error::custom("names list cannot be empty"))?;
            Ok(Some(names))
        }
    }
}
