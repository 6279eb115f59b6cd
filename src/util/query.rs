use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Raw query string parameters. Lookups are lenient: empty values count as
/// absent and values that fail to parse are ignored rather than rejected.
#[derive(Debug, Default)]
pub struct QueryParams {
    map: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(QueryParams { map })
    }
}

impl QueryParams {
    /// The value exactly as sent. Only an empty value counts as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Parse a trimmed value; blank counts as absent.
    pub fn parse<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse::<T>().ok())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        QueryParams { map }
    }
}
