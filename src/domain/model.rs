use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Text loaded from the context file. Stored by the guide, never consulted by a handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context(String);

impl Context {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlangResult {
    pub term: String,
    pub meaning: String,
    pub usage: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub description: String,
    pub location: String,
    pub price: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficEstimate {
    #[serde(rename = "from")]
    pub from_location: String,
    #[serde(rename = "to")]
    pub to_location: String,
    pub estimated_time: String,
    pub traffic_level: String,
    pub suggested_routes: Vec<String>,
    pub peak_hours: String,
    pub advice: String,
}

/// Key/value answer for a cultural topic, e.g. `{"festivals": "..."}` or the
/// `{"info": "Cultural topic not found"}` fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CulturalInfo(BTreeMap<String, String>);

impl CulturalInfo {
    pub fn single(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value.into());
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

macro_rules! display_as_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )*
    };
}

display_as_json!(SlangResult, FoodItem, TrafficEstimate, CulturalInfo);
