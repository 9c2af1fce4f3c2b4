//! Canned data served by the guide.

use crate::domain::model::FoodItem;

pub const CITY: &str = "Mumbai";
pub const DEFAULT_CONTEXT_FILE: &str = "product.md";

pub const SLANG_MEANING: &str = "Local Mumbai slang expression";
pub const SLANG_USAGE: &str = "Common in daily conversations";

pub const PEAK_TIME: &str = "45 minutes";
pub const PEAK_LEVEL: &str = "Heavy";
pub const OFF_PEAK_TIME: &str = "25 minutes";
pub const OFF_PEAK_LEVEL: &str = "Moderate";
pub const PEAK_HOURS: &str = "7-10 AM, 5-9 PM";
pub const TRAFFIC_ADVICE: &str = "Avoid peak hours if possible. Use shortcuts like Eastern Freeway.";

pub const CULTURE_NOT_FOUND: &str = "Cultural topic not found";
pub const HELP_MESSAGE: &str = "Please ask about slang, food, or traffic for local recommendations";

const STREET_FOOD: [(&str, &str, &str, &str, f64); 4] = [
    (
        "Vada Pav",
        "Fried potato dumpling in bread",
        "Street vendors across Mumbai",
        "Rs 10-20",
        4.8,
    ),
    (
        "Pav Bhaji",
        "Spiced vegetable curry with buttered bread",
        "Chowpatty Beach, Mohammed Ali Road",
        "Rs 30-50",
        4.7,
    ),
    (
        "Bhel Puri",
        "Puffed rice snack with tamarind chutney",
        "Beach areas and markets",
        "Rs 20-30",
        4.6,
    ),
    (
        "Misal Pav",
        "Spicy curry with bread",
        "Western Mumbai areas",
        "Rs 30-40",
        4.5,
    ),
];

const LOCAL_ROUTES: [&str; 3] = [
    "Eastern Freeway - Best for North Mumbai",
    "SCLR - Southern Coastal Connector Road",
    "Local trains - Most reliable during rush hour",
];

const CULTURAL_TOPICS: [(&str, &str); 4] = [
    ("festivals", "Ganesh Chaturthi, Diwali, Navratri"),
    ("language", "Marathi, Hindi, English"),
    ("best_season", "October-February"),
    ("local_customs", "Respectful greetings, diverse traditions"),
];

pub fn street_food() -> Vec<FoodItem> {
    STREET_FOOD
        .iter()
        .map(|&(name, description, location, price, rating)| FoodItem {
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            price: price.to_string(),
            rating,
        })
        .collect()
}

pub fn local_routes() -> Vec<String> {
    LOCAL_ROUTES.iter().map(|r| r.to_string()).collect()
}

/// Looks up a lowercase topic key.
pub fn cultural_topic(key: &str) -> Option<&'static str> {
    CULTURAL_TOPICS
        .iter()
        .find(|(topic, _)| *topic == key)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cultural_topic_keys_are_lowercase() {
        for (topic, _) in CULTURAL_TOPICS {
            assert_eq!(topic, topic.to_lowercase());
        }
    }

    #[test]
    fn test_unknown_topic() {
        assert_eq!(cultural_topic("nightlife"), None);
        assert_eq!(cultural_topic("best_season"), Some("October-February"));
    }
}
