use crate::core::catalog;
use crate::core::guide::LocalGuide;
use crate::domain::ports::Clock;
use serde::Serialize;

pub const PLACEHOLDER_FROM: &str = "Location A";
pub const PLACEHOLDER_TO: &str = "Location B";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Slang,
    Food,
    Traffic,
    Help,
}

impl QueryKind {
    /// First keyword found wins, in the order slang, food, traffic.
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        if query.contains("slang") {
            QueryKind::Slang
        } else if query.contains("food") {
            QueryKind::Food
        } else if query.contains("traffic") {
            QueryKind::Traffic
        } else {
            QueryKind::Help
        }
    }
}

/// Answers a free-text query with the matching handler's result as JSON.
pub fn route<C: Clock>(guide: &LocalGuide<C>, query: &str) -> String {
    let kind = QueryKind::classify(query);
    tracing::debug!("Routing query {:?} as {:?}", query, kind);

    match kind {
        QueryKind::Slang => {
            let term = query.replace("slang", "");
            render(&guide.translate_slang(term.trim()))
        }
        QueryKind::Food => render(&guide.recommend_street_food(None)),
        QueryKind::Traffic => render(&guide.estimate_traffic(PLACEHOLDER_FROM, PLACEHOLDER_TO)),
        QueryKind::Help => catalog::HELP_MESSAGE.to_string(),
    }
}

fn render<T: Serialize + std::fmt::Debug>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to serialize response: {}", e);
        format!("{:?}", value)
    })
}
