use crate::adapters::{FileContextStore, SystemClock};
use crate::core::catalog;
use crate::domain::model::{Context, CulturalInfo, FoodItem, SlangResult, TrafficEstimate};
use crate::domain::ports::{Clock, ContextStore};
use std::path::{Path, PathBuf};

/// Reads the context file, falling back to an empty context on any failure.
pub fn load_context(path: impl AsRef<Path>) -> Context {
    load_context_from(&FileContextStore::new(), path.as_ref())
}

pub fn load_context_from<S: ContextStore + ?Sized>(store: &S, path: &Path) -> Context {
    match store.read_context(path) {
        Ok(text) => {
            tracing::debug!("Loaded context from {} ({} bytes)", path.display(), text.len());
            Context::new(text)
        }
        Err(e) => {
            tracing::warn!("{}; continuing with empty context", e);
            Context::default()
        }
    }
}

/// `true` for 7-10 and 17-21, bounds inclusive.
pub fn is_peak_hour(hour: u32) -> bool {
    (7..=10).contains(&hour) || (17..=21).contains(&hour)
}

/// Answers slang, street food, traffic and culture questions for one city.
#[derive(Debug)]
pub struct LocalGuide<C: Clock = SystemClock> {
    context_file: PathBuf,
    context: Context,
    clock: C,
}

impl LocalGuide<SystemClock> {
    pub fn new(context_file: impl Into<PathBuf>) -> Self {
        Self::with_parts(&FileContextStore::new(), context_file, SystemClock)
    }

    pub fn with_default_context() -> Self {
        Self::new(catalog::DEFAULT_CONTEXT_FILE)
    }
}

impl<C: Clock> LocalGuide<C> {
    pub fn with_parts<S: ContextStore + ?Sized>(
        store: &S,
        context_file: impl Into<PathBuf>,
        clock: C,
    ) -> Self {
        let context_file = context_file.into();
        let context = load_context_from(store, &context_file);
        Self {
            context_file,
            context,
            clock,
        }
    }

    pub fn city(&self) -> &'static str {
        catalog::CITY
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_file(&self) -> &Path {
        &self.context_file
    }

    pub fn translate_slang(&self, term: &str) -> SlangResult {
        SlangResult {
            term: term.to_string(),
            meaning: catalog::SLANG_MEANING.to_string(),
            usage: catalog::SLANG_USAGE.to_string(),
            example: format!("This slang is frequently used in {}", self.city()),
        }
    }

    /// Preferences are accepted but do not change the list.
    pub fn recommend_street_food(&self, preferences: Option<&str>) -> Vec<FoodItem> {
        if let Some(preferences) = preferences {
            tracing::debug!("Ignoring food preferences: {}", preferences);
        }
        catalog::street_food()
    }

    pub fn estimate_traffic(&self, from_location: &str, to_location: &str) -> TrafficEstimate {
        self.estimate_traffic_at(from_location, to_location, self.clock.current_hour())
    }

    pub fn estimate_traffic_at(
        &self,
        from_location: &str,
        to_location: &str,
        hour: u32,
    ) -> TrafficEstimate {
        let (estimated_time, traffic_level) = if is_peak_hour(hour) {
            (catalog::PEAK_TIME, catalog::PEAK_LEVEL)
        } else {
            (catalog::OFF_PEAK_TIME, catalog::OFF_PEAK_LEVEL)
        };

        TrafficEstimate {
            from_location: from_location.to_string(),
            to_location: to_location.to_string(),
            estimated_time: estimated_time.to_string(),
            traffic_level: traffic_level.to_string(),
            suggested_routes: catalog::local_routes(),
            peak_hours: catalog::PEAK_HOURS.to_string(),
            advice: catalog::TRAFFIC_ADVICE.to_string(),
        }
    }

    pub fn get_cultural_info(&self, topic: &str) -> CulturalInfo {
        let key = topic.to_lowercase();
        match catalog::cultural_topic(&key) {
            Some(text) => CulturalInfo::single(key, text),
            None => CulturalInfo::single("info", catalog::CULTURE_NOT_FOUND),
        }
    }
}
