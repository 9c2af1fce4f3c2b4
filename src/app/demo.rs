use crate::core::guide::LocalGuide;
use crate::domain::ports::Clock;
use std::fmt::{self, Write};

pub const DEMO_SLANG_TERM: &str = "Tapri";
pub const DEMO_FROM: &str = "South Mumbai";
pub const DEMO_TO: &str = "North Mumbai";

/// Builds the walkthrough printed when the binary runs without a query.
pub fn render_demo<C: Clock>(guide: &LocalGuide<C>) -> String {
    let mut out = String::new();
    if let Err(e) = write_demo(&mut out, guide) {
        tracing::warn!("Demo output is incomplete: {}", e);
    }
    out
}

pub fn write_demo<W: Write, C: Clock>(out: &mut W, guide: &LocalGuide<C>) -> fmt::Result {
    writeln!(out, "\n=== Local Guide - {} Edition ===", guide.city())?;
    writeln!(out, "Canned answers with custom context\n")?;

    writeln!(out, "1. Slang Translation:")?;
    writeln!(out, "{}", guide.translate_slang(DEMO_SLANG_TERM))?;
    writeln!(out)?;

    writeln!(out, "2. Street Food Recommendations:")?;
    for food in guide.recommend_street_food(None) {
        writeln!(out, "  - {}: {}", food.name, food.description)?;
    }
    writeln!(out)?;

    writeln!(out, "3. Traffic Estimation:")?;
    let traffic = guide.estimate_traffic(DEMO_FROM, DEMO_TO);
    writeln!(out, "  Estimated Time: {}", traffic.estimated_time)?;
    writeln!(out, "  Traffic Level: {}", traffic.traffic_level)?;
    writeln!(out)?;

    writeln!(out, "4. Cultural Information:")?;
    let culture = guide.get_cultural_info("festivals");
    writeln!(
        out,
        "  Local Festivals: {}",
        culture.get("festivals").unwrap_or_default()
    )?;

    Ok(())
}
