//! Plain-text renderings of what the dashboard draws.

use haq_chart::GaugeColor;
use haq_core::GeoFeature;
use haq_db::models::{DrillDown, GaugeReading};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Write;

/// Shown in place of the disease-impact list when it is empty.
pub const NO_DATA: &str = "No data available";

pub fn format_years(years: &[String]) -> String {
    let mut out = String::new();
    for year in years {
        out.push_str(year);
        out.push('\n');
    }
    out
}

/// `location,value` CSV, sorted by location.
pub fn format_lookup(lookup: &HashMap<String, f64>) -> anyhow::Result<String> {
    let mut rows: Vec<(&String, &f64)> = lookup.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["location", "value"])?;
    for (location, value) in rows {
        writer.write_record([location.as_str(), &value.to_string()])?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

fn gauge_line(reading: &GaugeReading) -> String {
    format!(
        "HAQ Index {}: {:.1} ({})",
        reading.year,
        reading.value,
        GaugeColor::for_value(reading.value).css()
    )
}

/// The gauges, pie, bar and dumbbell contents for one country.
pub fn format_drill_down(drill: &DrillDown) -> String {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "{}", drill.country);
    let _ = writeln!(out, "  {}", gauge_line(&drill.baseline));
    let _ = writeln!(out, "  {}", gauge_line(&drill.latest));

    let _ = writeln!(out, "  Life stages ({}):", drill.latest.year);
    for total in &drill.age_types {
        let _ = writeln!(out, "    {:<14}{:>8.2}", total.age_type.label(), total.value);
    }

    let _ = writeln!(out, "  Cancer statistics ({}):", drill.latest.year);
    for stat in &drill.cancer {
        let _ = writeln!(out, "    {:<14}{:>8.2}", stat.label, stat.value);
    }

    if drill.top_indicators.is_empty() {
        let _ = writeln!(out, "  Disease impact: {}", NO_DATA);
    } else {
        let _ = writeln!(
            out,
            "  Disease impact {} -> {}:",
            drill.baseline.year, drill.latest.year
        );
        for c in &drill.top_indicators {
            let _ = writeln!(
                out,
                "    {:<40}{:>8.2} -> {:.2}",
                c.indicator_name, c.start_value, c.end_value
            );
        }
    }
    out
}

/// The drill-down as pretty-printed JSON.
pub fn drill_down_json(drill: &DrillDown) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(drill)?)
}

/// Drawable features with no lookup entry; these render in the neutral fill.
pub fn unmatched_features<'a>(
    features: &'a [GeoFeature],
    lookup: &HashMap<String, f64>,
) -> Vec<&'a str> {
    let names: BTreeSet<&str> = features
        .iter()
        .filter(|f| f.is_drawable() && !lookup.contains_key(&f.name))
        .map(|f| f.name.as_str())
        .collect();
    names.into_iter().collect()
}

/// Dataset locations that no feature is named after; clicks can never
/// select them.
pub fn unlisted_locations<'a>(locations: &'a [String], features: &[GeoFeature]) -> Vec<&'a str> {
    let names: BTreeSet<&str> = features.iter().map(|f| f.name.as_str()).collect();
    locations
        .iter()
        .map(String::as_str)
        .filter(|l| !names.contains(l))
        .collect()
}

pub fn format_unmatched(year: &str, unmatched: &[&str], unlisted: &[&str]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Features without a HAQ Index value in {}: {}", year, unmatched.len());
    for name in unmatched {
        let _ = writeln!(out, "  {}", name);
    }
    let _ = writeln!(out, "Dataset locations without a feature: {}", unlisted.len());
    for name in unlisted {
        let _ = writeln!(out, "  {}", name);
    }
    out
}
