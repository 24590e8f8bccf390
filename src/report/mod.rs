pub mod json;
pub mod text;

use crate::model::metrics::Interval;

/// Per-technique line of the text report.
#[derive(Debug, Clone)]
pub struct TechniqueSection {
    pub name: String,
    pub confidence_level: f64,
    pub sample_size: i128,
    pub rows: Vec<MetricRow>,
    pub kappa: f64,
    pub kappa_ci: Interval,
    pub interpretation: String,
}

#[derive(Debug, Clone)]
pub struct MetricRow {
    pub name: &'static str,
    pub value: f64,
    pub ci: Option<Interval>,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub experiment_name: String,
    pub description: String,
    pub techniques: Vec<TechniqueSection>,
    pub best: Vec<(&'static str, String)>,
    pub averages: Vec<(&'static str, f64)>,
    pub tool_version: String,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_interval(ci: &Interval) -> String {
    format!("[{}, {}]", format_f64_6(ci.lower), format_f64_6(ci.upper))
}

pub fn format_percent(level: f64) -> String {
    let pct = level * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:.0}%", pct)
    } else {
        format!("{}%", pct)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
