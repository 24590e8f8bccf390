use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::model::matrix::TechniqueInput;
use crate::model::metrics::Interval;
use crate::model::summary::ExperimentResult;
use crate::report::json::render_result_json;
use crate::report::text::render_report_text;
use crate::report::{MetricRow, ReportContext, TechniqueSection, format_f64_6};

pub const RESULT_JSON: &str = "result.json";
pub const TECHNIQUES_TSV: &str = "techniques.tsv";
pub const REPORT_TXT: &str = "report.txt";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub result: &'a ExperimentResult,
    pub techniques: &'a [TechniqueInput],
    pub tool_version: String,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir).map_err(io_at(out_dir))?;

    let json_path = out_dir.join(RESULT_JSON);
    let json = render_result_json(input.result)?;
    write_text(&json_path, &json)?;

    let tsv_path = out_dir.join(TECHNIQUES_TSV);
    write_techniques_tsv(input, &tsv_path).map_err(io_at(&tsv_path))?;

    let report_path = out_dir.join(REPORT_TXT);
    let ctx = build_report_context(input);
    write_text(&report_path, &render_report_text(&ctx))?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

fn write_techniques_tsv(input: &Stage4Input<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "technique",
        "confidence_level",
        "tp",
        "fp",
        "fn",
        "tn",
        "sensitivity",
        "sensitivity_lo",
        "sensitivity_hi",
        "specificity",
        "specificity_lo",
        "specificity_hi",
        "ppv",
        "ppv_lo",
        "ppv_hi",
        "npv",
        "npv_lo",
        "npv_hi",
        "accuracy",
        "prevalence",
        "kappa",
        "kappa_lo",
        "kappa_hi",
        "interpretation",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for (result, technique) in input.result.techniques_results.iter().zip(input.techniques) {
        let s = &result.metrics.stats;
        let m = &technique.matrix;
        let mut row = vec![
            result.technique_name.clone(),
            technique.confidence_level.to_string(),
            m.true_positive.to_string(),
            m.false_positive.to_string(),
            m.false_negative.to_string(),
            m.true_negative.to_string(),
        ];
        push_estimate(&mut row, s.sensitivity, &s.sensitivity_ci);
        push_estimate(&mut row, s.specificity, &s.specificity_ci);
        push_estimate(&mut row, s.ppv, &s.ppv_ci);
        push_estimate(&mut row, s.npv, &s.npv_ci);
        row.push(format_f64_6(s.accuracy));
        row.push(format_f64_6(s.prevalence));
        push_estimate(
            &mut row,
            result.metrics.cohen_kappa,
            &result.metrics.cohen_kappa_ci,
        );
        row.push(result.metrics.interpretation.label().to_string());
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn push_estimate(row: &mut Vec<String>, value: f64, ci: &Interval) {
    row.push(format_f64_6(value));
    row.push(format_f64_6(ci.lower));
    row.push(format_f64_6(ci.upper));
}

pub fn build_report_context(input: &Stage4Input<'_>) -> ReportContext {
    let result = input.result;
    let techniques = result
        .techniques_results
        .iter()
        .zip(input.techniques)
        .map(|(r, t)| {
            let s = &r.metrics.stats;
            let m = &t.matrix;
            TechniqueSection {
                name: r.technique_name.clone(),
                confidence_level: t.confidence_level,
                sample_size: m.true_positive as i128
                    + m.false_positive as i128
                    + m.false_negative as i128
                    + m.true_negative as i128,
                rows: vec![
                    row("Sensitivity", s.sensitivity, Some(s.sensitivity_ci)),
                    row("Specificity", s.specificity, Some(s.specificity_ci)),
                    row("PPV", s.ppv, Some(s.ppv_ci)),
                    row("NPV", s.npv, Some(s.npv_ci)),
                    row("Accuracy", s.accuracy, None),
                    row("Prevalence", s.prevalence, None),
                ],
                kappa: r.metrics.cohen_kappa,
                kappa_ci: r.metrics.cohen_kappa_ci,
                interpretation: r.metrics.interpretation.label().to_string(),
            }
        })
        .collect();

    let summary = &result.comparison_summary;
    ReportContext {
        experiment_name: result.experiment_name.clone(),
        description: result.description.clone(),
        techniques,
        best: vec![
            ("sensitivity", summary.best_sensitivity.clone()),
            ("specificity", summary.best_specificity.clone()),
            ("accuracy", summary.best_accuracy.clone()),
            ("kappa", summary.best_kappa.clone()),
        ],
        averages: vec![
            ("sensitivity", summary.average_sensitivity),
            ("specificity", summary.average_specificity),
            ("accuracy", summary.average_accuracy),
        ],
        tool_version: input.tool_version.clone(),
    }
}

fn row(name: &'static str, value: f64, ci: Option<Interval>) -> MetricRow {
    MetricRow { name, value, ci }
}

fn write_text(path: &Path, text: &str) -> Result<(), ReportError> {
    fs::write(path, text).map_err(io_at(path))
}

fn io_at(path: &Path) -> impl Fn(std::io::Error) -> ReportError + '_ {
    move |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
