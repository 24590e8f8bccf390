use crate::report::{ReportContext, TechniqueSection, format_f64_6, format_interval, format_percent};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Diagnostic Technique Comparison Report\n");
    out.push_str("======================================\n\n");

    out.push_str(&format!("Experiment: {}\n", ctx.experiment_name));
    if !ctx.description.trim().is_empty() {
        out.push_str(&format!("Description: {}\n", ctx.description.trim()));
    }
    out.push_str(&format!("Techniques: {}\n", ctx.techniques.len()));
    out.push_str(&format!("Tool version: {}\n\n", ctx.tool_version));

    out.push_str("1. Per-technique statistics\n");
    for section in &ctx.techniques {
        push_section(&mut out, section);
    }
    out.push('\n');

    out.push_str("2. Comparison summary\n");
    for (metric, name) in &ctx.best {
        out.push_str(&format!("Best {}: {}\n", metric, name));
    }
    for (metric, value) in &ctx.averages {
        out.push_str(&format!("Average {}: {}\n", metric, format_f64_6(*value)));
    }
    out.push('\n');

    out.push_str("3. Notes\n");
    out.push_str("Intervals for proportions are Wilson score intervals.\n");
    out.push_str(
        "Kappa intervals use the large-sample SE sqrt(po(1-po) / (N(1-pe)^2)).\n",
    );
    out.push_str("Metrics with an empty denominator are reported as 0 with interval [0, 0].\n");

    out
}

fn push_section(out: &mut String, section: &TechniqueSection) {
    out.push_str(&format!(
        "{} (N = {}, confidence {})\n",
        section.name,
        section.sample_size,
        format_percent(section.confidence_level)
    ));
    for row in &section.rows {
        match &row.ci {
            Some(ci) => out.push_str(&format!(
                "  {:<12} {} {}\n",
                row.name,
                format_f64_6(row.value),
                format_interval(ci)
            )),
            None => out.push_str(&format!("  {:<12} {}\n", row.name, format_f64_6(row.value))),
        }
    }
    out.push_str(&format!(
        "  {:<12} {} {} ({})\n",
        "Kappa",
        format_f64_6(section.kappa),
        format_interval(&section.kappa_ci),
        section.interpretation
    ));
}
