use crate::model::summary::ExperimentResult;

pub fn render_result_json(result: &ExperimentResult) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}
