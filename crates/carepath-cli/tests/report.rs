use carepath_cli::input::{parse_answers, read_answers, resolve_config};
use carepath_cli::report::{build_report, percentile_label};
use carepath_scoring::config::ScoringConfig;
use carepath_scoring::score;
use serde_json::json;

#[test]
fn answers_parse_from_form_json() {
    let answers = parse_answers(r#"{"q1": 4, "q2": "2", "q12_reasons": ["의지가 없어서"]}"#).unwrap();
    assert_eq!(answers.len(), 3);
    assert_eq!(answers.number("q2"), Some(2.0));
}

#[test]
fn answers_must_be_an_object() {
    assert!(parse_answers("[1, 2, 3]").is_err());
    assert!(parse_answers("not json").is_err());
}

#[test]
fn answers_read_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("answers.json");
    std::fs::write(&path, r#"{"q1": 4}"#).unwrap();

    let answers = read_answers(&path).unwrap();
    assert_eq!(answers.number("q1"), Some(4.0));
    assert!(read_answers(&dir.path().join("missing.json")).is_err());
}

#[test]
fn builtin_config_is_used_without_override() {
    let config = resolve_config(None).unwrap();
    assert_eq!(&config, ScoringConfig::builtin());
}

#[test]
fn config_override_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scoring.json");
    let mut config = ScoringConfig::builtin().clone();
    config.overall.mean = 3.0;
    std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = resolve_config(Some(&path)).unwrap();
    assert_eq!(loaded.overall.mean, 3.0);
}

#[test]
fn plain_report_is_the_scoring_result() {
    let result = score(&parse_answers(r#"{"q1": 4}"#).unwrap());
    let expected = serde_json::to_value(&result).unwrap();

    let report = serde_json::to_value(build_report(result, false, false)).unwrap();
    assert_eq!(report, expected);
}

#[test]
fn report_extras_use_dash_for_unscored_domains() {
    let result = score(&parse_answers(r#"{"q19": 4, "q20": 2}"#).unwrap());
    let report = serde_json::to_value(build_report(result, true, true)).unwrap();

    // Mean 4.0 against 3.08 / 0.91: standardized 67, percentile 96.
    assert_eq!(report["domains"]["psychologicalBurden"]["standardized"], json!(67));
    assert_eq!(report["percentiles"]["psychologicalBurden"], json!("96"));
    assert_eq!(report["percentiles"]["resilience"], json!("-"));
    assert_eq!(report["badge"], json!("low"));
}

#[test]
fn empty_answers_report_no_badge() {
    let result = score(&parse_answers("{}").unwrap());
    let report = serde_json::to_value(build_report(result, false, true)).unwrap();
    assert_eq!(report["badge"], json!(null));
    assert!(report.get("percentiles").is_none());
}

#[test]
fn percentile_labels() {
    assert_eq!(percentile_label(Some(50)), "50");
    assert_eq!(percentile_label(None), "-");
}
