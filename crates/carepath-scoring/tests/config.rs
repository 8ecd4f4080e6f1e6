use std::collections::BTreeSet;

use carepath_core::models::domain::DomainId;
use carepath_core::models::item::ItemKey;
use carepath_core::models::result::RiskTier;
use carepath_scoring::config::{LikertScale, ScoringConfig, CURRENT_VERSION};
use carepath_scoring::error::ConfigError;
use serde_json::json;

fn builtin_json() -> serde_json::Value {
    serde_json::to_value(ScoringConfig::builtin()).unwrap()
}

#[test]
fn builtin_config_is_valid() {
    let config = ScoringConfig::builtin();
    config.validate().unwrap();

    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.domains.len(), 6);
    assert_eq!(config.likert, LikertScale::FIVE_POINT);
    assert_eq!(
        config.reverse_items,
        BTreeSet::from([2, 4, 20, 22, 23, 26, 31])
    );
    assert_eq!(config.overall.mean, 3.38);
    assert_eq!(config.overall.sd, 0.52);
}

#[test]
fn every_item_belongs_to_exactly_one_domain() {
    let config = ScoringConfig::builtin();
    let mut seen = BTreeSet::new();
    for domain in &config.domains {
        for key in &domain.items {
            assert!(seen.insert(key.clone()), "{key} listed twice");
        }
    }
    assert_eq!(seen.len(), 37);
}

#[test]
fn composite_items_are_never_reverse_coded() {
    let config = ScoringConfig::builtin();
    assert!(config.is_reverse_coded(&ItemKey::parse("q2").unwrap()));
    assert!(!config.is_reverse_coded(&ItemKey::parse("q2_1").unwrap()));
    assert!(!config.is_reverse_coded(&ItemKey::parse("q3").unwrap()));
}

#[test]
fn comment_templates_follow_the_tier() {
    let comments = &ScoringConfig::builtin().comments;
    assert_eq!(comments.for_tier(Some(RiskTier::High)), comments.high);
    assert_eq!(comments.for_tier(Some(RiskTier::Low)), comments.low);
    assert_eq!(
        comments.for_tier(None),
        "해당 영역(섹션)은 응답하지 않아 점수 산출이 불가합니다."
    );
}

#[test]
fn serialized_builtin_round_trips() {
    let contents = serde_json::to_string(ScoringConfig::builtin()).unwrap();
    let loaded = ScoringConfig::from_json_str(&contents).unwrap();
    assert_eq!(&loaded, ScoringConfig::builtin());
}

#[test]
fn unversioned_config_is_migrated() {
    let mut json = builtin_json();
    let obj = json.as_object_mut().unwrap();
    obj.remove("config_version");
    obj.remove("likert");
    obj.remove("comments");

    let config = ScoringConfig::from_value(json).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.likert, LikertScale::FIVE_POINT);
    assert_eq!(config.comments, ScoringConfig::builtin().comments);
}

#[test]
fn newer_config_version_is_rejected() {
    let mut json = builtin_json();
    json["config_version"] = json!(99);

    let err = ScoringConfig::from_value(json).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedVersion {
            found: 99,
            supported: CURRENT_VERSION
        }
    ));
}

#[test]
fn oversized_config_version_is_not_truncated() {
    let mut json = builtin_json();
    json["config_version"] = json!(4_294_967_296u64);

    let err = ScoringConfig::from_value(json).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedVersion {
            found: 4_294_967_296,
            supported: CURRENT_VERSION
        }
    ));

    let mut json = builtin_json();
    json["config_version"] = json!(4_294_967_297u64);
    assert!(matches!(
        ScoringConfig::from_value(json),
        Err(ConfigError::UnsupportedVersion { .. })
    ));
}

#[test]
fn missing_domain_is_rejected() {
    let mut json = builtin_json();
    json["domains"].as_array_mut().unwrap().pop();

    let err = ScoringConfig::from_value(json).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("resilience")));
}

#[test]
fn duplicate_domain_is_rejected() {
    let mut config = ScoringConfig::builtin().clone();
    let copy = config.domains[0].clone();
    config.domains.push(copy);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn non_positive_sd_is_rejected() {
    let mut config = ScoringConfig::builtin().clone();
    config.domains[3].reference.sd = 0.0;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("SD")));

    let mut config = ScoringConfig::builtin().clone();
    config.overall.sd = -0.5;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("overall")));
}

#[test]
fn invalid_item_key_is_rejected() {
    let mut config = ScoringConfig::builtin().clone();
    config.domains[1].items.push("q12_reasons".to_string());
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("q12_reasons")));
}

#[test]
fn empty_likert_scale_is_rejected() {
    let mut config = ScoringConfig::builtin().clone();
    config.likert = LikertScale { min: 5.0, max: 1.0 };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(matches!(
        ScoringConfig::from_value(json!([])),
        Err(ConfigError::NotAnObject)
    ));
    assert!(matches!(
        ScoringConfig::from_json_str("{not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn config_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scoring.json");

    let mut config = ScoringConfig::builtin().clone();
    config.domains[0].reference.mean = 3.0;
    std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = ScoringConfig::load(&path).unwrap();
    assert_eq!(
        loaded.domain(DomainId::PhysicalChange).unwrap().reference.mean,
        3.0
    );

    let missing = ScoringConfig::load(&dir.path().join("absent.json"));
    assert!(matches!(missing, Err(ConfigError::Read { .. })));
}
