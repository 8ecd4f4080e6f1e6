use carepath_core::models::answer::AnswerSet;
use carepath_core::models::domain::DomainId;
use carepath_core::models::result::RiskTier;
use carepath_scoring::classify::classify;
use carepath_scoring::config::{LikertScale, ReferenceStats, ScoringConfig};
use carepath_scoring::percentile::{erf, percentile};
use carepath_scoring::score;
use carepath_scoring::standardize::standardize;

fn psychological_burden() -> ReferenceStats {
    ScoringConfig::builtin()
        .domain(DomainId::PsychologicalBurden)
        .unwrap()
        .reference
}

#[test]
fn reverse_coding_is_an_involution() {
    let scale = LikertScale::FIVE_POINT;
    for v in 1..=5 {
        let v = f64::from(v);
        assert_eq!(scale.reverse(scale.reverse(v)), v);
    }
    assert_eq!(scale.reverse(1.0), 5.0);
    assert_eq!(scale.reverse(3.0), 3.0);
}

#[test]
fn domain_means_stay_on_the_scale() {
    let config = ScoringConfig::builtin();
    for offset in 0..5 {
        let answers: AnswerSet = config
            .domains
            .iter()
            .flat_map(|d| d.items.iter())
            .enumerate()
            .map(|(i, key)| (key.clone(), ((i + offset) % 5 + 1) as i32))
            .collect();

        for domain in score(&answers).domains.values() {
            let mean = domain.mean.unwrap();
            assert!((1.0..=5.0).contains(&mean), "mean {mean} out of range");
        }
    }
}

#[test]
fn standardized_score_is_fifty_at_the_reference_mean() {
    let config = ScoringConfig::builtin();
    for domain in &config.domains {
        let reference = domain.reference;
        assert_eq!(standardize(Some(reference.mean), &reference), Some(50));
    }
    assert_eq!(standardize(Some(config.overall.mean), &config.overall), Some(50));
}

#[test]
fn standardized_score_increases_with_mean() {
    let reference = psychological_burden();
    let scores: Vec<i32> = (10..=50)
        .map(|tenths| standardize(Some(f64::from(tenths) / 10.0), &reference).unwrap())
        .collect();

    // 0.1 of a mean is ~1.8 standardized points, so rounding never ties.
    assert!(scores.windows(2).all(|w| w[0] < w[1]), "{scores:?}");
}

#[test]
fn standardized_score_uses_the_literal_scale_constant() {
    let reference = ReferenceStats { mean: 0.0, sd: 1.0 };
    // 3 * 16.67 + 50 = 100.01; 50 / 3 per SD would give exactly 100.
    assert_eq!(standardize(Some(3.0), &reference), Some(100));
    // -1 * 16.67 + 50 = 33.33
    assert_eq!(standardize(Some(-1.0), &reference), Some(33));
    // 0.03 * 16.67 + 50 = 50.5001, rounds up
    assert_eq!(standardize(Some(0.03), &reference), Some(51));
    assert_eq!(standardize(None, &reference), None);
    assert_eq!(standardize(Some(f64::NAN), &reference), None);
}

#[test]
fn psychological_burden_classification_boundaries() {
    let reference = psychological_burden();
    assert_eq!(reference.mean, 3.08);
    assert_eq!(reference.sd, 0.91);

    assert_eq!(classify(Some(2.0), &reference), Some(RiskTier::High));
    assert_eq!(classify(Some(2.5), &reference), Some(RiskTier::Caution));
    assert_eq!(classify(Some(4.0), &reference), Some(RiskTier::Low));
}

#[test]
fn classification_is_inclusive_at_each_threshold() {
    let reference = psychological_burden();
    assert_eq!(
        classify(Some(reference.cutoff()), &reference),
        Some(RiskTier::High)
    );
    assert_eq!(
        classify(Some(reference.mean), &reference),
        Some(RiskTier::Caution)
    );
    assert_eq!(classify(None, &reference), None);
}

#[test]
fn non_finite_means_are_unclassified() {
    let reference = psychological_burden();
    assert_eq!(classify(Some(f64::INFINITY), &reference), None);
    assert_eq!(classify(Some(f64::NEG_INFINITY), &reference), None);
    assert_eq!(classify(Some(f64::NAN), &reference), None);
}

#[test]
fn erf_matches_known_values() {
    assert!(erf(0.0).abs() < 1e-8);
    assert!((erf(1.0) - 0.842_700_79).abs() < 1e-6);
    assert!((erf(-1.0) + 0.842_700_79).abs() < 1e-6);
    assert!((erf(3.0) - 0.999_977_91).abs() < 1e-6);
}

#[test]
fn percentile_follows_the_normal_curve() {
    assert_eq!(percentile(Some(50.0)), Some(50));
    assert_eq!(percentile(Some(60.0)), Some(84));
    assert_eq!(percentile(Some(40.0)), Some(16));
    assert_eq!(percentile(Some(70.0)), Some(98));
    assert_eq!(percentile(Some(30.0)), Some(2));
    assert_eq!(percentile(Some(200.0)), Some(100));
    assert_eq!(percentile(Some(-100.0)), Some(0));
}

#[test]
fn percentile_of_missing_score_is_unclassified() {
    assert_eq!(percentile(None), None);
    assert_eq!(percentile(Some(f64::NAN)), None);
    assert_eq!(percentile(Some(f64::INFINITY)), None);
}
