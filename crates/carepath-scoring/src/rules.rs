//! The feedback rule table shown to respondents after scoring.

use carepath_core::models::domain::DomainId;
use carepath_core::models::result::{RiskTier, Severity};

use crate::error::RuleError;
use crate::feedback::{FeedbackRule, RuleContext};

/// Item keys the rules read directly.
pub mod keys {
    pub const ALCOHOL: &str = "q9";
    pub const SMOKING: &str = "q10";
    pub const EXERCISE: &str = "q11";
    pub const HEALTH_DIFFICULTY_REASONS: &str = "q12_reasons";
    pub const DIET_SEASONING: &str = "q13_1_1";
    pub const DIET_FRESHNESS: &str = "q13_1_2";
    pub const DIET_PLANT_BASED: &str = "q13_1_3";
    pub const DIET_MEAT: &str = "q13_1_4";
    pub const DIET_CARBOHYDRATE: &str = "q13_1_5";
    pub const DIET_ANTICANCER: &str = "q13_1_6";
}

/// Reasons for struggling with health management that call for counseling.
pub const COUNSELING_REASONS: &[&str] = &[
    "어떻게 해야 할지 몰라서",
    "스트레스로 느껴져서",
    "의지가 없어서",
];

/// Raw Likert answers at or below this value trigger lifestyle warnings.
const LIFESTYLE_WARNING_MAX: f64 = 3.0;

pub const RULES: &[FeedbackRule] = &[
    FeedbackRule {
        id: "counseling_escalation",
        predicate: counseling_escalation,
        message: "건강관리에 어려움을 느끼고 계시네요. 전문 상담을 통해 마음의 부담을 덜어 보시길 권해 드려요. 담당 사회복지사에게 상담 연결을 요청해 주세요.",
        severity: Severity::Error,
    },
    FeedbackRule {
        id: "resilience_high",
        predicate: resilience_high,
        message: "회복탄력성이 많이 낮아진 상태예요. 혼자 해결하려 하기보다 전문가의 도움을 꼭 받아 보세요.",
        severity: Severity::Error,
    },
    FeedbackRule {
        id: "resilience_caution",
        predicate: resilience_caution,
        message: "스트레스를 다루는 나만의 방법(산책, 취미, 대화 등)을 정해 꾸준히 실천해 보세요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "resilience_low",
        predicate: resilience_low,
        message: "어려움 속에서도 잘 회복하고 계세요! 지금의 긍정적인 습관을 계속 이어가세요.",
        severity: Severity::Success,
    },
    FeedbackRule {
        id: "diet_seasoning",
        predicate: diet_seasoning,
        message: "음식을 싱겁게 드시는 습관이 필요해요. 소금과 장류 사용을 조금씩 줄여 보세요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "diet_freshness",
        predicate: diet_freshness,
        message: "신선한 식재료로 만든 음식을 드셔 보세요. 오래 보관한 음식이나 가공식품은 줄이는 것이 좋아요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "diet_plant_based",
        predicate: diet_plant_based,
        message: "채소, 과일, 통곡물 위주의 식단을 늘려 보세요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "diet_meat",
        predicate: diet_meat,
        message: "붉은 고기와 가공육 섭취를 적당히 조절해 보세요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "diet_carbohydrate",
        predicate: diet_carbohydrate,
        message: "밥, 면, 빵 등 탄수화물 섭취가 지나치지 않도록 조절해 보세요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "diet_anticancer",
        predicate: diet_anticancer,
        message: "브로콜리, 마늘, 토마토처럼 항암 효과가 알려진 식품을 식단에 더해 보세요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "alcohol",
        predicate: alcohol,
        message: "음주는 건강 회복에 부담이 될 수 있어요. 술을 줄이거나 끊는 것을 권해 드려요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "smoking",
        predicate: smoking,
        message: "흡연은 재발과 합병증 위험을 높여요. 금연 클리닉의 도움을 받아 금연을 시작해 보세요.",
        severity: Severity::Warning,
    },
    FeedbackRule {
        id: "exercise",
        predicate: exercise,
        message: "가벼운 걷기나 스트레칭부터 시작해 보세요. 하루 10분의 움직임도 도움이 돼요.",
        severity: Severity::Info,
    },
];

/// Look up a rule by id.
pub fn rule(id: &str) -> Option<&'static FeedbackRule> {
    RULES.iter().find(|r| r.id == id)
}

fn counseling_escalation(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    // Tier first so a malformed reason list cannot mask a high-risk burden.
    if ctx.tier(DomainId::PsychologicalBurden) == Some(RiskTier::High) {
        return Ok(true);
    }
    let reasons = ctx.reasons(keys::HEALTH_DIFFICULTY_REASONS)?;
    Ok(reasons
        .iter()
        .any(|reason| COUNSELING_REASONS.iter().any(|phrase| reason.contains(phrase))))
}

fn resilience_high(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    Ok(ctx.tier(DomainId::Resilience) == Some(RiskTier::High))
}

fn resilience_caution(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    Ok(ctx.tier(DomainId::Resilience) == Some(RiskTier::Caution))
}

fn resilience_low(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    Ok(ctx.tier(DomainId::Resilience) == Some(RiskTier::Low))
}

fn at_or_below(ctx: &RuleContext<'_>, key: &str, max: f64) -> Result<bool, RuleError> {
    Ok(ctx.likert(key)?.is_some_and(|v| v <= max))
}

fn diet_seasoning(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::DIET_SEASONING, LIFESTYLE_WARNING_MAX)
}

fn diet_freshness(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::DIET_FRESHNESS, LIFESTYLE_WARNING_MAX)
}

fn diet_plant_based(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::DIET_PLANT_BASED, LIFESTYLE_WARNING_MAX)
}

fn diet_meat(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::DIET_MEAT, LIFESTYLE_WARNING_MAX)
}

fn diet_carbohydrate(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::DIET_CARBOHYDRATE, LIFESTYLE_WARNING_MAX)
}

fn diet_anticancer(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::DIET_ANTICANCER, LIFESTYLE_WARNING_MAX)
}

fn alcohol(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::ALCOHOL, LIFESTYLE_WARNING_MAX)
}

fn smoking(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    at_or_below(ctx, keys::SMOKING, LIFESTYLE_WARNING_MAX)
}

fn exercise(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    Ok(ctx.likert(keys::EXERCISE)?.is_some_and(|v| v == 1.0 || v == 2.0))
}
