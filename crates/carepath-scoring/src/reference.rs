//! Built-in reference tables for the intake instrument: item layout per
//! domain, reverse-coded items, population norms and overall comments.

use carepath_core::models::domain::DomainId;

use crate::config::{DomainDefinition, ReferenceStats};

/// Negatively worded items, by item number.
pub const REVERSE_ITEMS: &[u32] = &[2, 4, 20, 22, 23, 26, 31];

/// Whole-instrument norm, independent of the per-domain norms.
pub const OVERALL: ReferenceStats = ReferenceStats {
    mean: 3.38,
    sd: 0.52,
};

pub const COMMENT_HIGH: &str = "지금은 몸과 마음이 많이 지쳐 있는 시기로 보여요. 혼자 견디지 마시고 담당 사회복지사나 전문가와 함께 지금의 어려움을 나누어 보세요. 작은 도움이 큰 힘이 될 수 있어요.";
pub const COMMENT_CAUTION: &str = "전반적으로 잘 지내고 계시지만 일부 영역에서 관심이 필요해요. 아래의 안내를 참고하여 생활 습관을 조금씩 점검해 보시면 좋겠어요.";
pub const COMMENT_LOW: &str = "전반적으로 건강하게 잘 관리하고 계세요. 지금처럼 꾸준히 자신을 돌보는 습관을 이어가시길 응원합니다.";
pub const COMMENT_NO_DATA: &str = "해당 영역(섹션)은 응답하지 않아 점수 산출이 불가합니다.";

struct DomainRow {
    id: DomainId,
    label: &'static str,
    items: &'static [&'static str],
    mean: f64,
    sd: f64,
}

const DOMAINS: &[DomainRow] = &[
    DomainRow {
        id: DomainId::PhysicalChange,
        label: "신체적 변화",
        items: &["q1", "q2", "q3", "q4", "q5"],
        mean: 3.21,
        sd: 0.78,
    },
    DomainRow {
        id: DomainId::HealthManagement,
        label: "건강관리",
        items: &[
            "q6", "q7", "q8", "q9", "q10", "q11", "q12", "q13_1_1", "q13_1_2", "q13_1_3",
            "q13_1_4", "q13_1_5", "q13_1_6",
        ],
        mean: 3.47,
        sd: 0.58,
    },
    DomainRow {
        id: DomainId::SocialSupport,
        label: "사회적 지지",
        items: &["q14", "q15", "q16", "q17", "q18"],
        mean: 3.66,
        sd: 0.82,
    },
    DomainRow {
        id: DomainId::PsychologicalBurden,
        label: "심리적 부담",
        items: &["q19", "q20", "q21", "q22", "q23", "q24"],
        mean: 3.08,
        sd: 0.91,
    },
    DomainRow {
        id: DomainId::SocialBurden,
        label: "사회적 부담",
        items: &["q25", "q26", "q27", "q28"],
        mean: 3.29,
        sd: 0.86,
    },
    DomainRow {
        id: DomainId::Resilience,
        label: "회복탄력성",
        items: &["q29", "q30", "q31", "q32"],
        mean: 3.58,
        sd: 0.74,
    },
];

pub fn builtin_domains() -> Vec<DomainDefinition> {
    DOMAINS
        .iter()
        .map(|row| DomainDefinition {
            id: row.id,
            label: row.label.to_string(),
            items: row.items.iter().map(|k| k.to_string()).collect(),
            reference: ReferenceStats {
                mean: row.mean,
                sd: row.sd,
            },
        })
        .collect()
}
