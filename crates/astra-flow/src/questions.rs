use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use astra_core::models::question::{OptionGroup, QuestionId};
use astra_core::models::session::Responses;

/// How a question is asked and what answer shape it accepts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    SingleChoice {
        group: OptionGroup,
    },
    MultiChoice {
        group: OptionGroup,
        max_selections: usize,
    },
    Slider {
        range: SliderRange,
    },
}

/// Inclusive numeric range for slider questions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        let offset = value - self.min;
        let remainder = offset % self.step;
        // Allow floating point tolerance
        remainder < 1e-9 || (self.step - remainder) < 1e-9
    }
}

/// When a question appears in the active list.
///
/// Predicates are pure and may only read answers to questions that come
/// earlier in the base order, so inclusion can never depend on itself.
#[derive(Debug, Clone)]
pub enum Inclusion {
    Always,
    /// Included once the intensity answer reaches the threshold.
    /// An unanswered intensity counts as zero.
    IntensityAtLeast(f64),
    /// Included when any of the given region keys was selected.
    RegionAnyOf(&'static [&'static str]),
}

impl Inclusion {
    pub fn applies(&self, responses: &Responses) -> bool {
        match self {
            Inclusion::Always => true,
            Inclusion::IntensityAtLeast(threshold) => {
                let intensity = responses
                    .get(&QuestionId::Intensity)
                    .and_then(|a| a.as_scale())
                    .unwrap_or(0.0);
                intensity >= *threshold
            }
            Inclusion::RegionAnyOf(regions) => responses
                .get(&QuestionId::Region)
                .and_then(|a| a.as_multi())
                .is_some_and(|selected| {
                    selected.iter().any(|r| regions.contains(&r.as_str()))
                }),
        }
    }
}

/// One entry in the canonical question flow.
#[derive(Debug, Clone)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub optional: bool,
    pub inclusion: Inclusion,
}

/// The canonical question order. Fixed at startup — the active list is
/// always a filtered view of this, never a reordering.
pub fn base_order() -> &'static [QuestionDefinition] {
    static FLOW: LazyLock<Vec<QuestionDefinition>> = LazyLock::new(|| {
        vec![
            QuestionDefinition {
                id: QuestionId::Region,
                kind: QuestionKind::MultiChoice {
                    group: OptionGroup::Regions,
                    max_selections: 2,
                },
                optional: false,
                inclusion: Inclusion::Always,
            },
            QuestionDefinition {
                id: QuestionId::Intensity,
                kind: QuestionKind::Slider {
                    range: SliderRange {
                        min: 0.0,
                        max: 10.0,
                        step: 1.0,
                    },
                },
                optional: false,
                inclusion: Inclusion::Always,
            },
            QuestionDefinition {
                id: QuestionId::Duration,
                kind: QuestionKind::SingleChoice {
                    group: OptionGroup::Duration,
                },
                optional: false,
                inclusion: Inclusion::Always,
            },
            QuestionDefinition {
                id: QuestionId::PainQuality,
                kind: QuestionKind::SingleChoice {
                    group: OptionGroup::PainQuality,
                },
                optional: false,
                inclusion: Inclusion::Always,
            },
            QuestionDefinition {
                id: QuestionId::Symptoms,
                kind: QuestionKind::MultiChoice {
                    group: OptionGroup::Symptoms,
                    max_selections: 3,
                },
                optional: true,
                inclusion: Inclusion::Always,
            },
            QuestionDefinition {
                id: QuestionId::Lifestyle,
                kind: QuestionKind::MultiChoice {
                    group: OptionGroup::Lifestyle,
                    max_selections: 3,
                },
                optional: true,
                inclusion: Inclusion::Always,
            },
            QuestionDefinition {
                id: QuestionId::Sleep,
                kind: QuestionKind::SingleChoice {
                    group: OptionGroup::Sleep,
                },
                optional: false,
                inclusion: Inclusion::IntensityAtLeast(6.0),
            },
            QuestionDefinition {
                id: QuestionId::Mobility,
                kind: QuestionKind::SingleChoice {
                    group: OptionGroup::Mobility,
                },
                optional: true,
                inclusion: Inclusion::RegionAnyOf(&["hip", "knee", "ankle"]),
            },
        ]
    });
    &FLOW
}
