//! Deterministic, network-free insight generation.
//!
//! Total over every possible response shape: every input is defaulted, so
//! this path never fails, performs no I/O, and always returns the same
//! output for the same answers.

use tera::{Context, Tera};
use tracing::warn;

use astra_core::models::insight::{InsightMetrics, InsightResult, RiskBand};
use astra_core::models::question::{OptionGroup, QuestionId};
use astra_core::models::session::Responses;
use astra_locale::LanguagePack;

/// Build the fallback insight for an answer set.
pub fn generate(responses: &Responses, pack: &LanguagePack) -> InsightResult {
    let labels = &pack.options;

    let intensity = responses
        .get(&QuestionId::Intensity)
        .and_then(|a| a.as_scale())
        .unwrap_or(5.0);
    let duration_key = responses
        .get(&QuestionId::Duration)
        .and_then(|a| a.as_single());
    let lifestyle_count = responses
        .get(&QuestionId::Lifestyle)
        .and_then(|a| a.as_multi())
        .map(|l| l.len())
        .unwrap_or(0);
    let sleep_key = responses
        .get(&QuestionId::Sleep)
        .and_then(|a| a.as_single());

    let duration_score = duration_score(duration_key);
    let lifestyle_score = (lifestyle_count * 3) as f64;

    let pain_index = (intensity * 9.0 + duration_score + lifestyle_score)
        .round()
        .clamp(0.0, 100.0) as u32;
    let sleep_bonus = if sleep_key == Some("good") { 6.0 } else { 0.0 };
    let confidence = (92.0 - intensity * 4.0 + sleep_bonus)
        .clamp(35.0, 94.0)
        .round() as u32;
    let risk_score = round2(f64::from(pain_index) / 130.0).clamp(0.05, 0.95);
    let risk_band = RiskBand::from_score(risk_score);
    let recovery_curve = recovery_curve(intensity, sleep_key);

    // Narrative inputs. Unanswered questions read as their generic labels
    // so the text never has holes.
    let region_label = responses
        .get(&QuestionId::Region)
        .and_then(|a| a.as_multi())
        .filter(|selected| !selected.is_empty())
        .map(|selected| {
            selected
                .iter()
                .map(|key| labels.label_or_key(OptionGroup::Regions, key))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| labels.region_general.to_string());
    let duration_label = duration_key
        .and_then(|key| labels.label(OptionGroup::Duration, key))
        .unwrap_or(labels.duration_default);
    let pain_style = pack.pain_styles.phrase(
        responses
            .get(&QuestionId::PainQuality)
            .and_then(|a| a.as_single())
            .unwrap_or("dull"),
    );

    let mut context = Context::new();
    context.insert("region", &region_label);
    context.insert("pain_style", pain_style);
    context.insert("duration", duration_label);

    let metrics = InsightMetrics {
        pain_index,
        confidence,
        recovery_curve,
        risk_band,
    };

    InsightResult {
        summary: render(pack.narrative.summary, &context),
        probable_diagnosis: render(pack.narrative.diagnosis, &context),
        plan: vec![pack.narrative.plan.to_string()],
        timeline: render(pack.narrative.timeline, &context),
        risk_score,
        risk_band,
        deep_dive: pack.narrative.deep_dive.to_string(),
        disclaimer: pack.narrative.disclaimer.to_string(),
        metrics,
    }
}

fn duration_score(key: Option<&str>) -> f64 {
    match key {
        Some("acute") => 6.0,
        Some("subacute") => 12.0,
        Some("chronic") => 24.0,
        Some("persistent") => 32.0,
        _ => 14.0,
    }
}

/// The first five points are fixed; only the end point moves with
/// intensity and sleep. Observed behavior of the original heuristic,
/// kept as-is.
fn recovery_curve(intensity: f64, sleep_key: Option<&str>) -> [u32; 6] {
    let modifier = match sleep_key {
        Some("poor") => -8.0,
        Some("excellent") => 6.0,
        _ => 0.0,
    };
    let end = (100.0 - intensity * 5.0 + modifier).clamp(82.0, 96.0).round() as u32;
    [0, 25, 45, 60, 78, end]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a narrative template. Template failures degrade to the raw
/// template text — this path must stay total.
fn render(template: &str, context: &Context) -> String {
    let mut tera = Tera::default();
    let rendered = tera
        .add_raw_template("narrative", template)
        .and_then(|()| tera.render("narrative", context));
    match rendered {
        Ok(text) => text,
        Err(error) => {
            warn!(%error, "narrative template failed to render");
            template.to_string()
        }
    }
}
