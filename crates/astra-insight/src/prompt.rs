//! Prompt assembly for the external provider.
//!
//! The answers are labeled in the requested language so the model sees
//! what the user saw, not internal option keys.

use astra_core::models::language::Language;
use astra_core::models::question::{OptionGroup, QuestionId};
use astra_core::models::session::Responses;
use astra_locale::{LanguagePack, OptionLabels};

pub const SYSTEM_PROMPT: &str = "\
You are an empathetic physiotherapy assistant. Respond in valid JSON. \
Include summary, probableDiagnosis, plan (array), timeline, riskScore (0-1), \
deepDive, disclaimer, and metrics with painIndex, confidence, recoveryCurve \
(array of 6 numbers), and riskBand. Tone should be professional and \
supportive. Mention this is not a diagnosis.";

/// Build the user message describing the completed session.
pub fn build_prompt(responses: &Responses, language: Language, pack: &LanguagePack) -> String {
    let labels = &pack.options;

    let regions = joined(responses, QuestionId::Region, OptionGroup::Regions, labels);
    let intensity = responses
        .get(&QuestionId::Intensity)
        .and_then(|a| a.as_scale())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let duration = responses
        .get(&QuestionId::Duration)
        .and_then(|a| a.as_single())
        .map(|key| labels.label_or_key(OptionGroup::Duration, key))
        .unwrap_or("unknown");
    let pain_quality = responses
        .get(&QuestionId::PainQuality)
        .and_then(|a| a.as_single())
        .map(|key| labels.label_or_key(OptionGroup::PainQuality, key))
        .unwrap_or("not described");
    let symptoms = joined(responses, QuestionId::Symptoms, OptionGroup::Symptoms, labels);
    let lifestyle = joined(responses, QuestionId::Lifestyle, OptionGroup::Lifestyle, labels);
    let sleep = responses
        .get(&QuestionId::Sleep)
        .and_then(|a| a.as_single())
        .map(|key| labels.label_or_key(OptionGroup::Sleep, key))
        .unwrap_or("not specified");

    format!(
        "Language: {language}.\n\
         Pain region(s): {regions}.\n\
         Pain intensity (0-10): {intensity}.\n\
         Duration: {duration}.\n\
         Pain quality: {pain_quality}.\n\
         Associated symptoms: {symptoms}.\n\
         Lifestyle contributors: {lifestyle}.\n\
         Sleep quality: {sleep}.\n\
         Return insights in {language} that match the requested JSON schema.",
        regions = non_empty(&regions, "not specified"),
        symptoms = non_empty(&symptoms, "none reported"),
        lifestyle = non_empty(&lifestyle, "none reported"),
    )
}

fn joined(
    responses: &Responses,
    id: QuestionId,
    group: OptionGroup,
    labels: &OptionLabels,
) -> String {
    responses
        .get(&id)
        .and_then(|a| a.as_multi())
        .map(|selected| {
            selected
                .iter()
                .map(|key| labels.label_or_key(group, key))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
