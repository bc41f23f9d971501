//! astra-locale
//!
//! Static localization tables: option labels, question copy, and the
//! narrative templates the fallback insight renderer substitutes into.
//! Pure data — read by key, never mutated.

mod en;
mod hi;
mod mr;

use astra_core::models::language::Language;
use astra_core::models::question::{OptionGroup, QuestionId};

/// A `(key, label)` table for one option group.
pub type OptionTable = &'static [(&'static str, &'static str)];

/// Everything one language supplies to the rest of the system.
pub struct LanguagePack {
    pub language: Language,
    pub options: OptionLabels,
    pub questions: QuestionCopySet,
    pub narrative: NarrativeTemplates,
    pub pain_styles: PainStyles,
}

/// Option labels per group, plus the two non-selectable fallbacks the
/// narrative renderer uses when a group went unanswered.
pub struct OptionLabels {
    pub regions: OptionTable,
    /// Narrative stand-in when no region was selected.
    pub region_general: &'static str,
    pub duration: OptionTable,
    /// Narrative stand-in when duration went unanswered.
    pub duration_default: &'static str,
    pub pain_quality: OptionTable,
    pub symptoms: OptionTable,
    pub lifestyle: OptionTable,
    pub sleep: OptionTable,
    pub mobility: OptionTable,
}

impl OptionLabels {
    pub fn group(&self, group: OptionGroup) -> OptionTable {
        match group {
            OptionGroup::Regions => self.regions,
            OptionGroup::Duration => self.duration,
            OptionGroup::PainQuality => self.pain_quality,
            OptionGroup::Symptoms => self.symptoms,
            OptionGroup::Lifestyle => self.lifestyle,
            OptionGroup::Sleep => self.sleep,
            OptionGroup::Mobility => self.mobility,
        }
    }

    pub fn label(&self, group: OptionGroup, key: &str) -> Option<&'static str> {
        self.group(group)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
    }

    /// The label for a key, or the key itself when it is unknown.
    pub fn label_or_key<'a>(&self, group: OptionGroup, key: &'a str) -> &'a str {
        self.label(group, key).unwrap_or(key)
    }
}

/// Title and subtitle shown above a question.
pub struct QuestionCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct QuestionCopySet {
    pub region: QuestionCopy,
    pub intensity: QuestionCopy,
    pub duration: QuestionCopy,
    pub pain_quality: QuestionCopy,
    pub symptoms: QuestionCopy,
    pub lifestyle: QuestionCopy,
    pub sleep: QuestionCopy,
    pub mobility: QuestionCopy,
}

impl QuestionCopySet {
    pub fn get(&self, id: QuestionId) -> &QuestionCopy {
        match id {
            QuestionId::Region => &self.region,
            QuestionId::Intensity => &self.intensity,
            QuestionId::Duration => &self.duration,
            QuestionId::PainQuality => &self.pain_quality,
            QuestionId::Symptoms => &self.symptoms,
            QuestionId::Lifestyle => &self.lifestyle,
            QuestionId::Sleep => &self.sleep,
            QuestionId::Mobility => &self.mobility,
        }
    }
}

/// Tera templates for the fallback narrative. Variables: `region`,
/// `pain_style`, `duration`. Plan, deep dive, and disclaimer are fixed text.
pub struct NarrativeTemplates {
    pub summary: &'static str,
    pub diagnosis: &'static str,
    pub plan: &'static str,
    pub timeline: &'static str,
    pub deep_dive: &'static str,
    pub disclaimer: &'static str,
}

/// Descriptive phrase per pain-quality category.
pub struct PainStyles {
    pub sharp: &'static str,
    pub dull: &'static str,
    pub burning: &'static str,
    pub throbbing: &'static str,
}

impl PainStyles {
    /// The phrase for a pain-quality key. Unknown keys read as `dull`,
    /// matching how the narrative defaults an unanswered pain quality.
    pub fn phrase(&self, key: &str) -> &'static str {
        match key {
            "sharp" => self.sharp,
            "burning" => self.burning,
            "throbbing" => self.throbbing,
            _ => self.dull,
        }
    }
}

/// The pack for a language. Total — every language has a pack.
pub fn pack(language: Language) -> &'static LanguagePack {
    match language {
        Language::En => &en::PACK,
        Language::Hi => &hi::PACK,
        Language::Mr => &mr::PACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_pack() {
        for language in [Language::En, Language::Hi, Language::Mr] {
            assert_eq!(pack(language).language, language);
        }
    }

    #[test]
    fn label_lookup_falls_back_to_the_key() {
        let labels = &pack(Language::En).options;
        assert_eq!(labels.label(OptionGroup::Regions, "knee"), Some("Knee & leg"));
        assert_eq!(labels.label(OptionGroup::Regions, "elbow"), None);
        assert_eq!(labels.label_or_key(OptionGroup::Regions, "elbow"), "elbow");
    }

    #[test]
    fn all_packs_cover_the_same_option_keys() {
        let groups = [
            OptionGroup::Regions,
            OptionGroup::Duration,
            OptionGroup::PainQuality,
            OptionGroup::Symptoms,
            OptionGroup::Lifestyle,
            OptionGroup::Sleep,
            OptionGroup::Mobility,
        ];
        let reference = &pack(Language::En).options;
        for language in [Language::Hi, Language::Mr] {
            let other = &pack(language).options;
            for group in groups {
                let keys: Vec<&str> = reference.group(group).iter().map(|(k, _)| *k).collect();
                let other_keys: Vec<&str> = other.group(group).iter().map(|(k, _)| *k).collect();
                assert_eq!(keys, other_keys, "{language} {group:?}");
            }
        }
    }

    #[test]
    fn unknown_pain_style_reads_as_dull() {
        let styles = &pack(Language::En).pain_styles;
        assert_eq!(styles.phrase("stabbing"), styles.dull);
        assert_eq!(styles.phrase("burning"), "neuropathic burning irritation");
    }
}
