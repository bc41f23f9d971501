use astra_core::models::language::Language;

use crate::{
    LanguagePack, NarrativeTemplates, OptionLabels, PainStyles, QuestionCopy, QuestionCopySet,
};

pub(crate) static PACK: LanguagePack = LanguagePack {
    language: Language::En,
    options: OptionLabels {
        regions: &[
            ("neck", "Neck & shoulders"),
            ("mid_back", "Mid-back"),
            ("lower_back", "Lower back & sacrum"),
            ("hip", "Hip & pelvis"),
            ("knee", "Knee & leg"),
            ("ankle", "Ankle & foot"),
            ("shoulder", "Shoulder & arm"),
        ],
        region_general: "your kinetic chain",
        duration: &[
            ("acute", "< 2 weeks"),
            ("subacute", "2-6 weeks"),
            ("chronic", "6-12 weeks"),
            ("persistent", "> 3 months"),
        ],
        duration_default: "moderate duration",
        pain_quality: &[
            ("sharp", "Sharp / stabbing"),
            ("dull", "Dull / heavy ache"),
            ("burning", "Burning / electric"),
            ("throbbing", "Pulsating / throbbing"),
        ],
        symptoms: &[
            ("stiffness", "Morning stiffness"),
            ("tingling", "Tingling or numbness"),
            ("swelling", "Swelling or inflammation"),
            ("weakness", "Muscle weakness"),
            ("headaches", "Headaches or migraines"),
            ("clicking", "Joint clicking"),
        ],
        lifestyle: &[
            ("desk", "Desk work / long sitting"),
            ("lifting", "Heavy lifting"),
            ("sports", "High-impact sports"),
            ("stress", "High stress levels"),
            ("hydration", "Low hydration"),
            ("sleep", "Irregular sleep schedule"),
        ],
        sleep: &[
            ("excellent", "Excellent (7-8 hrs uninterrupted)"),
            ("good", "Good (6-7 hrs, minor disturbances)"),
            ("fair", "Fair (5-6 hrs, broken sleep)"),
            ("poor", "Poor (<5 hrs, restless)"),
        ],
        mobility: &[
            ("free", "Full range, no limitation"),
            ("mild", "Mild stiffness with activity"),
            ("moderate", "Noticeable restriction daily"),
            ("severe", "Severe limitation, needs support"),
        ],
    },
    questions: QuestionCopySet {
        region: QuestionCopy {
            title: "Where are you feeling discomfort?",
            subtitle: "Select up to two regions that feel most irritated today.",
        },
        intensity: QuestionCopy {
            title: "How intense is the pain right now?",
            subtitle: "0 = calm, 10 = unbearable. Slide to the level that best represents your current intensity.",
        },
        duration: QuestionCopy {
            title: "How long has this discomfort persisted?",
            subtitle: "Understanding duration helps the AI balance acute vs. chronic patterns.",
        },
        pain_quality: QuestionCopy {
            title: "Which description fits the pain quality?",
            subtitle: "Pick the closest match so the AI can classify the tissue response.",
        },
        symptoms: QuestionCopy {
            title: "Any other symptoms accompanying the pain?",
            subtitle: "Select up to three signs you have noticed recently.",
        },
        lifestyle: QuestionCopy {
            title: "Lifestyle or daily habits influencing the pain?",
            subtitle: "Choose all that apply. These help estimate recovery velocity.",
        },
        sleep: QuestionCopy {
            title: "How are you sleeping lately?",
            subtitle: "Poor sleep can slow down healing. Let us know your recent trend.",
        },
        mobility: QuestionCopy {
            title: "Mobility impact check",
            subtitle: "How much is movement limited during daily tasks?",
        },
    },
    narrative: NarrativeTemplates {
        summary: "Your responses point toward a musculoskeletal pattern that most often affects the {{ region }}.",
        diagnosis: "Likely {{ pain_style }} impacting the {{ region }}.",
        plan: "Begin with guided mobility work, hydration, and scheduled rest. Layer in targeted physiotherapy 2-3x per week and monitor symptom changes every 72 hours.",
        timeline: "Based on your duration profile ({{ duration }}), a recovery window of 4-6 weeks is realistic when treatment is consistent.",
        deep_dive: "The pattern of intensity, duration, and lifestyle habits suggests soft-tissue overload with compensatory guarding. Focus on posture recalibration, core stability drills, and gentle neural glides.",
        disclaimer: "These insights are informational and do not replace personalised medical advice. Please consult a licensed clinician for a definitive diagnosis.",
    },
    pain_styles: PainStyles {
        sharp: "acute sharp strain",
        dull: "chronic dull ache",
        burning: "neuropathic burning irritation",
        throbbing: "vascular throbbing stress",
    },
};
