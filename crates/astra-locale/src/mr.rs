use astra_core::models::language::Language;

use crate::{
    LanguagePack, NarrativeTemplates, OptionLabels, PainStyles, QuestionCopy, QuestionCopySet,
};

pub(crate) static PACK: LanguagePack = LanguagePack {
    language: Language::Mr,
    options: OptionLabels {
        regions: &[
            ("neck", "मान आणि खांदे"),
            ("mid_back", "मध्य पाठीचा भाग"),
            ("lower_back", "कंबर व सॅक्रम"),
            ("hip", "हिप व पेल्विस"),
            ("knee", "गुडघा व पाय"),
            ("ankle", "घोटा व पंजा"),
            ("shoulder", "खांदा व हात"),
        ],
        region_general: "तुमची स्नायूंची साखळी",
        duration: &[
            ("acute", "2 आठवड्यांपेक्षा कमी"),
            ("subacute", "2-6 आठवडे"),
            ("chronic", "6-12 आठवडे"),
            ("persistent", "3 महिन्यांपेक्षा जास्त"),
        ],
        duration_default: "मध्यम कालावधी",
        pain_quality: &[
            ("sharp", "तीक्ष्ण / भोसकणारी"),
            ("dull", "बोथट / जड वेदना"),
            ("burning", "जळजळ / वीजेसारखी"),
            ("throbbing", "धडधडणारी"),
        ],
        symptoms: &[
            ("stiffness", "सकाळी कडकपणा"),
            ("tingling", "सुन्नपणा किंवा झिणझिण्या"),
            ("swelling", "सुज किंवा दाह"),
            ("weakness", "स्नायू दुर्बलता"),
            ("headaches", "डोकेदुखी / माइग्रेन"),
            ("clicking", "सांध्यात आवाज"),
        ],
        lifestyle: &[
            ("desk", "डेस्क जॉब / बसणे"),
            ("lifting", "जड वजन उचलणे"),
            ("sports", "हाय-इम्पॅक्ट खेळ"),
            ("stress", "जास्त ताण"),
            ("hydration", "कमी पाणी पिणे"),
            ("sleep", "अनियमित झोप"),
        ],
        sleep: &[
            ("excellent", "उत्कृष्ट (7-8 तास)"),
            ("good", "चांगली (6-7 तास)"),
            ("fair", "मध्यम (5-6 तास)"),
            ("poor", "कमजोर (<5 तास)"),
        ],
        mobility: &[
            ("free", "पूर्ण हालचाल, अडथळा नाही"),
            ("mild", "हलकी कडकपणा"),
            ("moderate", "दररोज मर्यादा जाणवते"),
            ("severe", "गंभीर मर्यादा, सहाय्याची गरज"),
        ],
    },
    questions: QuestionCopySet {
        region: QuestionCopy {
            title: "दुखणे कोणत्या भागात आहे?",
            subtitle: "आज सर्वाधिक त्रासदायक दोन भाग निवडा.",
        },
        intensity: QuestionCopy {
            title: "सध्या वेदना किती तीव्र आहे?",
            subtitle: "0 = आराम, 10 = असह्य. योग्य पातळीवर स्लायडर सेट करा.",
        },
        duration: QuestionCopy {
            title: "ही अस्वस्थता किती काळापासून आहे?",
            subtitle: "कालावधी समजल्याने तीव्र व दीर्घकालीन वेदनांमध्ये फरक ओळखता येतो.",
        },
        pain_quality: QuestionCopy {
            title: "वेदनेचा प्रकार कसा आहे?",
            subtitle: "सर्वात जवळची व्याख्या निवडा.",
        },
        symptoms: QuestionCopy {
            title: "इतर कोणती लक्षणे आहेत?",
            subtitle: "जास्तीत जास्त तीन लक्षणे निवडा.",
        },
        lifestyle: QuestionCopy {
            title: "जीवनशैलीतील कोणत्या सवयी परिणाम करत आहेत?",
            subtitle: "लागू असलेले सर्व पर्याय निवडा.",
        },
        sleep: QuestionCopy {
            title: "अलीकडे झोप कशी आहे?",
            subtitle: "कमकुवत झोप बरे होण्यास वेळ लावू शकते.",
        },
        mobility: QuestionCopy {
            title: "हालचालीवर परिणाम",
            subtitle: "दररोजच्या कामांमध्ये किती मर्यादा येतात?",
        },
    },
    narrative: NarrativeTemplates {
        summary: "{{ region }} भागात स्नायू व सांध्यांवर ताणाची चिन्हे दिसत आहेत.",
        diagnosis: "बहुधा {{ pain_style }} ज्याचा परिणाम {{ region }} वर होत आहे.",
        plan: "नियमित स्ट्रेचिंग, श्वसन प्रशिक्षण आणि आठवड्यातून 2-3 वेळा फिजिओथेरपी सत्र करा. लक्षणांचा आढावा दर तिसऱ्या दिवशी घ्या.",
        timeline: "{{ duration }} या कालावधीनुसार सातत्यपूर्ण उपचारांनी 4-6 आठवड्यांत सुधार अपेक्षित आहे.",
        deep_dive: "तीव्रता, कालावधी आणि जीवनशैली सवयी सूचित करतात की संयोजी ऊतकांवर अतिरिक्त ताण आला आहे. शरीरबांधणी दुरुस्ती, कोर स्थिरता आणि सौम्य न्यूरो-मोबिलायझेशन वापरा.",
        disclaimer: "ही माहिती वैद्यकीय निदानाची जागा घेत नाही. कृपया तज्ञ फिजिओथेरपिस्टचा सल्ला घ्या.",
    },
    pain_styles: PainStyles {
        sharp: "तीक्ष्ण स्नायू ताण",
        dull: "जुना बोथट वेदना",
        burning: "तंत्रिकाजन्य जळजळ",
        throbbing: "धडधडणारा रक्तवाहिनीतला ताण",
    },
};
