use astra_core::models::language::Language;

use crate::{
    LanguagePack, NarrativeTemplates, OptionLabels, PainStyles, QuestionCopy, QuestionCopySet,
};

pub(crate) static PACK: LanguagePack = LanguagePack {
    language: Language::Hi,
    options: OptionLabels {
        regions: &[
            ("neck", "गर्दन और कंधे"),
            ("mid_back", "मध्य पीठ"),
            ("lower_back", "निचली पीठ व सैक्रम"),
            ("hip", "हिप व पेल्विस"),
            ("knee", "घुटना व पैर"),
            ("ankle", "टखना व पंजा"),
            ("shoulder", "कंधा व भुजा"),
        ],
        region_general: "आपकी गतिशील श्रृंखला",
        duration: &[
            ("acute", "2 सप्ताह से कम"),
            ("subacute", "2-6 सप्ताह"),
            ("chronic", "6-12 सप्ताह"),
            ("persistent", "3 माह से अधिक"),
        ],
        duration_default: "मध्यम अवधि",
        pain_quality: &[
            ("sharp", "तीखा / चुभन"),
            ("dull", "भारी / सुन्न दर्द"),
            ("burning", "जलन / बिजली जैसा"),
            ("throbbing", "धड़कता / धड़कन"),
        ],
        symptoms: &[
            ("stiffness", "सुबह अकड़न"),
            ("tingling", "झुनझुनी या सुन्नपन"),
            ("swelling", "सूजन या सूजन"),
            ("weakness", "मांसपेशी कमजोरी"),
            ("headaches", "सिरदर्द / माइग्रेन"),
            ("clicking", "जोड़ों में आवाज़"),
        ],
        lifestyle: &[
            ("desk", "डेस्क जॉब / बैठना"),
            ("lifting", "भारी वजन उठाना"),
            ("sports", "हाई-इम्पैक्ट खेल"),
            ("stress", "उच्च तनाव"),
            ("hydration", "कम पानी पीना"),
            ("sleep", "अनियमित नींद"),
        ],
        sleep: &[
            ("excellent", "उत्कृष्ट (7-8 घं.)"),
            ("good", "अच्छी (6-7 घं.)"),
            ("fair", "औसत (5-6 घं.)"),
            ("poor", "कमज़ोर (<5 घं.)"),
        ],
        mobility: &[
            ("free", "पूर्ण गति, कोई बाधा नहीं"),
            ("mild", "हल्की जकड़न"),
            ("moderate", "दैनिक गतिविधि में कठिनाई"),
            ("severe", "गंभीर बाधा, सहारे की ज़रूरत"),
        ],
    },
    questions: QuestionCopySet {
        region: QuestionCopy {
            title: "कौन-से हिस्से में दर्द है?",
            subtitle: "आज सबसे ज़्यादा प्रभावित दो क्षेत्रों तक चुनें।",
        },
        intensity: QuestionCopy {
            title: "दर्द की तीव्रता कितनी है?",
            subtitle: "0 = आराम, 10 = असहनीय। स्लाइडर को सही स्तर पर रखें।",
        },
        duration: QuestionCopy {
            title: "यह असुविधा कब से चल रही है?",
            subtitle: "अवधि समझने से एआई को तीव्र/दीर्घकालिक अंतर समझने में मदद मिलती है।",
        },
        pain_quality: QuestionCopy {
            title: "दर्द का स्वरूप कैसा है?",
            subtitle: "सबसे नज़दीकी विवरण चुनें ताकि एआई ऊतक प्रतिक्रिया समझ सके।",
        },
        symptoms: QuestionCopy {
            title: "क्या अन्य लक्षण भी हैं?",
            subtitle: "तीन तक संकेत चुनें जो आपने महसूस किए हैं।",
        },
        lifestyle: QuestionCopy {
            title: "जीवनशैली की कौन-सी आदतें असर डाल रही हैं?",
            subtitle: "सभी लागू विकल्प चुनें।",
        },
        sleep: QuestionCopy {
            title: "हाल में नींद कैसी रही?",
            subtitle: "कमजोर नींद रिकवरी को धीमा कर सकती है।",
        },
        mobility: QuestionCopy {
            title: "गतिशीलता पर असर",
            subtitle: "रोज़मर्रा के कार्यों में कितनी बाधा है?",
        },
    },
    narrative: NarrativeTemplates {
        summary: "{{ region }} क्षेत्र में मांसपेशीय असंतुलन के संकेत मिल रहे हैं।",
        diagnosis: "संभावित रूप से {{ pain_style }} जो {{ region }} को प्रभावित कर रहा है।",
        plan: "निर्देशित स्ट्रेचिंग, हल्के व्यायाम और पर्याप्त आराम अपनाएँ। सप्ताह में 2-3 बार फिजियोथेरेपी सेशन लें और हर 3 दिन में प्रगति जाँचें।",
        timeline: "{{ duration }} की अवधि के अनुसार, नियमित देखभाल के साथ 4-6 हफ्तों में सुधार संभव है।",
        deep_dive: "तीव्रता, अवधि और जीवनशैली उत्तर बताते हैं कि नरम ऊतक पर अधिक भार और सुरक्षा-प्रतिक्रिया मौजूद है। मुद्रा सुधार, कोर स्थिरता और कोमल तंत्रिका अभ्यास पर ध्यान दें।",
        disclaimer: "ये जानकारियाँ केवल शैक्षणिक उद्देश्यों के लिए हैं। निश्चित निदान के लिए प्रमाणित विशेषज्ञ से परामर्श करें।",
    },
    pain_styles: PainStyles {
        sharp: "तीव्र चुभन वाला तनाव",
        dull: "पुरानी भारी जकड़न",
        burning: "नाड़ी संबंधी जलन",
        throbbing: "धड़कता रक्त-प्रवाह तनाव",
    },
};
