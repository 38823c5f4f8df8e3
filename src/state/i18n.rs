use std::collections::BTreeMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    ZhHant,
}

impl Language {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::ZhHant]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhHant => "zh-Hant",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "zh-Hant" => Some(Self::ZhHant),
            _ => None,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => "language.option.en",
            Self::ZhHant => "language.option.zh_hant",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::En => include_str!("../../assets/i18n/en.json"),
            Self::ZhHant => include_str!("../../assets/i18n/zh-Hant.json"),
        }
    }
}

/// Looks up a UI string in the active language, falling back to English and
/// finally to the key itself.
pub fn tr(language: Language, key: &'static str) -> &'static str {
    catalog(language)
        .get(key)
        .map(String::as_str)
        .or_else(|| catalog(Language::En).get(key).map(String::as_str))
        .unwrap_or(key)
}

fn catalog(language: Language) -> &'static BTreeMap<String, String> {
    static CATALOGS: OnceLock<BTreeMap<&'static str, BTreeMap<String, String>>> = OnceLock::new();
    let catalogs = CATALOGS.get_or_init(|| {
        Language::all()
            .iter()
            .map(|lang| (lang.code(), parse_catalog(*lang)))
            .collect()
    });
    &catalogs[language.code()]
}

fn parse_catalog(language: Language) -> BTreeMap<String, String> {
    serde_json::from_str(language.source()).unwrap_or_else(|err| {
        panic!(
            "failed to parse i18n catalog for language '{}': {err}",
            language.code()
        )
    })
}
