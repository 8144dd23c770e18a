//! Closed vocabularies: supported object types, locale codes, and the
//! accepted Internet media types for each media reference.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Global object types grouped by vertical.
pub const TYPE_CATEGORIES: &[(&str, &[&str])] = &[
    ("activities", &["activity", "sport"]),
    ("businesses", &["bar", "cafe", "company", "hotel", "restaurant"]),
    ("groups", &["cause", "sport_league", "sport_team"]),
    (
        "organizations",
        &["band", "government", "non_profit", "school", "university"],
    ),
    (
        "people",
        &[
            "actor",
            "athlete",
            "author",
            "director",
            "musician",
            "politician",
            "profile",
            "public_figure",
        ],
    ),
    ("places", &["city", "country", "landmark", "state_province"]),
    (
        "products",
        &[
            "album", "book", "drink", "food", "game", "movie", "product", "song", "tv_show",
        ],
    ),
    ("websites", &["article", "blog", "website"]),
];

/// Namespaced structured types that pages use alongside the global list.
pub const VERTICAL_TYPES: &[&str] = &[
    "music.song",
    "music.album",
    "music.playlist",
    "music.radio_station",
    "video.movie",
    "video.episode",
    "video.tv_show",
    "video.other",
];

static TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    TYPE_CATEGORIES
        .iter()
        .flat_map(|(_, types)| types.iter().copied())
        .chain(VERTICAL_TYPES.iter().copied())
        .collect()
});

pub fn is_supported_type(value: &str) -> bool {
    TYPES.contains(value)
}

/// Locale codes accepted for `og:locale` (the Facebook locale list).
pub const LOCALES: &[&str] = &[
    "af_ZA", "ar_AR", "az_AZ", "be_BY", "bg_BG", "bn_IN", "bs_BA", "ca_ES", "cs_CZ", "cy_GB",
    "da_DK", "de_DE", "el_GR", "en_GB", "en_US", "eo_EO", "es_ES", "es_LA", "et_EE", "eu_ES",
    "fa_IR", "fi_FI", "fo_FO", "fr_CA", "fr_FR", "fy_NL", "ga_IE", "gl_ES", "he_IL", "hi_IN",
    "hr_HR", "hu_HU", "hy_AM", "id_ID", "is_IS", "it_IT", "ja_JP", "ka_GE", "km_KH", "ko_KR",
    "ku_TR", "la_VA", "lt_LT", "lv_LV", "mk_MK", "ml_IN", "ms_MY", "nb_NO", "ne_NP", "nl_NL",
    "nn_NO", "pa_IN", "pl_PL", "ps_AF", "pt_BR", "pt_PT", "ro_RO", "ru_RU", "sk_SK", "sl_SI",
    "sq_AL", "sr_RS", "sv_SE", "sw_KE", "ta_IN", "te_IN", "th_TH", "tl_PH", "tr_TR", "uk_UA",
    "vi_VN", "zh_CN", "zh_HK", "zh_TW",
];

static LOCALE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| LOCALES.iter().copied().collect());

pub fn is_supported_locale(value: &str) -> bool {
    LOCALE_SET.contains(value)
}

/// Accepted Content-Types when verifying an `og:image` URL.
pub const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/svg+xml"];

/// Accepted Content-Types when verifying an `og:audio` URL.
pub const AUDIO_TYPES: &[&str] = &["audio/mpeg", "audio/ogg", "audio/mp4"];

/// Accepted Content-Types when verifying an `og:video` URL.
pub const VIDEO_TYPES: &[&str] = &[
    "video/mp4",
    "video/ogg",
    "video/webm",
    "application/x-shockwave-flash",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_types_are_supported() {
        assert!(is_supported_type("article"));
        assert!(is_supported_type("website"));
        assert!(is_supported_type("public_figure"));
    }

    #[test]
    fn vertical_types_are_supported() {
        assert!(is_supported_type("video.movie"));
        assert!(is_supported_type("music.radio_station"));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(!is_supported_type("webpage"));
        assert!(!is_supported_type(""));
    }

    #[test]
    fn locale_lookup_is_exact() {
        assert!(is_supported_locale("en_US"));
        assert!(is_supported_locale("zh_TW"));
        assert!(!is_supported_locale("en_us"));
        assert!(!is_supported_locale("en"));
    }
}
