use std::borrow::Cow;

use serde::Serialize;

use crate::locale::Locale;

// Offered for every locale. Labels are WHATWG labels so each entry resolves
// through the codec registry; latin1/utf-16le/utf-16be are the registry
// spellings of the usual latin-1/utf-16-le/utf-16-be names.
const UNIVERSAL: &[&str] = &[
    "utf-8",
    "ascii",
    "latin1",
    "iso-8859-1",
    "iso-8859-2",
    "windows-1250",
    "windows-1251",
    "windows-1252",
    "windows-1253",
    "utf-16",
    "utf-16le",
    "utf-16be",
];

const CHINESE: &[&str] = &["big5", "gbk", "gb2312", "gb18030"];
const JAPANESE: &[&str] = &["euc-jp", "shift-jis", "iso-2022-jp"];
const KOREAN: &[&str] = &["euc-kr", "cp949", "iso-2022-kr"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptGroup {
    Chinese,
    Japanese,
    Korean,
}

impl ScriptGroup {
    // Declaration order; locales outside a group get the groups in this order
    pub const ALL: [ScriptGroup; 3] =
        [ScriptGroup::Chinese, ScriptGroup::Japanese, ScriptGroup::Korean];

    pub fn labels(self) -> &'static [&'static str] {
        match self {
            ScriptGroup::Chinese => CHINESE,
            ScriptGroup::Japanese => JAPANESE,
            ScriptGroup::Korean => KOREAN,
        }
    }
}

// Insertion-ordered label set; identity is ASCII-case-insensitive and the
// first occurrence wins.
#[derive(Debug, Default)]
struct OrderedLabels {
    entries: Vec<Cow<'static, str>>,
}

impl OrderedLabels {
    fn insert(&mut self, label: impl Into<Cow<'static, str>>) {
        let label = label.into();
        if !self.entries.iter().any(|e| e.eq_ignore_ascii_case(&label)) {
            self.entries.push(label);
        }
    }

    fn extend_from(&mut self, labels: &'static [&'static str]) {
        for &label in labels {
            self.insert(label);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CandidateList {
    labels: Vec<Cow<'static, str>>,
}

impl CandidateList {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.as_ref())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(|l| l.as_ref())
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l.eq_ignore_ascii_case(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    pub fn default_index(&self, detected: Option<&str>) -> usize {
        detected.and_then(|d| self.position(d)).unwrap_or(0)
    }

    // The list is never empty, so indexing with default_index cannot panic
    pub fn default_label(&self, detected: Option<&str>) -> &str {
        &self.labels[self.default_index(detected)]
    }
}

pub fn build_candidates(detected: Option<&str>, locale: Locale) -> CandidateList {
    let policy = locale.policy();
    let mut labels = OrderedLabels::default();

    labels.extend_from(policy.priority);
    labels.extend_from(UNIVERSAL);
    if let Some(group) = policy.own_group {
        labels.extend_from(group.labels());
    }
    for group in ScriptGroup::ALL {
        if policy.own_group == Some(group) {
            continue;
        }
        labels.extend_from(group.labels());
    }

    let mut list = CandidateList {
        labels: labels.entries,
    };

    // An unrecognized detected name goes in front verbatim so the guess is
    // always selectable; a recognized one keeps its ranked position.
    if let Some(name) = detected {
        if !list.contains(name) {
            list.labels.insert(0, Cow::Owned(name.to_string()));
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &CandidateList) -> Vec<&str> {
        list.iter().collect()
    }

    #[test]
    fn test_korean_locale_leads_with_priority() {
        let list = build_candidates(None, Locale::Ko);
        assert_eq!(
            &names(&list)[..4],
            &["euc-kr", "cp949", "iso-2022-kr", "utf-8"]
        );
    }

    #[test]
    fn test_japanese_locale_order() {
        let list = build_candidates(None, Locale::Ja);
        assert_eq!(
            &names(&list)[..4],
            &["shift-jis", "euc-jp", "iso-2022-jp", "utf-8"]
        );
        // utf-8 was consumed by the priority list, so the universal block
        // continues from ascii
        assert_eq!(list.get(4), Some("ascii"));
    }

    #[test]
    fn test_english_locale_starts_with_universal() {
        let list = build_candidates(None, Locale::En);
        assert_eq!(list.get(0), Some("utf-8"));
        assert_eq!(list.get(1), Some("ascii"));
    }

    #[test]
    fn test_no_duplicates_any_locale() {
        for locale in Locale::ALL {
            let list = build_candidates(None, locale);
            assert!(!list.is_empty());
            let lowered: Vec<String> = list.iter().map(str::to_ascii_lowercase).collect();
            let mut deduped = lowered.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(lowered.len(), deduped.len(), "duplicates for {}", locale);
        }
    }

    #[test]
    fn test_same_label_sets_across_locales() {
        let reference: std::collections::BTreeSet<String> = build_candidates(None, Locale::En)
            .iter()
            .map(str::to_string)
            .collect();
        for locale in Locale::ALL {
            let set: std::collections::BTreeSet<String> = build_candidates(None, locale)
                .iter()
                .map(str::to_string)
                .collect();
            assert_eq!(set, reference, "label set differs for {}", locale);
        }
    }

    #[test]
    fn test_unknown_detected_prepended() {
        let list = build_candidates(Some("koi8-r"), Locale::En);
        assert_eq!(list.get(0), Some("koi8-r"));
        let baseline = build_candidates(None, Locale::En);
        assert_eq!(list.len(), baseline.len() + 1);
    }

    #[test]
    fn test_known_detected_keeps_position() {
        let baseline = build_candidates(None, Locale::En);
        let big5_rank = baseline.position("big5").unwrap();
        let list = build_candidates(Some("big5"), Locale::En);
        assert_eq!(list.position("big5"), Some(big5_rank));
        assert_eq!(list.len(), baseline.len());
        assert_eq!(list.get(0), Some("utf-8"));
    }

    #[test]
    fn test_detected_match_is_case_insensitive() {
        let baseline = build_candidates(None, Locale::Ja);
        let list = build_candidates(Some("SHIFT-JIS"), Locale::Ja);
        assert_eq!(list.len(), baseline.len());
        assert_eq!(list.get(0), Some("shift-jis"));
    }

    #[test]
    fn test_detected_none_leaves_base_list() {
        let list = build_candidates(None, Locale::ZhTw);
        assert_eq!(&names(&list)[..2], &["big5", "utf-8"]);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_default_index_prefers_detected() {
        let list = build_candidates(Some("gbk"), Locale::ZhCn);
        assert_eq!(list.default_index(Some("gbk")), 1);
        assert_eq!(list.default_label(Some("gbk")), "gbk");
    }

    #[test]
    fn test_default_index_falls_back_to_top() {
        let list = build_candidates(None, Locale::ZhCn);
        assert_eq!(list.default_index(None), 0);
        assert_eq!(list.default_label(None), "gb2312");
    }

    #[test]
    fn test_every_table_label_resolves() {
        let list = build_candidates(None, Locale::En);
        for name in list.iter() {
            assert!(
                crate::decode::resolve_label(name).is_some(),
                "label {} does not resolve",
                name
            );
        }
    }

    #[test]
    fn test_serializes_as_flat_array() {
        let list = build_candidates(None, Locale::Ko);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0], "euc-kr");
        assert!(json.is_array());
    }
}
