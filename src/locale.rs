use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::candidates::ScriptGroup;
use crate::error::EnconvError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    ZhTw,
    ZhCn,
    Ja,
    Ko,
    #[default]
    En,
}

pub struct LocalePolicy {
    pub priority: &'static [&'static str],
    pub own_group: Option<ScriptGroup>,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::ZhTw, Locale::ZhCn, Locale::Ja, Locale::Ko, Locale::En];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::ZhTw => "zh_TW",
            Locale::ZhCn => "zh_CN",
            Locale::Ja => "ja",
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    // Priority lists always end with utf-8 so the detector's most common
    // answer stays near the top even for legacy-first locales.
    pub fn policy(self) -> LocalePolicy {
        match self {
            Locale::ZhTw => LocalePolicy {
                priority: &["big5", "utf-8"],
                own_group: Some(ScriptGroup::Chinese),
            },
            Locale::ZhCn => LocalePolicy {
                priority: &["gb2312", "gbk", "gb18030", "utf-8"],
                own_group: Some(ScriptGroup::Chinese),
            },
            Locale::Ja => LocalePolicy {
                priority: &["shift-jis", "euc-jp", "iso-2022-jp", "utf-8"],
                own_group: Some(ScriptGroup::Japanese),
            },
            Locale::Ko => LocalePolicy {
                priority: &["euc-kr", "cp949", "iso-2022-kr", "utf-8"],
                own_group: Some(ScriptGroup::Korean),
            },
            Locale::En => LocalePolicy {
                priority: &[],
                own_group: None,
            },
        }
    }
}

impl FromStr for Locale {
    type Err = EnconvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both BCP 47 hyphens and POSIX underscores, any case
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "zh-tw" => Ok(Locale::ZhTw),
            "zh-cn" => Ok(Locale::ZhCn),
            "ja" => Ok(Locale::Ja),
            "ko" => Ok(Locale::Ko),
            "en" => Ok(Locale::En),
            _ => Err(EnconvError::unknown_locale(s)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
