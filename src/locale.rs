//! Display language detection and message tables

/// Environment variables consulted for the display language, highest priority first
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
    Ja,
    Zh,
    De,
}

/// Display strings for one language
#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub ipv6: &'static str,
    pub ipv4: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub checking: &'static str,
    pub response_time: &'static str,
    /// Appended right after the remaining seconds
    pub countdown_suffix: &'static str,
}

static EN: Messages = Messages {
    title: "Network Check",
    ipv6: "IPv6",
    ipv4: "IPv4",
    success: "OK",
    error: "Error",
    checking: "checking",
    response_time: "response time",
    countdown_suffix: " seconds to exit",
};

static KO: Messages = Messages {
    title: "네트워크 확인",
    ipv6: "IPv6",
    ipv4: "IPv4",
    success: "정상",
    error: "오류",
    checking: "확인 중",
    response_time: "응답 시간",
    countdown_suffix: "초 후에 종료",
};

static JA: Messages = Messages {
    title: "ネットチェック",
    ipv6: "IPv6",
    ipv4: "IPv4",
    success: "正常",
    error: "エラー",
    checking: "確認中",
    response_time: "応答時間",
    countdown_suffix: "秒後に終了",
};

static ZH: Messages = Messages {
    title: "网络检查",
    ipv6: "IPv6",
    ipv4: "IPv4",
    success: "正常",
    error: "错误",
    checking: "检查中",
    response_time: "响应时间",
    countdown_suffix: "秒后结束",
};

static DE: Messages = Messages {
    title: "Netzwerkprüfung",
    ipv6: "IPv6",
    ipv4: "IPv4",
    success: "OK",
    error: "Fehler",
    checking: "prüfe",
    response_time: "Antwortzeit",
    countdown_suffix: " Sekunden bis zum Beenden",
};

impl Language {
    /// Resolve the display language from the process environment
    pub fn detect() -> Self {
        Self::from_lookup(|name| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
    }

    /// First variable present with at least two characters decides; otherwise English
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        for name in LOCALE_VARS {
            let Some(value) = lookup(name) else {
                continue;
            };
            // Counted in characters, so a multi-byte value is never split mid-character
            if value.chars().count() < 2 {
                continue;
            }
            let code: String = value.chars().take(2).collect::<String>().to_lowercase();
            tracing::debug!("Display language from {}={:?}", name, value);
            return Self::from_code(&code);
        }
        Language::En
    }

    fn from_code(code: &str) -> Self {
        match code {
            "ko" => Language::Ko,
            "ja" => Language::Ja,
            "zh" => Language::Zh,
            "de" => Language::De,
            _ => Language::En,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::En => &EN,
            Language::Ko => &KO,
            Language::Ja => &JA,
            Language::Zh => &ZH,
            Language::De => &DE,
        }
    }
}
