//! フォームのメモリ内ストア
//!
//! 送信済みエントリと国名リストを保持する。永続化はしない。

use super::FormEntry;

/// 国名リストの区切り行（候補には出さない）
pub const COUNTRY_SEPARATOR: &str = "----------------";

const DEFAULT_COUNTRIES: &[&str] = &[
    "United States",
    "United Kingdom",
    "Germany",
    "France",
    "Japan",
    COUNTRY_SEPARATOR,
    "Argentina",
    "Australia",
    "Austria",
    "Belarus",
    "Belgium",
    "Brazil",
    "Canada",
    "Chile",
    "China",
    "Czech Republic",
    "Denmark",
    "Egypt",
    "Estonia",
    "Finland",
    "Georgia",
    "Greece",
    "Hungary",
    "India",
    "Ireland",
    "Italy",
    "Kazakhstan",
    "Latvia",
    "Lithuania",
    "Mexico",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Poland",
    "Portugal",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Turkey",
    "Ukraine",
    "Uzbekistan",
];

#[derive(Debug, Clone)]
pub struct FormStore {
    entries: Vec<FormEntry>,
    countries: Vec<String>,
    last_added: Option<String>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            last_added: None,
        }
    }
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリを追加し、そのIDを返す
    pub fn add(&mut self, entry: FormEntry) -> String {
        let id = entry.id.clone();
        self.entries.push(entry);
        self.last_added = Some(id.clone());
        id
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// 直近に追加したエントリのID（ハイライト用）
    pub fn last_added(&self) -> Option<&str> {
        self.last_added.as_deref()
    }

    pub fn suggest(&self, input: &str) -> Vec<String> {
        filter_countries(&self.countries, input)
    }
}

/// 国名の候補を絞り込む
///
/// 空入力なら全件、それ以外は大小無視の部分一致。区切り行は除外。
pub fn filter_countries(countries: &[String], input: &str) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    countries
        .iter()
        .filter(|c| c.as_str() != COUNTRY_SEPARATOR)
        .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
