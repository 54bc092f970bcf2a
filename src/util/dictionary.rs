use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

const BUILTIN: &str = include_str!("../../data/dictionary.json");

// テーブル名
pub const RUNE: &str = "rune"; // 表示用の文字列 (三麻, 友人戦, ...)
pub const MATCHMODE: &str = "matchmode"; // 段位戦の部屋名 (mode_id -> 部屋名)
pub const LEVEL: &str = "level"; // 段位名 (level id -> 段位)
pub const YAKU: &str = "yaku"; // 役名 (雀魂の役ID -> 役名)

// [Dictionary]
// 読み取り専用の名前テーブル. 変換処理にはこれを引数で渡す
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dictionary {
    #[serde(flatten)]
    tables: HashMap<String, HashMap<String, String>>,
}

impl Dictionary {
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN).expect("embedded dictionary.json must be valid")
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    // otherのエントリで上書きする
    pub fn merge(mut self, other: Dictionary) -> Self {
        for (name, table) in other.tables {
            self.tables.entry(name).or_default().extend(table);
        }
        self
    }

    pub fn lookup(&self, table: &str, key: impl fmt::Display) -> Option<&str> {
        self.tables
            .get(table)?
            .get(&key.to_string())
            .map(String::as_str)
    }

    // 見つからない場合は警告を出して空文字列
    pub fn lookup_or_empty(&self, table: &str, key: impl fmt::Display) -> &str {
        let key = key.to_string();
        match self.lookup(table, &key) {
            Some(s) => s,
            None => {
                warn!("dictionary entry not found: {}[{}]", table, key);
                ""
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.lookup(RUNE, "sanma"), Some("三"));
        assert_eq!(dict.lookup(LEVEL, 10301), Some("雀傑1"));
        assert_eq!(dict.lookup(LEVEL, 20203), Some("雀士3"));
        assert_eq!(dict.lookup(YAKU, 2), Some("立直"));
        assert_eq!(dict.lookup(MATCHMODE, 12), Some("玉の間"));
        assert_eq!(dict.lookup(MATCHMODE, 9999), None);
        assert_eq!(dict.lookup("nothing", 1), None);
        assert_eq!(dict.lookup_or_empty(LEVEL, 1), "");
    }

    #[test]
    fn merge_overrides_entries() {
        let other: Dictionary =
            serde_json::from_str(r#"{"rune": {"sanma": "3P "}, "extra": {"a": "b"}}"#).unwrap();
        let dict = Dictionary::builtin().merge(other);
        assert_eq!(dict.lookup(RUNE, "sanma"), Some("3P "));
        assert_eq!(dict.lookup(RUNE, "friendly"), Some("友人戦"));
        assert_eq!(dict.lookup("extra", "a"), Some("b"));
    }
}
