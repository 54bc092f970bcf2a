use serde_json::Value;

use super::*;

pub const LOG_VERSION: &str = "2.3";

// [RuleSummary]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSummary {
    pub display_text: String,
    pub aka_dora: AkaDora,
    pub tsumo_loss_disabled: bool, // 三麻のツモ損なし
    pub lobby_suffix: String,      // ": <友人戦の部屋番号 or 大会ID>"
}

// 赤ドラの枚数 (aka53: 索子, aka52: 筒子, aka51: 萬子)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AkaDora {
    pub aka53: usize,
    pub aka52: usize,
    pub aka51: usize,
}

impl AkaDora {
    pub fn new(aka53: usize, aka52: usize, aka51: usize) -> Self {
        Self {
            aka53,
            aka52,
            aka51,
        }
    }

    // 牌の種別ごとの赤5の枚数
    pub fn count(&self, ti: Type) -> usize {
        match ti {
            TM => self.aka51,
            TP => self.aka52,
            TS => self.aka53,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenhouRule {
    pub disp: String,
    pub aka53: usize,
    pub aka52: usize,
    pub aka51: usize,
}

impl From<&RuleSummary> for TenhouRule {
    fn from(rule: &RuleSummary) -> Self {
        Self {
            disp: rule.display_text.clone(),
            aka53: rule.aka_dora.aka53,
            aka52: rule.aka_dora.aka52,
            aka51: rule.aka_dora.aka51,
        }
    }
}

// [ReplayLog]
// 天鳳の牌譜ビューア互換のフォーマット. フィールド名はそのまま出力される.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayLog {
    pub ver: String,
    #[serde(rename = "ref")]
    pub ref_: String,
    pub ratingc: String,
    pub rule: TenhouRule,
    pub lobby: usize,
    pub dan: Vec<String>,
    pub rate: Vec<u32>,
    pub sx: Vec<String>,
    pub name: Vec<String>,
    pub sc: Vec<Value>,
    pub title: (String, u32),
    pub log: Vec<Value>,
    #[serde(rename = "playerMapping")]
    pub player_mapping: Vec<PlayerIdentity>,
}

// [ConvertResponse]
// 変換に失敗した場合も常にこの形で返却する
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertResponse {
    pub is_error: bool,
    pub log: Option<ReplayLog>,
}

impl ConvertResponse {
    pub fn ok(log: ReplayLog) -> Self {
        Self {
            is_error: false,
            log: Some(log),
        }
    }

    pub fn error() -> Self {
        Self {
            is_error: true,
            log: None,
        }
    }
}
