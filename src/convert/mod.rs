// 雀魂の牌譜 -> 天鳳の牌譜 への変換
mod assemble;
pub mod envelope;
pub mod majsoul;
mod player;
mod rule;
mod score;
pub mod tenhou;

pub use assemble::{assemble, decode_record, decode_record_events, LogParts};
pub use player::normalize;
pub use rule::extract_rules;
pub use score::aggregate;
