// 牌譜のデータモデル
mod define;
mod event;
mod identity;
pub mod record;
mod replay;
mod tile;

use std::fmt;

use serde::Serialize;

pub use define::*;
pub use event::*;
pub use identity::*;
pub use replay::*;
pub use tile::*;
