#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下の警告は無効化
#![allow(clippy::needless_range_loop)]
#![allow(clippy::single_match)]

pub mod app;
pub mod convert;
pub mod error;
pub mod model;
pub mod util;
