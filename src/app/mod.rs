// 牌譜の取得元と変換処理の窓口
mod converter;
mod source;

pub use converter::{BoxError, Converter, RecordSource};
pub use source::FileSource;
