use prost::Message;
use tracing::debug;

use crate::error::DecodeError;
use crate::model::record::*;

const NAMESPACE: &str = ".lq.";
const DETAIL_RECORDS: &str = ".lq.GameDetailRecords";

// [TypedMessage]
// 牌譜データ内で使用される局のレコード. 既知の型以外はデコードエラー
#[derive(Debug, Clone, PartialEq)]
pub enum TypedMessage {
    NewRound(RecordNewRound),
    DealTile(RecordDealTile),
    DiscardTile(RecordDiscardTile),
    ChiPengGang(RecordChiPengGang),
    AnGangAddGang(RecordAnGangAddGang),
    BaBei(RecordBaBei),
    Hule(RecordHule),
    NoTile(RecordNoTile),
    LiuJu(RecordLiuJu),
}

type DecodeFn = fn(&[u8]) -> Result<TypedMessage, prost::DecodeError>;

static REGISTRY: &[(&str, DecodeFn)] = &[
    ("RecordNewRound", |b| {
        RecordNewRound::decode(b).map(TypedMessage::NewRound)
    }),
    ("RecordDealTile", |b| {
        RecordDealTile::decode(b).map(TypedMessage::DealTile)
    }),
    ("RecordDiscardTile", |b| {
        RecordDiscardTile::decode(b).map(TypedMessage::DiscardTile)
    }),
    ("RecordChiPengGang", |b| {
        RecordChiPengGang::decode(b).map(TypedMessage::ChiPengGang)
    }),
    ("RecordAnGangAddGang", |b| {
        RecordAnGangAddGang::decode(b).map(TypedMessage::AnGangAddGang)
    }),
    ("RecordBaBei", |b| RecordBaBei::decode(b).map(TypedMessage::BaBei)),
    ("RecordHule", |b| RecordHule::decode(b).map(TypedMessage::Hule)),
    ("RecordNoTile", |b| RecordNoTile::decode(b).map(TypedMessage::NoTile)),
    ("RecordLiuJu", |b| RecordLiuJu::decode(b).map(TypedMessage::LiuJu)),
];

// ResGameRecord.data (Wrapper<GameDetailRecords>) を局のレコード列に展開
pub fn unwrap(bytes: &[u8]) -> Result<Vec<TypedMessage>, DecodeError> {
    let wrapper = Wrapper::decode(bytes)?;
    if wrapper.name != DETAIL_RECORDS {
        return Err(DecodeError::UnknownMessage(wrapper.name));
    }
    let details = GameDetailRecords::decode(wrapper.data.as_slice())?;

    // version 0 の牌譜は records に直接 Wrapper が並ぶ
    let entries: Vec<&[u8]> = if details.actions.is_empty() {
        details.records.iter().map(Vec::as_slice).collect()
    } else {
        details.actions.iter().map(|a| a.result.as_slice()).collect()
    };
    debug!(
        "detail records: version={}, entries={}",
        details.version,
        entries.len()
    );

    let mut msgs = vec![];
    for entry in entries {
        if entry.is_empty() {
            continue; // ユーザー入力
        }
        msgs.push(resolve(&Wrapper::decode(entry)?)?);
    }
    Ok(msgs)
}

pub fn resolve(wrapper: &Wrapper) -> Result<TypedMessage, DecodeError> {
    let unknown = || DecodeError::UnknownMessage(wrapper.name.clone());
    let name = wrapper.name.strip_prefix(NAMESPACE).ok_or_else(unknown)?;
    let (_, decode) = REGISTRY
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(unknown)?;
    Ok(decode(&wrapper.data)?)
}
