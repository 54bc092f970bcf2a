use thiserror::Error;

pub type Res<T = ()> = Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to retrieve record: {0}")]
    Retrieval(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error("upstream returned error code {code}")]
    Upstream { code: u32 },
}

// 牌譜データのデコードの失敗. 牌譜全体が使用不可になる
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("protobuf decode failed: {0}")]
    Protobuf(#[from] prost::DecodeError),
    #[error("unknown message type: {0}")]
    UnknownMessage(String),
    #[error("record header missing")]
    MissingHeader,
    #[error("record payload missing (data_url: {0})")]
    MissingPayload(String),
    #[error("invalid tile: {0:?}")]
    InvalidTile(String),
    #[error("unsupported player count: {0}")]
    PlayerCount(usize),
    #[error("seat {seat} out of range for {players} players")]
    SeatOutOfRange { seat: usize, players: usize },
    #[error("unknown {kind} type: {code}")]
    UnknownType { kind: &'static str, code: u32 },
}

// 局の進行として不正なイベント列
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("{event} event received outside a round")]
    OutsideRound { event: &'static str },
    #[error("round ended without a result")]
    Truncated,
}
