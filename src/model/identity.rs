use super::*;

// [PlayerIdentity]
// playerMappingとして出力する際はseatを含めない
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerIdentity {
    #[serde(skip)]
    pub seat: Seat,
    pub nickname: String,
    pub account_id: i64,
}

impl PlayerIdentity {
    pub fn new(seat: Seat, nickname: &str, account_id: i64) -> Self {
        Self {
            seat,
            nickname: nickname.to_string(),
            account_id,
        }
    }

    // 空席(AI)のプレースホルダ. k は1始まり
    pub fn ai(seat: Seat, k: usize) -> Self {
        Self::new(seat, &format!("AI{}", k), -1000 - k as i64)
    }
}
