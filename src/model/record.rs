// 雀魂の牌譜データ (protobuf, package "lq") のうち変換に必要なフィールドのみ定義
// タグ番号はliqi.protoに合わせる

// [Envelope]
#[derive(Clone, PartialEq, prost::Message)]
pub struct Wrapper {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ErrorStatus {
    #[prost(uint32, tag = "1")]
    pub code: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ResGameRecord {
    #[prost(message, optional, tag = "1")]
    pub error: Option<ErrorStatus>,
    #[prost(message, optional, tag = "3")]
    pub head: Option<RecordGame>,
    #[prost(bytes = "vec", tag = "4")]
    pub data: Vec<u8>,
    #[prost(string, tag = "5")]
    pub data_url: String,
}

impl ResGameRecord {
    pub fn error_code(&self) -> u32 {
        self.error.as_ref().map_or(0, |e| e.code)
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameDetailRecords {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub records: Vec<Vec<u8>>, // 旧フォーマット (version 0)
    #[prost(uint32, tag = "2")]
    pub version: u32,
    #[prost(message, repeated, tag = "3")]
    pub actions: Vec<GameDetailAction>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameDetailAction {
    #[prost(uint32, tag = "1")]
    pub r#type: u32,
    #[prost(bytes = "vec", tag = "2")]
    pub result: Vec<u8>, // 空の場合はユーザー入力
}

// [Header]
#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordGame {
    #[prost(string, tag = "1")]
    pub uuid: String,
    #[prost(uint32, tag = "2")]
    pub start_time: u32,
    #[prost(uint32, tag = "3")]
    pub end_time: u32,
    #[prost(message, optional, tag = "5")]
    pub config: Option<GameConfig>,
    #[prost(message, repeated, tag = "11")]
    pub accounts: Vec<AccountInfo>,
    #[prost(message, optional, tag = "12")]
    pub result: Option<GameEndResult>,
}

impl RecordGame {
    pub fn mode(&self) -> GameMode {
        self.config
            .as_ref()
            .and_then(|c| c.mode.clone())
            .unwrap_or_default()
    }

    pub fn meta(&self) -> GameMetaData {
        self.config
            .as_ref()
            .and_then(|c| c.meta.clone())
            .unwrap_or_default()
    }

    pub fn detail_rule(&self) -> GameDetailRule {
        self.mode().detail_rule.unwrap_or_default()
    }

    pub fn result_players(&self) -> &[PlayerItem] {
        self.result.as_ref().map_or(&[][..], |r| r.players.as_slice())
    }

    // 人数は終局結果の人数で判定する
    pub fn player_count(&self) -> usize {
        self.result_players().len()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AccountInfo {
    #[prost(uint32, tag = "1")]
    pub account_id: u32,
    #[prost(uint32, tag = "2")]
    pub seat: u32,
    #[prost(string, tag = "3")]
    pub nickname: String,
    #[prost(message, optional, tag = "7")]
    pub level: Option<AccountLevel>,
    #[prost(message, optional, tag = "8")]
    pub level3: Option<AccountLevel>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AccountLevel {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(uint32, tag = "2")]
    pub score: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameConfig {
    #[prost(uint32, tag = "1")]
    pub category: u32,
    #[prost(message, optional, tag = "2")]
    pub mode: Option<GameMode>,
    #[prost(message, optional, tag = "3")]
    pub meta: Option<GameMetaData>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameMode {
    #[prost(uint32, tag = "1")]
    pub mode: u32, // 1: 東風, 2: 半荘
    #[prost(message, optional, tag = "6")]
    pub detail_rule: Option<GameDetailRule>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameMetaData {
    #[prost(uint32, tag = "1")]
    pub room_id: u32, // 友人戦
    #[prost(uint32, tag = "2")]
    pub mode_id: u32, // 段位戦,一般戦
    #[prost(uint32, tag = "3")]
    pub contest_uid: u32, // 大会戦
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameDetailRule {
    #[prost(uint32, tag = "3")]
    pub dora_count: u32, // 赤ドラの枚数
    #[prost(bool, tag = "40")]
    pub have_zimosun: bool, // 三麻のツモ損
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GameEndResult {
    #[prost(message, repeated, tag = "1")]
    pub players: Vec<PlayerItem>, // 順位順
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PlayerItem {
    #[prost(uint32, tag = "1")]
    pub seat: u32,
    #[prost(int32, tag = "2")]
    pub total_point: i32, // ウマ・オカ込みの最終スコア(1000倍)
    #[prost(int32, tag = "3")]
    pub part_point_1: i32, // 終局時の持ち点
}

// [Round Records]
#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordNewRound {
    #[prost(uint32, tag = "1")]
    pub chang: u32,
    #[prost(uint32, tag = "2")]
    pub ju: u32,
    #[prost(uint32, tag = "3")]
    pub ben: u32,
    #[prost(string, tag = "4")]
    pub dora: String, // 旧フォーマットのドラ表示牌
    #[prost(int32, repeated, tag = "5")]
    pub scores: Vec<i32>,
    #[prost(uint32, tag = "6")]
    pub liqibang: u32,
    #[prost(string, repeated, tag = "7")]
    pub tiles0: Vec<String>,
    #[prost(string, repeated, tag = "8")]
    pub tiles1: Vec<String>,
    #[prost(string, repeated, tag = "9")]
    pub tiles2: Vec<String>,
    #[prost(string, repeated, tag = "10")]
    pub tiles3: Vec<String>,
    #[prost(uint32, tag = "15")]
    pub left_tile_count: u32,
    #[prost(string, repeated, tag = "16")]
    pub doras: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordDealTile {
    #[prost(uint32, tag = "1")]
    pub seat: u32,
    #[prost(string, tag = "2")]
    pub tile: String,
    #[prost(string, repeated, tag = "3")]
    pub doras: Vec<String>,
    #[prost(uint32, tag = "6")]
    pub left_tile_count: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordDiscardTile {
    #[prost(uint32, tag = "1")]
    pub seat: u32,
    #[prost(string, tag = "2")]
    pub tile: String,
    #[prost(bool, tag = "3")]
    pub is_liqi: bool,
    #[prost(bool, tag = "5")]
    pub moqie: bool,
    #[prost(string, repeated, tag = "8")]
    pub doras: Vec<String>,
    #[prost(bool, tag = "9")]
    pub is_wliqi: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordChiPengGang {
    #[prost(uint32, tag = "1")]
    pub seat: u32,
    #[prost(uint32, tag = "2")]
    pub r#type: u32, // 0: チー, 1: ポン, 2: 明槓
    #[prost(string, repeated, tag = "3")]
    pub tiles: Vec<String>,
    #[prost(uint32, repeated, tag = "4")]
    pub froms: Vec<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordAnGangAddGang {
    #[prost(uint32, tag = "1")]
    pub seat: u32,
    #[prost(uint32, tag = "2")]
    pub r#type: u32, // 2: 加槓, 3: 暗槓
    #[prost(string, tag = "3")]
    pub tiles: String,
    #[prost(string, repeated, tag = "6")]
    pub doras: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordBaBei {
    #[prost(uint32, tag = "1")]
    pub seat: u32,
    #[prost(bool, tag = "3")]
    pub moqie: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordHule {
    #[prost(message, repeated, tag = "1")]
    pub hules: Vec<HuleInfo>,
    #[prost(int32, repeated, tag = "2")]
    pub old_scores: Vec<i32>,
    #[prost(int32, repeated, tag = "3")]
    pub delta_scores: Vec<i32>,
    #[prost(int32, repeated, tag = "5")]
    pub scores: Vec<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct HuleInfo {
    #[prost(string, repeated, tag = "1")]
    pub hand: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub ming: Vec<String>,
    #[prost(string, tag = "3")]
    pub hu_tile: String,
    #[prost(uint32, tag = "4")]
    pub seat: u32,
    #[prost(bool, tag = "5")]
    pub zimo: bool,
    #[prost(bool, tag = "6")]
    pub qinjia: bool,
    #[prost(bool, tag = "7")]
    pub liqi: bool,
    #[prost(string, repeated, tag = "8")]
    pub doras: Vec<String>,
    #[prost(string, repeated, tag = "9")]
    pub li_doras: Vec<String>,
    #[prost(bool, tag = "10")]
    pub yiman: bool,
    #[prost(uint32, tag = "11")]
    pub count: u32,
    #[prost(message, repeated, tag = "12")]
    pub fans: Vec<FanInfo>,
    #[prost(uint32, tag = "13")]
    pub fu: u32,
    #[prost(uint32, tag = "15")]
    pub point_rong: u32,
    #[prost(uint32, tag = "16")]
    pub point_zimo_qin: u32,
    #[prost(uint32, tag = "17")]
    pub point_zimo_xian: u32,
    #[prost(uint32, tag = "20")]
    pub dadian: u32,
    #[prost(uint32, tag = "21")]
    pub baopai: u32, // 責任払いの座席+1 (0: なし)
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct FanInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(uint32, tag = "2")]
    pub val: u32,
    #[prost(uint32, tag = "3")]
    pub id: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordNoTile {
    #[prost(bool, tag = "1")]
    pub liujumanguan: bool,
    #[prost(message, repeated, tag = "2")]
    pub players: Vec<NoTilePlayerInfo>,
    #[prost(message, repeated, tag = "3")]
    pub scores: Vec<NoTileScoreInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NoTilePlayerInfo {
    #[prost(bool, tag = "3")]
    pub tingpai: bool,
    #[prost(string, repeated, tag = "4")]
    pub hand: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NoTileScoreInfo {
    #[prost(uint32, tag = "1")]
    pub seat: u32,
    #[prost(int32, repeated, tag = "2")]
    pub old_scores: Vec<i32>,
    #[prost(int32, repeated, tag = "3")]
    pub delta_scores: Vec<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordLiuJu {
    #[prost(uint32, tag = "1")]
    pub r#type: u32, // 1: 九種九牌, 2: 四風連打, 3: 四槓散了, 4: 四家立直, 5: 三家和
    #[prost(uint32, tag = "3")]
    pub seat: u32,
    #[prost(string, repeated, tag = "4")]
    pub tiles: Vec<String>,
}
