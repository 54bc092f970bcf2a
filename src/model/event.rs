use super::*;

// 局の進行を表すイベント. 雀魂の牌譜をデコードした順に並ぶ.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RoundEvent {
    RoundStart(EventRoundStart), // 局開始
    Draw(EventDraw),             // ツモ
    Discard(EventDiscard),       // 打牌
    Call(EventCall),             // 鳴き (チー,ポン,槓)
    Kita(EventKita),             // 北抜き
    Riichi(EventRiichi),         // リーチ宣言
    Dora(EventDora),             // 新ドラ
    Result(RoundResult),         // 局終了
}

impl RoundEvent {
    #[inline]
    pub fn draw(seat: Seat, tile: Tile) -> Self {
        Self::Draw(EventDraw { seat, tile })
    }

    #[inline]
    pub fn discard(seat: Seat, tile: Tile, is_drawn: bool) -> Self {
        Self::Discard(EventDiscard {
            seat,
            tile,
            is_drawn,
        })
    }

    #[inline]
    pub fn call(seat: Seat, meld_type: MeldType, tiles: Vec<Tile>, froms: Vec<Seat>) -> Self {
        Self::Call(EventCall {
            seat,
            meld_type,
            tiles,
            froms,
        })
    }

    #[inline]
    pub fn kita(seat: Seat, is_drawn: bool) -> Self {
        Self::Kita(EventKita { seat, is_drawn })
    }

    #[inline]
    pub fn riichi(seat: Seat, is_double: bool) -> Self {
        Self::Riichi(EventRiichi { seat, is_double })
    }

    #[inline]
    pub fn dora(tile: Tile) -> Self {
        Self::Dora(EventDora { tile })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundStart(_) => "RoundStart",
            Self::Draw(_) => "Draw",
            Self::Discard(_) => "Discard",
            Self::Call(_) => "Call",
            Self::Kita(_) => "Kita",
            Self::Riichi(_) => "Riichi",
            Self::Dora(_) => "Dora",
            Self::Result(_) => "Result",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRoundStart {
    pub round: usize,           // 場風 (東:0, 南:1, ...)
    pub dealer: Seat,           // 局 (= 親の座席)
    pub honba_sticks: usize,    // 本場
    pub riichi_sticks: usize,   // 供託(リーチ棒)
    pub doras: Vec<Tile>,       // ドラ表示牌
    pub scores: Vec<Point>,     // 各プレイヤーの所持点
    pub hands: Vec<Vec<Tile>>,  // 配牌 (親:14枚, 子:13枚)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDraw {
    pub seat: Seat,
    pub tile: Tile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDiscard {
    pub seat: Seat,
    pub tile: Tile,
    pub is_drawn: bool, // ツモ切り
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCall {
    pub seat: Seat,
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,  // 面子を構成する牌 (加槓の場合は追加した1枚)
    pub froms: Vec<Seat>,  // tilesの各牌の持ち主 (暗槓,加槓は全てseat)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventKita {
    pub seat: Seat,
    pub is_drawn: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRiichi {
    pub seat: Seat,
    pub is_double: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDora {
    pub tile: Tile,
}

// [MeldType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeldType {
    Chi,
    Pon,
    Minkan,
    Ankan,
    Kakan,
}

// [RoundResult]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum RoundResult {
    Win(ResultWin),     // 和了
    Draw(ResultDraw),   // 荒牌平局
    Abort(ResultAbort), // 途中流局
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultWin {
    pub wins: Vec<WinContext>,
    pub old_scores: Vec<Point>,   // 変化前のスコア
    pub delta_scores: Vec<Point>, // 全和了の合計
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinContext {
    pub seat: Seat,
    pub from: Option<Seat>, // 放銃者 (ツモの場合はNone) 局の進行から決まる
    pub pao: Option<Seat>,  // 責任払い
    pub is_tsumo: bool,
    pub is_dealer: bool,
    pub winning_tile: Tile,
    pub hand: Vec<Tile>,
    pub fu: usize,
    pub count: usize,       // 飜数 (is_yakuman=trueの時は役満倍率)
    pub is_yakuman: bool,
    pub yakus: Vec<Yaku>,
    pub points: Points,
    pub ura_doras: Vec<Tile>,
}

// (ロンの支払い, ツモ・子の支払い, ツモ・親の支払い)
pub type Points = (Point, Point, Point);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Yaku {
    pub id: u32, // 雀魂の役ID
    pub val: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultDraw {
    pub tenpais: Vec<bool>,
    pub hands: Vec<Vec<Tile>>,    // 聴牌していたプレイヤーの手牌 (ノーテンは空)
    pub delta_scores: Vec<Point>, // 聴牌,流し満貫による点数変動
    pub is_nagashimangan: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultAbort {
    pub abort_type: AbortType,
    pub seat: Option<Seat>, // 九種九牌の宣言者
    pub tiles: Vec<Tile>,
}

// [AbortType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AbortType {
    Kyushukyuhai, // 九種九牌
    Suufuurenda,  // 四風連打
    Suukansanra,  // 四槓散了
    Suuchariichi, // 四家立直
    Sanchaho,     // 三家和
}

impl fmt::Display for AbortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AbortType::Kyushukyuhai => "九種九牌",
                AbortType::Suufuurenda => "四風連打",
                AbortType::Suukansanra => "四開槓",
                AbortType::Suuchariichi => "四家立直",
                AbortType::Sanchaho => "三家和了",
            }
        )
    }
}
