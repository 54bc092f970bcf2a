// テスト用の牌譜データ
use prost::Message;

use crate::model::record::*;
use crate::model::*;

pub const UUID_4P: &str = "231012-0b2f7d5e-8f2a-4b8e-9d7c-1a2b3c4d5e6f";
pub const END_TIME: u32 = 1697100000;

pub fn strs(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

pub fn wrap<M: Message>(name: &str, msg: &M) -> Vec<u8> {
    Wrapper {
        name: format!(".lq.{}", name),
        data: msg.encode_to_vec(),
    }
    .encode_to_vec()
}

pub fn action(result: Vec<u8>) -> GameDetailAction {
    GameDetailAction { r#type: 1, result }
}

pub fn user_input() -> GameDetailAction {
    GameDetailAction {
        r#type: 2,
        result: vec![],
    }
}

pub fn detail_payload(actions: Vec<GameDetailAction>) -> Vec<u8> {
    let details = GameDetailRecords {
        records: vec![],
        version: 210715,
        actions,
    };
    wrap("GameDetailRecords", &details)
}

// 配牌 (親は14枚目が1m)
const HANDS_4P: [&[&str]; 4] = [
    &["2m", "3m", "4m", "4p", "0p", "6p", "7s", "8s", "9s", "2z", "2z", "3z", "3z", "1m"],
    &["1p", "1p", "2p", "3p", "4s", "5s", "6s", "7m", "8m", "9m", "5z", "6z", "7z"],
    &["9s", "9s", "1s", "2s", "3s", "7p", "8p", "9p", "5m", "6m", "7m", "1z", "1z"],
    &["4z", "4z", "4z", "3m", "3m", "5s", "5s", "6s", "7s", "2p", "2p", "8p", "9p"],
];

const HANDS_3P: [&[&str]; 3] = [
    &["1p", "2p", "3p", "4s", "5s", "6s", "7p", "8p", "9p", "5z", "5z", "6z", "6z", "1m"],
    &["1s", "1s", "2s", "3s", "9m", "9m", "9m", "4p", "5p", "6p", "7z", "7z", "4z"],
    &["2s", "3s", "4s", "5p", "6p", "7p", "8s", "8s", "1z", "1z", "2z", "3z", "4z"],
];

pub fn new_round_4p() -> RecordNewRound {
    RecordNewRound {
        chang: 0,
        ju: 0,
        ben: 0,
        scores: vec![25000; 4],
        liqibang: 0,
        tiles0: strs(HANDS_4P[0]),
        tiles1: strs(HANDS_4P[1]),
        tiles2: strs(HANDS_4P[2]),
        tiles3: strs(HANDS_4P[3]),
        left_tile_count: 69,
        doras: strs(&["1z"]),
        ..Default::default()
    }
}

fn hands(v: &[&[&str]]) -> Vec<Vec<Tile>> {
    v.iter().map(|h| tiles_from_mjsoul(h).unwrap()).collect()
}

pub fn round_start_4p() -> RoundEvent {
    RoundEvent::RoundStart(EventRoundStart {
        round: 0,
        dealer: 0,
        honba_sticks: 0,
        riichi_sticks: 0,
        doras: vec![Tile(TZ, 1)],
        scores: vec![25000; 4],
        hands: hands(&HANDS_4P),
    })
}

pub fn round_start_3p() -> RoundEvent {
    RoundEvent::RoundStart(EventRoundStart {
        round: 0,
        dealer: 0,
        honba_sticks: 0,
        riichi_sticks: 0,
        doras: vec![Tile(TZ, 1)],
        scores: vec![35000; 3],
        hands: hands(&HANDS_3P),
    })
}

// 満貫のロン和了 (立直,ドラ2,裏ドラ2)
pub fn ron(seat: Seat, rong: Point, old_scores: Vec<Point>, delta_scores: Vec<Point>) -> RoundEvent {
    RoundEvent::Result(RoundResult::Win(ResultWin {
        wins: vec![WinContext {
            seat,
            from: None,
            pao: None,
            is_tsumo: false,
            is_dealer: false,
            winning_tile: Tile(TS, 9),
            hand: vec![],
            fu: 40,
            count: 5,
            is_yakuman: false,
            yakus: vec![
                Yaku { id: 2, val: 1 },
                Yaku { id: 31, val: 2 },
                Yaku { id: 32, val: 0 },
                Yaku { id: 33, val: 2 },
            ],
            points: (rong, 0, 0),
            ura_doras: vec![Tile(TP, 2)],
        }],
        old_scores,
        delta_scores,
    }))
}

// [Header]
fn account(seat: u32, account_id: u32, nickname: &str, level: u32, level3: u32) -> AccountInfo {
    AccountInfo {
        account_id,
        seat,
        nickname: nickname.to_string(),
        level: Some(AccountLevel {
            id: level,
            score: 1000,
        }),
        level3: Some(AccountLevel {
            id: level3,
            score: 500,
        }),
    }
}

fn item(seat: u32, part_point_1: i32, total_point: i32) -> PlayerItem {
    PlayerItem {
        seat,
        total_point,
        part_point_1,
    }
}

// 段位戦 玉の間 半荘 (4人全員が人間)
pub fn head_4p() -> RecordGame {
    RecordGame {
        uuid: UUID_4P.to_string(),
        start_time: END_TIME - 1800,
        end_time: END_TIME,
        config: Some(GameConfig {
            category: 2,
            mode: Some(GameMode {
                mode: 2,
                detail_rule: Some(GameDetailRule {
                    dora_count: 3,
                    have_zimosun: false,
                }),
            }),
            meta: Some(GameMetaData {
                mode_id: 12,
                ..Default::default()
            }),
        }),
        accounts: vec![
            account(0, 101, "alice", 10301, 20201),
            account(1, 102, "bob", 10402, 20302),
            account(2, 103, "carol", 10203, 20103),
            account(3, 104, "dave", 10501, 20401),
        ],
        result: Some(GameEndResult {
            players: vec![
                item(2, 34000, 54000),
                item(3, 25000, 5000),
                item(0, 24000, -16000),
                item(1, 17000, -43000),
            ],
        }),
    }
}

// 友人戦 三麻 東風 (seat 1 がAI)
pub fn head_3p_friendly() -> RecordGame {
    RecordGame {
        uuid: "231012-3p".to_string(),
        start_time: END_TIME - 900,
        end_time: END_TIME,
        config: Some(GameConfig {
            category: 1,
            mode: Some(GameMode {
                mode: 11,
                detail_rule: Some(GameDetailRule {
                    dora_count: 2,
                    have_zimosun: false,
                }),
            }),
            meta: Some(GameMetaData {
                room_id: 123456,
                ..Default::default()
            }),
        }),
        accounts: vec![
            account(0, 201, "eve", 10301, 20201),
            account(2, 203, "frank", 10401, 0),
        ],
        result: Some(GameEndResult {
            players: vec![
                item(0, 40000, 35000),
                item(2, 35000, 0),
                item(1, 30000, -35000),
            ],
        }),
    }
}

// 2局分 (1局目: 立直からのロン, 2局目: 全員不聴)
pub fn round_stream_4p() -> Vec<GameDetailAction> {
    let hule = RecordHule {
        hules: vec![HuleInfo {
            hand: strs(&["9s", "1s", "2s", "3s", "7p", "8p", "9p", "5m", "6m", "7m", "1z", "1z", "9s"]),
            hu_tile: "9s".to_string(),
            seat: 2,
            zimo: false,
            qinjia: false,
            li_doras: strs(&["2p"]),
            count: 5,
            fans: vec![
                FanInfo {
                    name: "ドラ".to_string(),
                    val: 2,
                    id: 31,
                },
                FanInfo {
                    name: "裏ドラ".to_string(),
                    val: 3,
                    id: 33,
                },
            ],
            fu: 40,
            point_rong: 8000,
            doras: strs(&["1z"]),
            ..Default::default()
        }],
        old_scores: vec![24000, 25000, 25000, 25000],
        delta_scores: vec![0, -8000, 9000, 0],
        scores: vec![24000, 17000, 34000, 25000],
    };

    let round2 = RecordNewRound {
        chang: 0,
        ju: 1,
        ben: 0,
        scores: vec![24000, 17000, 34000, 25000],
        tiles0: strs(HANDS_4P[1]),
        tiles1: strs(HANDS_4P[0]),
        tiles2: strs(HANDS_4P[2]),
        tiles3: strs(HANDS_4P[3]),
        doras: strs(&["5z"]),
        ..Default::default()
    };
    let notile = RecordNoTile {
        liujumanguan: false,
        players: vec![NoTilePlayerInfo::default(); 4],
        scores: vec![],
    };

    vec![
        action(wrap("RecordNewRound", &new_round_4p())),
        action(wrap(
            "RecordDiscardTile",
            &RecordDiscardTile {
                seat: 0,
                tile: "1m".to_string(),
                is_liqi: true,
                moqie: true,
                ..Default::default()
            },
        )),
        user_input(),
        action(wrap(
            "RecordDealTile",
            &RecordDealTile {
                seat: 1,
                tile: "9s".to_string(),
                left_tile_count: 68,
                ..Default::default()
            },
        )),
        action(wrap(
            "RecordDiscardTile",
            &RecordDiscardTile {
                seat: 1,
                tile: "9s".to_string(),
                moqie: true,
                ..Default::default()
            },
        )),
        user_input(),
        action(wrap("RecordHule", &hule)),
        action(wrap("RecordNewRound", &round2)),
        action(wrap(
            "RecordDiscardTile",
            &RecordDiscardTile {
                seat: 1,
                tile: "1m".to_string(),
                ..Default::default()
            },
        )),
        action(wrap("RecordNoTile", &notile)),
    ]
}

pub fn record_bytes(head: Option<RecordGame>, data: Vec<u8>) -> Vec<u8> {
    ResGameRecord {
        error: None,
        head,
        data,
        data_url: String::new(),
    }
    .encode_to_vec()
}

pub fn record_4p() -> Vec<u8> {
    record_bytes(Some(head_4p()), detail_payload(round_stream_4p()))
}

pub fn upstream_error(code: u32) -> Vec<u8> {
    ResGameRecord {
        error: Some(ErrorStatus { code }),
        ..Default::default()
    }
    .encode_to_vec()
}
