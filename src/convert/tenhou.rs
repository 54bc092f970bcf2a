use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::SequenceError;
use crate::model::*;
use crate::util::dictionary::{Dictionary, YAKU};

const TSUMOGIRI: i64 = 60;
const JP_WIND: [&str; 4] = ["東", "南", "西", "北"];

// [RoundState]
// 1局分の状態. 局の結果を受け取った時点でRoundDumpに変換して破棄する
#[derive(Debug)]
pub struct RoundState {
    start: EventRoundStart,
    scores: Vec<Point>,
    riichi_sticks: usize,
    doras: Vec<Tile>,
    events: Vec<RoundEvent>,
    last_tile_from: Option<Seat>, // ロンの対象になる牌を最後に出したプレイヤー (打牌,加槓,北抜き)
    pending_riichi: Option<Seat>, // 宣言牌が通るまでは供託に加えない
}

impl RoundState {
    fn new(start: EventRoundStart) -> Self {
        Self {
            scores: start.scores.clone(),
            riichi_sticks: start.riichi_sticks,
            doras: start.doras.clone(),
            events: vec![],
            last_tile_from: None,
            pending_riichi: None,
            start,
        }
    }

    // リーチ宣言牌が通った
    fn deposit_riichi(&mut self) {
        if self.pending_riichi.take().is_some() {
            self.riichi_sticks += 1;
        }
    }

    fn push(&mut self, event: RoundEvent) {
        if matches!(
            event,
            RoundEvent::Draw(_) | RoundEvent::Call(_) | RoundEvent::Kita(_)
        ) {
            self.deposit_riichi();
        }
        match &event {
            RoundEvent::Riichi(e) => self.pending_riichi = Some(e.seat),
            RoundEvent::Dora(e) => self.doras.push(e.tile),
            RoundEvent::Discard(e) => self.last_tile_from = Some(e.seat),
            RoundEvent::Kita(e) => self.last_tile_from = Some(e.seat),
            RoundEvent::Call(e) if e.meld_type == MeldType::Kakan => {
                self.last_tile_from = Some(e.seat)
            }
            _ => {}
        }
        self.events.push(event);
    }

    fn close(mut self, mut result: RoundResult) -> RoundDump {
        let deltas = match &mut result {
            RoundResult::Win(w) => {
                for ctx in &mut w.wins {
                    if !ctx.is_tsumo {
                        ctx.from = self.last_tile_from;
                    }
                }
                self.riichi_sticks = 0;
                w.delta_scores.clone()
            }
            RoundResult::Draw(d) => {
                self.deposit_riichi();
                d.delta_scores.clone()
            }
            // 三家和は宣言牌への和了
            RoundResult::Abort(a) => {
                if a.abort_type != AbortType::Sanchaho {
                    self.deposit_riichi();
                }
                vec![]
            }
        };
        for (s, d) in self.scores.iter_mut().zip(deltas) {
            *s += d;
        }

        RoundDump {
            start: self.start,
            events: self.events,
            doras: self.doras,
            result,
            riichi_sticks: self.riichi_sticks,
            scores: self.scores,
        }
    }
}

// [RoundDump]
#[derive(Debug, Clone, PartialEq)]
pub struct RoundDump {
    pub start: EventRoundStart,
    pub events: Vec<RoundEvent>, // 局開始と局終了を除く全イベント(発生順)
    pub doras: Vec<Tile>,        // 局終了時点のドラ表示牌
    pub result: RoundResult,
    pub riichi_sticks: usize, // 局終了時点の供託
    pub scores: Vec<Point>,   // 局終了時点の所持点
}

// [RoundStateMachine]
#[derive(Debug)]
enum Phase {
    AwaitingRoundStart,
    InRound(RoundState),
    RoundClosed,
}

// 1牌譜につき1インスタンス. 使い回さないこと
#[derive(Debug)]
pub struct RoundStateMachine {
    phase: Phase,
    dumps: Vec<RoundDump>,
}

impl RoundStateMachine {
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingRoundStart,
            dumps: vec![],
        }
    }

    pub fn feed(&mut self, event: RoundEvent) -> Result<(), SequenceError> {
        match event {
            RoundEvent::RoundStart(start) => {
                if let Phase::InRound(_) = self.phase {
                    return Err(SequenceError::Truncated);
                }
                debug!(
                    "round start: round={}, dealer={}, honba={}",
                    start.round, start.dealer, start.honba_sticks
                );
                self.phase = Phase::InRound(RoundState::new(start));
            }
            RoundEvent::Result(result) => {
                match std::mem::replace(&mut self.phase, Phase::RoundClosed) {
                    Phase::InRound(state) => {
                        let dump = state.close(result);
                        debug!(
                            "round closed: {} events, scores={:?}",
                            dump.events.len(),
                            dump.scores
                        );
                        self.dumps.push(dump);
                    }
                    phase => {
                        self.phase = phase;
                        return Err(SequenceError::OutsideRound { event: "Result" });
                    }
                }
            }
            event => match &mut self.phase {
                Phase::InRound(state) => state.push(event),
                _ => {
                    return Err(SequenceError::OutsideRound {
                        event: event.name(),
                    })
                }
            },
        }
        Ok(())
    }

    // 既に閉じた局のダンプ. エラー発生後も有効
    pub fn emitted(&self) -> &[RoundDump] {
        &self.dumps
    }

    pub fn finish(self) -> Result<Vec<RoundDump>, SequenceError> {
        match self.phase {
            Phase::InRound(_) => Err(SequenceError::Truncated),
            Phase::AwaitingRoundStart | Phase::RoundClosed => Ok(self.dumps),
        }
    }
}

impl Default for RoundStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

pub fn replay_rounds(
    events: impl IntoIterator<Item = RoundEvent>,
) -> Result<Vec<RoundDump>, SequenceError> {
    let mut sm = RoundStateMachine::new();
    for ev in events {
        sm.feed(ev)?;
    }
    sm.finish()
}

// [Tenhou]
#[derive(Debug, Default)]
struct TenhouPlayer {
    hand: Vec<i64>,       // 配牌13枚 (親番14枚目はツモ扱い)
    drawns: Vec<Value>,   // ツモ牌と鳴き (他家から得た牌を含む)
    discards: Vec<Value>, // 捨て牌(ツモ切りの情報を含む)
}

#[derive(Debug)]
struct Pon {
    seat: Seat,
    tile: Tile,        // 赤5は通常5として扱う
    tiles: Vec<i64>,   // 鳴いた牌を含む3枚 (表記順)
    pos: usize,        // 鳴いた牌の位置
}

impl RoundDump {
    // [[局, 本場, 供託], 点数, ドラ, 裏ドラ, (配牌, 取得牌, 捨て牌) x 4, 結果]
    pub fn to_tenhou(&self, dict: &Dictionary, rule: &RuleSummary) -> Value {
        let mut players: [TenhouPlayer; SEAT] = Default::default();
        for (s, h) in self.start.hands.iter().enumerate() {
            players[s].hand = tiles_to_tenhou(&h[..h.len().min(13)]);
            if let Some(&t) = h.get(13) {
                players[s].drawns.push(json!(t.to_tenhou()));
            }
        }

        let mut riichi = [false; SEAT];
        let mut pons: Vec<Pon> = vec![];
        for ev in &self.events {
            match ev {
                RoundEvent::Draw(e) => {
                    players[e.seat].drawns.push(json!(e.tile.to_tenhou()));
                }
                RoundEvent::Riichi(e) => riichi[e.seat] = true,
                RoundEvent::Discard(e) => {
                    let d = if e.is_drawn {
                        TSUMOGIRI
                    } else {
                        e.tile.to_tenhou()
                    };
                    let d = if std::mem::take(&mut riichi[e.seat]) {
                        json!(format!("r{}", d))
                    } else {
                        json!(d)
                    };
                    players[e.seat].discards.push(d);
                }
                RoundEvent::Call(e) => match e.meld_type {
                    MeldType::Chi | MeldType::Pon | MeldType::Minkan => {
                        let (tiles, pos, called) = open_meld(e);
                        let marker = match e.meld_type {
                            MeldType::Chi => "c",
                            MeldType::Pon => "p",
                            _ => "m",
                        };
                        let mut meld: Vec<String> = tiles.iter().map(i64::to_string).collect();
                        meld.insert(pos, format!("{}{}", marker, called));
                        players[e.seat].drawns.push(json!(meld.concat()));

                        match e.meld_type {
                            // 大明槓の後は捨て牌の代わりに0が入る
                            MeldType::Minkan => players[e.seat].discards.push(json!(0)),
                            MeldType::Pon => {
                                if let Some(t) = e.tiles.first() {
                                    let mut tiles = tiles;
                                    tiles.insert(pos, called);
                                    pons.push(Pon {
                                        seat: e.seat,
                                        tile: t.to_normal(),
                                        tiles,
                                        pos,
                                    });
                                }
                            }
                            _ => {}
                        }
                    }
                    MeldType::Ankan => {
                        let mut meld: Vec<String> =
                            e.tiles.iter().map(|t| t.to_tenhou().to_string()).collect();
                        meld.insert(meld.len().min(3), "a".to_string());
                        players[e.seat].discards.push(json!(meld.concat()));
                    }
                    MeldType::Kakan => {
                        let Some(&t) = e.tiles.first() else { continue };
                        let meld = match pons
                            .iter()
                            .find(|p| p.seat == e.seat && p.tile == t.to_normal())
                        {
                            Some(p) => {
                                let mut meld: Vec<String> =
                                    p.tiles.iter().map(i64::to_string).collect();
                                meld.insert(p.pos, format!("k{}", t.to_tenhou()));
                                meld.concat()
                            }
                            None => {
                                warn!("kakan without pon: seat={}, tile={}", e.seat, t);
                                format!("k{}", t.to_tenhou())
                            }
                        };
                        players[e.seat].discards.push(json!(meld));
                    }
                },
                RoundEvent::Kita(e) => players[e.seat].discards.push(json!("f44")),
                RoundEvent::Dora(_) | RoundEvent::RoundStart(_) | RoundEvent::Result(_) => {}
            }
        }

        let ura_doras = match &self.result {
            RoundResult::Win(w) => w
                .wins
                .iter()
                .map(|c| &c.ura_doras)
                .find(|u| !u.is_empty())
                .map(|u| tiles_to_tenhou(u))
                .unwrap_or_default(),
            _ => vec![],
        };

        let s = &self.start;
        let mut v = vec![
            json!([s.round * 4 + s.dealer, s.honba_sticks, s.riichi_sticks]),
            json!(pad(&s.scores)),
            json!(tiles_to_tenhou(&self.doras)),
            json!(ura_doras),
        ];
        for p in players {
            v.push(json!(p.hand));
            v.push(json!(p.drawns));
            v.push(json!(p.discards));
        }
        v.push(json!(self.result_to_tenhou(dict, rule)));
        json!(v)
    }

    fn result_to_tenhou(&self, dict: &Dictionary, rule: &RuleSummary) -> Vec<Value> {
        match &self.result {
            RoundResult::Win(w) => {
                let mut res = vec![json!("和了")];
                for (ctx, delta) in w.wins.iter().zip(win_deltas(w)) {
                    res.push(json!(pad(&delta)));
                    res.push(json!(self.win_detail(ctx, dict, rule)));
                }
                res
            }
            RoundResult::Draw(d) => {
                if d.is_nagashimangan {
                    vec![json!("流し満貫"), json!(pad(&d.delta_scores))]
                } else if d.tenpais.iter().all(|&t| t) {
                    vec![json!("全員聴牌")]
                } else if d.tenpais.iter().all(|&t| !t) {
                    vec![json!("全員不聴")]
                } else {
                    vec![json!("流局"), json!(pad(&d.delta_scores))]
                }
            }
            RoundResult::Abort(a) => vec![json!(a.abort_type.to_string())],
        }
    }

    // [和了者, 放銃者, 責任払い, 点数, 役...]
    fn win_detail(&self, ctx: &WinContext, dict: &Dictionary, rule: &RuleSummary) -> Vec<Value> {
        let n = self.start.hands.len();
        let title = score_title(ctx.fu, ctx.count, ctx.is_yakuman);

        // ツモ損なしの三麻は北家の支払い分を2人で折半する
        let (rong, xian, qin) = ctx.points;
        let share = if ctx.is_tsumo && n == 3 && rule.tsumo_loss_disabled {
            (xian / 2 + 99) / 100 * 100
        } else {
            0
        };
        let points = if !ctx.is_tsumo {
            format!("{}{}点", title, rong)
        } else if ctx.is_dealer {
            format!("{}{}点∀", title, xian + share)
        } else {
            format!("{}{}-{}点", title, xian + share, qin + share)
        };

        let mut detail = vec![
            json!(ctx.seat),
            json!(ctx.from.unwrap_or(ctx.seat)),
            json!(ctx.pao.unwrap_or(ctx.seat)),
            json!(points),
        ];
        for y in &ctx.yakus {
            let name = dict.lookup_or_empty(YAKU, y.id);
            let name = match y.id {
                10 => format!("{} {}", name, JP_WIND[(ctx.seat + n - self.start.dealer) % n]),
                11 => format!("{} {}", name, JP_WIND[self.start.round % 4]),
                _ => name.to_string(),
            };
            if ctx.is_yakuman {
                detail.push(json!(format!("{}(役満)", name)));
            } else if y.val != 0 {
                detail.push(json!(format!("{}({}飜)", name, y.val)));
            }
        }
        detail
    }
}

// 鳴きを構成する自分の牌と鳴いた牌の挿入位置, 鳴いた牌を返却
// 上家: 先頭, 対面: 2番目, 下家: 末尾
// 三麻も北家が空席の4人卓として位置を決める
fn open_meld(e: &EventCall) -> (Vec<i64>, usize, i64) {
    let mut own = vec![];
    let mut called = None;
    for (&t, &f) in e.tiles.iter().zip(&e.froms) {
        if f != e.seat && called.is_none() {
            called = Some((t, f));
        } else {
            own.push(t.to_tenhou());
        }
    }

    let Some((t, from)) = called else {
        warn!("open meld without called tile: {:?}", e);
        let t = own.pop().unwrap_or_default();
        return (own, 0, t);
    };
    let pos = match (from + SEAT - e.seat) % SEAT {
        3 => 0,
        1 => own.len(),
        _ => 1,
    };
    (own, pos, t.to_tenhou())
}

// 複数人の和了の場合, 2人目以降はロンの点数のみ. 1人目は合計からの残り(本場,供託を含む)
fn win_deltas(w: &ResultWin) -> Vec<Vec<Point>> {
    let n = w.delta_scores.len();
    if w.wins.len() <= 1 {
        return vec![w.delta_scores.clone()];
    }

    let mut rest = w.delta_scores.clone();
    let mut deltas = vec![];
    for ctx in &w.wins[1..] {
        let mut d = vec![0; n];
        d[ctx.seat] += ctx.points.0;
        if let Some(f) = ctx.from {
            d[f] -= ctx.points.0;
        }
        for (r, v) in rest.iter_mut().zip(&d) {
            *r -= v;
        }
        deltas.push(d);
    }
    deltas.insert(0, rest);
    deltas
}

fn score_title(fu: usize, count: usize, is_yakuman: bool) -> String {
    if is_yakuman {
        return "役満".to_string();
    }
    let title = match count {
        13.. => "数え役満",
        11..=12 => "三倍満",
        8..=10 => "倍満",
        6..=7 => "跳満",
        5 => "満貫",
        // 4飜40符以上, 3飜70符以上
        _ if fu << (count + 2) >= 2000 => "満貫",
        _ => return format!("{}符{}飜", fu, count),
    };
    title.to_string()
}

fn pad<T: Clone + Default>(v: &[T]) -> Vec<T> {
    let mut v = v.to_vec();
    v.resize(SEAT.max(v.len()), T::default());
    v
}
