use super::envelope::TypedMessage;
use crate::error::DecodeError;
use crate::model::record::*;
use crate::model::*;

// [EventDecoder]
// 雀魂の局レコードをRoundEventに変換する. 1牌譜につき1インスタンス.
#[derive(Debug)]
pub struct EventDecoder {
    player_count: usize,
    aka_dora: AkaDora,
    dora_count: usize, // 現在の局で公開済みのドラ表示牌の数
}

impl EventDecoder {
    pub fn new(player_count: usize, aka_dora: AkaDora) -> Self {
        Self {
            player_count,
            aka_dora,
            dora_count: 0,
        }
    }

    pub fn decode(&mut self, msg: &TypedMessage) -> Result<Vec<RoundEvent>, DecodeError> {
        let mut evs = vec![];
        match msg {
            TypedMessage::NewRound(m) => self.handler_newround(m, &mut evs)?,
            TypedMessage::DealTile(m) => self.handler_dealtile(m, &mut evs)?,
            TypedMessage::DiscardTile(m) => self.handler_discardtile(m, &mut evs)?,
            TypedMessage::ChiPengGang(m) => self.handler_chipenggang(m, &mut evs)?,
            TypedMessage::AnGangAddGang(m) => self.handler_angangaddgang(m, &mut evs)?,
            TypedMessage::BaBei(m) => self.handler_babei(m, &mut evs)?,
            TypedMessage::Hule(m) => self.handler_hule(m, &mut evs)?,
            TypedMessage::NoTile(m) => self.handler_notile(m, &mut evs)?,
            TypedMessage::LiuJu(m) => self.handler_liuju(m, &mut evs)?,
        }
        Ok(evs)
    }

    fn seat(&self, seat: u32) -> Result<Seat, DecodeError> {
        let seat = seat as Seat;
        if seat < self.player_count {
            Ok(seat)
        } else {
            Err(DecodeError::SeatOutOfRange {
                seat,
                players: self.player_count,
            })
        }
    }

    // レコードに含まれるドラ表示牌が増えていれば新ドラとして追加
    fn update_doras(
        &mut self,
        doras: &[String],
        evs: &mut Vec<RoundEvent>,
    ) -> Result<(), DecodeError> {
        if doras.len() > self.dora_count {
            for t in tiles_from_mjsoul(&doras[self.dora_count..])? {
                evs.push(RoundEvent::dora(t));
            }
            self.dora_count = doras.len();
        }
        Ok(())
    }

    fn handler_newround(
        &mut self,
        m: &RecordNewRound,
        evs: &mut Vec<RoundEvent>,
    ) -> Result<(), DecodeError> {
        let doras = if !m.doras.is_empty() {
            tiles_from_mjsoul(&m.doras)?
        } else if !m.dora.is_empty() {
            vec![Tile::from_mjsoul(&m.dora)?]
        } else {
            vec![]
        };
        self.dora_count = doras.len();

        let n = self.player_count;
        let mut scores = m.scores.clone();
        scores.resize(n, 0);
        let hands = [&m.tiles0, &m.tiles1, &m.tiles2, &m.tiles3]
            .iter()
            .take(n)
            .map(|h| tiles_from_mjsoul(h.as_slice()))
            .collect::<Result<Vec<_>, _>>()?;

        evs.push(RoundEvent::RoundStart(EventRoundStart {
            round: m.chang as usize,
            dealer: self.seat(m.ju)?,
            honba_sticks: m.ben as usize,
            riichi_sticks: m.liqibang as usize,
            doras,
            scores,
            hands,
        }));
        Ok(())
    }

    fn handler_dealtile(
        &mut self,
        m: &RecordDealTile,
        evs: &mut Vec<RoundEvent>,
    ) -> Result<(), DecodeError> {
        self.update_doras(&m.doras, evs)?;
        evs.push(RoundEvent::draw(self.seat(m.seat)?, Tile::from_mjsoul(&m.tile)?));
        Ok(())
    }

    fn handler_discardtile(
        &mut self,
        m: &RecordDiscardTile,
        evs: &mut Vec<RoundEvent>,
    ) -> Result<(), DecodeError> {
        let s = self.seat(m.seat)?;
        if m.is_liqi || m.is_wliqi {
            evs.push(RoundEvent::riichi(s, m.is_wliqi));
        }
        evs.push(RoundEvent::discard(s, Tile::from_mjsoul(&m.tile)?, m.moqie));
        // 明槓,加槓の新ドラは打牌後にめくられる
        self.update_doras(&m.doras, evs)
    }

    fn handler_chipenggang(
        &mut self,
        m: &RecordChiPengGang,
        evs: &mut Vec<RoundEvent>,
    ) -> Result<(), DecodeError> {
        let s = self.seat(m.seat)?;
        let tp = match m.r#type {
            0 => MeldType::Chi,
            1 => MeldType::Pon,
            2 => MeldType::Minkan,
            code => return Err(DecodeError::UnknownType { kind: "meld", code }),
        };
        let tiles = tiles_from_mjsoul(&m.tiles)?;
        let froms = m
            .froms
            .iter()
            .map(|&f| self.seat(f))
            .collect::<Result<Vec<_>, _>>()?;

        evs.push(RoundEvent::call(s, tp, tiles, froms));
        Ok(())
    }

    fn handler_angangaddgang(
        &mut self,
        m: &RecordAnGangAddGang,
        evs: &mut Vec<RoundEvent>,
    ) -> Result<(), DecodeError> {
        let s = self.seat(m.seat)?;
        let t = Tile::from_mjsoul(&m.tiles)?;
        let (tp, tiles) = match m.r#type {
            2 => (MeldType::Kakan, vec![t]),
            3 => {
                // 数牌の5の場合はルール上の赤5の枚数分を赤5にする
                let t = t.to_normal();
                let mut tiles = vec![t; 4];
                if t.is_suit() && t.1 == 5 {
                    let reds = self.aka_dora.count(t.0).min(4);
                    for r in &mut tiles[4 - reds..] {
                        *r = Tile(t.0, 0);
                    }
                }
                (MeldType::Ankan, tiles)
            }
            code => return Err(DecodeError::UnknownType { kind: "kan", code }),
        };
        let froms = vec![s; tiles.len()];

        evs.push(RoundEvent::call(s, tp, tiles, froms));
        self.update_doras(&m.doras, evs)
    }

    fn handler_babei(&mut self, m: &RecordBaBei, evs: &mut Vec<RoundEvent>) -> Result<(), DecodeError> {
        evs.push(RoundEvent::kita(self.seat(m.seat)?, m.moqie));
        Ok(())
    }

    fn handler_hule(&mut self, m: &RecordHule, evs: &mut Vec<RoundEvent>) -> Result<(), DecodeError> {
        // 槓の直後のロンでは新ドラが和了情報にしか含まれない
        if let Some(h) = m.hules.first() {
            self.update_doras(&h.doras, evs)?;
        }

        let mut wins = vec![];
        for h in &m.hules {
            let pao = if h.baopai == 0 {
                None
            } else {
                Some(self.seat(h.baopai - 1)?)
            };
            wins.push(WinContext {
                seat: self.seat(h.seat)?,
                from: None,
                pao,
                is_tsumo: h.zimo,
                is_dealer: h.qinjia,
                winning_tile: Tile::from_mjsoul(&h.hu_tile)?,
                hand: tiles_from_mjsoul(&h.hand)?,
                fu: h.fu as usize,
                count: h.count as usize,
                is_yakuman: h.yiman,
                yakus: h
                    .fans
                    .iter()
                    .map(|f| Yaku {
                        id: f.id,
                        val: f.val as usize,
                    })
                    .collect(),
                points: (
                    h.point_rong as Point,
                    h.point_zimo_xian as Point,
                    h.point_zimo_qin as Point,
                ),
                ura_doras: tiles_from_mjsoul(&h.li_doras)?,
            });
        }

        evs.push(RoundEvent::Result(RoundResult::Win(ResultWin {
            wins,
            old_scores: self.per_seat(&m.old_scores),
            delta_scores: self.per_seat(&m.delta_scores),
        })));
        Ok(())
    }

    fn handler_notile(
        &mut self,
        m: &RecordNoTile,
        evs: &mut Vec<RoundEvent>,
    ) -> Result<(), DecodeError> {
        let n = self.player_count;
        let mut tenpais = vec![false; n];
        let mut hands = vec![vec![]; n];
        for (s, p) in m.players.iter().take(n).enumerate() {
            tenpais[s] = p.tingpai;
            if p.tingpai {
                hands[s] = tiles_from_mjsoul(&p.hand)?;
            }
        }

        // 流し満貫が複数いる場合はscoresが複数になる
        let mut delta_scores = vec![0; n];
        for sc in &m.scores {
            for (d, &v) in delta_scores.iter_mut().zip(&sc.delta_scores) {
                *d += v;
            }
        }

        evs.push(RoundEvent::Result(RoundResult::Draw(ResultDraw {
            tenpais,
            hands,
            delta_scores,
            is_nagashimangan: m.liujumanguan,
        })));
        Ok(())
    }

    fn handler_liuju(&mut self, m: &RecordLiuJu, evs: &mut Vec<RoundEvent>) -> Result<(), DecodeError> {
        let abort_type = match m.r#type {
            1 => AbortType::Kyushukyuhai,
            2 => AbortType::Suufuurenda,
            3 => AbortType::Suukansanra,
            4 => AbortType::Suuchariichi,
            5 => AbortType::Sanchaho,
            code => return Err(DecodeError::UnknownType { kind: "abort", code }),
        };
        let seat = if abort_type == AbortType::Kyushukyuhai {
            Some(self.seat(m.seat)?)
        } else {
            None
        };

        evs.push(RoundEvent::Result(RoundResult::Abort(ResultAbort {
            abort_type,
            seat,
            tiles: tiles_from_mjsoul(&m.tiles)?,
        })));
        Ok(())
    }

    fn per_seat(&self, v: &[i32]) -> Vec<Point> {
        let mut v = v.to_vec();
        v.resize(self.player_count, 0);
        v
    }
}

pub fn decode_events(
    msgs: &[TypedMessage],
    player_count: usize,
    aka_dora: AkaDora,
) -> Result<Vec<RoundEvent>, DecodeError> {
    let mut decoder = EventDecoder::new(player_count, aka_dora);
    let mut evs = vec![];
    for msg in msgs {
        evs.extend(decoder.decode(msg)?);
    }
    Ok(evs)
}
