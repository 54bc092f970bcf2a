use prost::Message;
use serde_json::Value;
use tracing::{info, warn};

use super::envelope;
use super::majsoul::decode_events;
use super::player::normalize;
use super::rule::extract_rules;
use super::score::aggregate;
use super::tenhou::replay_rounds;
use crate::error::{DecodeError, Error};
use crate::model::record::*;
use crate::model::*;
use crate::util::dictionary::{Dictionary, LEVEL};

// [LogParts]
// 各コンポーネントの出力. assembleはこれを連結するだけ
#[derive(Debug, Clone)]
pub struct LogParts {
    pub uuid: String,
    pub end_time: u32,
    pub rule: RuleSummary,
    pub dan: Vec<String>,
    pub rate: Vec<u32>,
    pub name: Vec<String>,
    pub sc: Vec<Value>,
    pub log: Vec<Value>,
    pub player_mapping: Vec<PlayerIdentity>,
}

pub fn assemble(parts: LogParts) -> ReplayLog {
    let n = parts.name.len();
    ReplayLog {
        ver: LOG_VERSION.to_string(),
        ref_: parts.uuid,
        ratingc: format!("PF{}", n),
        rule: TenhouRule::from(&parts.rule),
        lobby: 0,
        dan: parts.dan,
        rate: parts.rate,
        sx: vec!["C".to_string(); n],
        name: parts.name,
        sc: parts.sc,
        title: (
            format!("{}{}", parts.rule.display_text, parts.rule.lobby_suffix),
            parts.end_time,
        ),
        log: parts.log,
        player_mapping: parts.player_mapping,
    }
}

// 人数と座席の範囲を検査して人数を返却
fn validate(head: &RecordGame) -> Result<usize, DecodeError> {
    let n = head.player_count();
    if !(3..=4).contains(&n) {
        return Err(DecodeError::PlayerCount(n));
    }

    let result_seats = head.result_players().iter().map(|r| r.seat);
    let account_seats = head.accounts.iter().map(|a| a.seat);
    for seat in result_seats.chain(account_seats) {
        let seat = seat as Seat;
        if seat >= n {
            return Err(DecodeError::SeatOutOfRange { seat, players: n });
        }
    }
    Ok(n)
}

// 三麻は三麻用の段位があればそちらを使用
fn account_level(a: &AccountInfo, n: usize) -> Option<&AccountLevel> {
    let level3 = a.level3.as_ref().filter(|l| l.id != 0);
    match n {
        3 => level3.or(a.level.as_ref()),
        _ => a.level.as_ref(),
    }
}

// デコード,エラーコードの検査,ヘッダの検査. エラーコードはヘッダより先に検査する
fn open(bytes: &[u8]) -> Result<(RecordGame, Vec<u8>, usize), Error> {
    let record = ResGameRecord::decode(bytes).map_err(DecodeError::from)?;

    let code = record.error_code();
    if code != 0 {
        warn!("upstream error: code={}", code);
        return Err(Error::Upstream { code });
    }

    let ResGameRecord {
        head,
        data,
        data_url,
        ..
    } = record;
    let head = head.ok_or(DecodeError::MissingHeader)?;
    let n = validate(&head)?;
    if data.is_empty() {
        return Err(DecodeError::MissingPayload(data_url).into());
    }
    Ok((head, data, n))
}

// 局のイベント列のみを返却 (牌譜の調査用)
pub fn decode_record_events(bytes: &[u8], dict: &Dictionary) -> Result<Vec<RoundEvent>, Error> {
    let (head, data, n) = open(bytes)?;
    let rule = extract_rules(&head, dict);
    let msgs = envelope::unwrap(&data)?;
    Ok(decode_events(&msgs, n, rule.aka_dora)?)
}

pub fn decode_record(bytes: &[u8], dict: &Dictionary) -> Result<ReplayLog, Error> {
    let (head, data, n) = open(bytes)?;
    let head = &head;
    info!("decode record: uuid={}, players={}", head.uuid, n);

    let rule = extract_rules(head, dict);

    let mut dan = vec![String::new(); n];
    let mut rate = vec![0; n];
    let mut name = vec!["AI".to_string(); n];
    for a in &head.accounts {
        let s = a.seat as Seat;
        if let Some(level) = account_level(a, n) {
            dan[s] = dict.lookup_or_empty(LEVEL, level.id).to_string();
            rate[s] = level.score;
        }
        name[s] = a.nickname.clone();
    }
    let (sc, ranks) = aggregate(head.result_players(), n);

    let msgs = envelope::unwrap(&data)?;
    let events = decode_events(&msgs, n, rule.aka_dora)?;
    let dumps = replay_rounds(events)?;
    let log: Vec<Value> = dumps.iter().map(|d| d.to_tenhou(dict, &rule)).collect();
    info!("decode record: uuid={}, rounds={}", head.uuid, log.len());

    Ok(assemble(LogParts {
        uuid: head.uuid.clone(),
        end_time: head.end_time,
        player_mapping: normalize(head, &ranks),
        rule,
        dan,
        rate,
        name,
        sc,
        log,
    }))
}
