use tracing::debug;

use crate::model::record::RecordGame;
use crate::model::*;
use crate::util::dictionary::{Dictionary, MATCHMODE, RUNE};

// [RuleSummary]
// 表示文字列は 人数 -> 部屋の種類 -> 東風/半荘 の順に連結
pub fn extract_rules(head: &RecordGame, dict: &Dictionary) -> RuleSummary {
    let n = head.player_count();
    let mode = head.mode();
    let meta = head.meta();
    let detail = head.detail_rule();

    let mut disp = String::new();
    let mut lobby_suffix = String::new();
    let mut aka_count = n.saturating_sub(1) as u32;
    let mut tsumo_loss_disabled = false;

    if n == 3 {
        disp += dict.lookup_or_empty(RUNE, "sanma");
    }

    if meta.mode_id != 0 {
        // 段位戦,一般戦
        disp += dict.lookup_or_empty(MATCHMODE, meta.mode_id);
    } else if meta.room_id != 0 {
        disp += dict.lookup_or_empty(RUNE, "friendly");
        lobby_suffix = format!(": {}", meta.room_id);
        aka_count = detail.dora_count;
        tsumo_loss_disabled = n == 3 && !detail.have_zimosun;
    } else if meta.contest_uid != 0 {
        disp += dict.lookup_or_empty(RUNE, "tournament");
        lobby_suffix = format!(": {}", meta.contest_uid);
        aka_count = detail.dora_count;
        tsumo_loss_disabled = n == 3 && !detail.have_zimosun;
    }

    match mode.mode {
        1 => disp += dict.lookup_or_empty(RUNE, "tonpuu"),
        2 => disp += dict.lookup_or_empty(RUNE, "hanchan"),
        _ => {}
    }

    let aka_dora = if meta.mode_id == 0 && detail.dora_count == 0 {
        AkaDora::new(0, 0, 0)
    } else {
        AkaDora::new(
            1,
            if aka_count == 4 { 2 } else { 1 },
            if n == 4 { 1 } else { 0 },
        )
    };

    let rule = RuleSummary {
        display_text: disp,
        aka_dora,
        tsumo_loss_disabled,
        lobby_suffix,
    };
    debug!("rule: {:?}", rule);
    rule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::*;
    use crate::util::test::*;

    fn rules(head: &RecordGame) -> RuleSummary {
        extract_rules(head, &Dictionary::builtin())
    }

    fn set_meta(head: &mut RecordGame, meta: GameMetaData) {
        head.config.as_mut().unwrap().meta = Some(meta);
    }

    fn set_mode(head: &mut RecordGame, mode: u32, dora_count: u32, have_zimosun: bool) {
        head.config.as_mut().unwrap().mode = Some(GameMode {
            mode,
            detail_rule: Some(GameDetailRule {
                dora_count,
                have_zimosun,
            }),
        });
    }

    #[test]
    fn ranked_match() {
        let r = rules(&head_4p());
        assert_eq!(r.display_text, "玉の間南");
        assert_eq!(r.aka_dora, AkaDora::new(1, 1, 1));
        assert_eq!(r.lobby_suffix, "");
        assert!(!r.tsumo_loss_disabled);
    }

    #[test]
    fn round_length_marker() {
        let mut head = head_4p();
        set_mode(&mut head, 1, 3, false);
        assert_eq!(rules(&head).display_text, "玉の間東");

        // 東風,半荘以外は付けない
        set_mode(&mut head, 3, 3, false);
        assert_eq!(rules(&head).display_text, "玉の間");
    }

    #[test]
    fn friendly_match() {
        let mut head = head_4p();
        set_meta(
            &mut head,
            GameMetaData {
                room_id: 4321,
                ..Default::default()
            },
        );
        set_mode(&mut head, 2, 4, false);
        let r = rules(&head);
        assert_eq!(r.display_text, "友人戦南");
        assert_eq!(r.lobby_suffix, ": 4321");
        assert_eq!(r.aka_dora, AkaDora::new(1, 2, 1));
        assert!(!r.tsumo_loss_disabled);

        // 赤なし
        set_mode(&mut head, 2, 0, false);
        assert_eq!(rules(&head).aka_dora, AkaDora::new(0, 0, 0));
    }

    #[test]
    fn sanma_friendly_match() {
        let mut head = head_3p_friendly();
        set_mode(&mut head, 1, 3, false);
        let r = rules(&head);
        assert_eq!(r.display_text, "三友人戦東");
        assert_eq!(r.lobby_suffix, ": 123456");
        assert_eq!(r.aka_dora, AkaDora::new(1, 1, 0));
        assert!(r.tsumo_loss_disabled);

        set_mode(&mut head, 1, 3, true);
        assert!(!rules(&head).tsumo_loss_disabled);
    }

    #[test]
    fn tournament_match() {
        let mut head = head_4p();
        set_meta(
            &mut head,
            GameMetaData {
                contest_uid: 98765,
                ..Default::default()
            },
        );
        let r = rules(&head);
        assert_eq!(r.display_text, "大会戦南");
        assert_eq!(r.lobby_suffix, ": 98765");
        assert_eq!(r.aka_dora, AkaDora::new(1, 1, 1));
    }
}
