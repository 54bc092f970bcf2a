use crate::model::record::RecordGame;
use crate::model::*;

// [PlayerIdentity]
// 空席はAIとして扱い,座席順にAI1,AI2,...と採番する. ranks (順位順の座席) の順に並べて返却
pub fn normalize(head: &RecordGame, ranks: &[Seat]) -> Vec<PlayerIdentity> {
    let mut seats: [Option<PlayerIdentity>; SEAT] = Default::default();
    for a in &head.accounts {
        let s = a.seat as Seat;
        if s < SEAT {
            seats[s] = Some(PlayerIdentity::new(s, &a.nickname, a.account_id as i64));
        }
    }

    let mut k = 0;
    let seats: Vec<PlayerIdentity> = seats
        .into_iter()
        .enumerate()
        .map(|(s, p)| {
            p.unwrap_or_else(|| {
                k += 1;
                PlayerIdentity::ai(s, k)
            })
        })
        .collect();

    ranks.iter().filter_map(|&s| seats.get(s).cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::aggregate;
    use crate::util::test::*;

    fn mapping(head: &RecordGame) -> Vec<PlayerIdentity> {
        let (_, ranks) = aggregate(head.result_players(), head.player_count());
        normalize(head, &ranks)
    }

    #[test]
    fn result_order() {
        let ps = mapping(&head_4p());
        let names: Vec<_> = ps.iter().map(|p| p.nickname.as_str()).collect();
        assert_eq!(names, vec!["carol", "dave", "alice", "bob"]);
        assert_eq!(ps[0].seat, 2);
        assert_eq!(ps[0].account_id, 103);
        assert!(ps.iter().all(|p| p.account_id > 0));
    }

    #[test]
    fn follows_given_ranks() {
        let ps = normalize(&head_4p(), &[1, 0, 3, 2]);
        let seats: Vec<_> = ps.iter().map(|p| p.seat).collect();
        assert_eq!(seats, vec![1, 0, 3, 2]);
        assert_eq!(ps[0].nickname, "bob");
    }

    #[test]
    fn ai_seats_are_renumbered() {
        let mut head = head_4p();
        head.accounts.retain(|a| a.seat == 0 || a.seat == 2);
        let ps = mapping(&head);
        assert_eq!(
            ps,
            vec![
                PlayerIdentity::new(2, "carol", 103),
                PlayerIdentity::new(3, "AI2", -1002),
                PlayerIdentity::new(0, "alice", 101),
                PlayerIdentity::new(1, "AI1", -1001),
            ]
        );
    }

    #[test]
    fn sanma_hides_fourth_seat() {
        let ps = mapping(&head_3p_friendly());
        assert_eq!(ps.len(), 3);
        assert!(ps.iter().all(|p| p.seat < 3));
        assert_eq!(ps[2], PlayerIdentity::new(1, "AI1", -1001));

        let json = serde_json::to_value(&ps[0]).unwrap();
        assert_eq!(json, serde_json::json!({"nickname": "eve", "account_id": 201}));
    }
}
