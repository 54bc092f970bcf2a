use serde_json::{json, Value};

use crate::model::record::PlayerItem;
use crate::model::*;

// [Score]
// sc: 座席ごとに [終局時の持ち点, 最終スコア(千点単位)]
// ranks: 終局結果の並び順そのまま
pub fn aggregate(results: &[PlayerItem], n: usize) -> (Vec<Value>, Vec<Seat>) {
    let mut sc = vec![json!(0); 2 * n];
    let mut ranks = vec![];
    for r in results {
        let s = r.seat as Seat;
        if s < n {
            sc[2 * s] = json!(r.part_point_1);
            sc[2 * s + 1] = json!(r.total_point as f64 / 1000.0);
        }
        ranks.push(s);
    }
    (sc, ranks)
}
