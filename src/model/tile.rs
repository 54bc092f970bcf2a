use super::*;
use crate::error::DecodeError;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile(pub Type, pub Tnum); // (type index, number index)

impl Tile {
    // 雀魂の牌表記 ("5m", "0p", "7z" 数字が先)
    pub fn from_mjsoul(s: &str) -> Result<Self, DecodeError> {
        let invalid = || DecodeError::InvalidTile(s.to_string());
        let mut cs = s.chars();
        let (Some(n), Some(t), None) = (cs.next(), cs.next(), cs.next()) else {
            return Err(invalid());
        };
        let ti = match t {
            'm' => TM,
            'p' => TP,
            's' => TS,
            'z' => TZ,
            _ => return Err(invalid()),
        };
        let ni = n.to_digit(10).ok_or_else(invalid)? as Tnum;
        let valid = if ti == TZ {
            (1..=DR).contains(&ni)
        } else {
            ni <= 9
        };
        if !valid {
            return Err(invalid());
        }
        Ok(Self(ti, ni))
    }

    // 赤5の場合,通常の5を返却. それ以外の場合はコピーをそのまま返却.
    #[inline]
    pub fn to_normal(self) -> Self {
        if self.1 == 0 {
            Self(self.0, 5)
        } else {
            self
        }
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        self.0 != TZ
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.0 != TZ && self.1 == 0
    }

    // 天鳳の牌番号 (11~19: 萬子, 21~29: 筒子, 31~39: 索子, 41~47: 字牌, 51~53: 赤5)
    pub fn to_tenhou(self) -> i64 {
        (match self {
            Tile(ti, 0) => 50 + ti + 1,
            Tile(ti, ni) => (ti + 1) * 10 + ni,
        }) as i64
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.1, ['m', 'p', 's', 'z'][self.0])
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub fn tiles_from_mjsoul<S: AsRef<str>>(v: &[S]) -> Result<Vec<Tile>, DecodeError> {
    v.iter().map(|s| Tile::from_mjsoul(s.as_ref())).collect()
}

pub fn tiles_to_tenhou(v: &[Tile]) -> Vec<i64> {
    v.iter().map(|&t| t.to_tenhou()).collect()
}

#[test]
fn test_tile_notation() {
    let t = Tile::from_mjsoul("0p").unwrap();
    assert_eq!(t, Tile(TP, 0));
    assert!(t.is_red());
    assert_eq!(t.to_normal(), Tile(TP, 5));
    assert_eq!(t.to_tenhou(), 52);
    assert_eq!(Tile::from_mjsoul("7z").unwrap().to_tenhou(), 47);
    assert_eq!(Tile::from_mjsoul("1m").unwrap().to_tenhou(), 11);
    assert_eq!(Tile::from_mjsoul("9s").unwrap().to_string(), "9s");

    for s in ["", "5", "5x", "8z", "0z", "55m"] {
        assert!(Tile::from_mjsoul(s).is_err(), "{}", s);
    }
}
