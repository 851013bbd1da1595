use std::convert::TryFrom;
use std::fmt;

use serde::{de, ser};

use super::define::*;

// 牌 (整数IDのnewtype)
// IDが定義域外でも値としては正常に扱う. 不正IDはname()がNoneを返す.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile(pub TileId);

// 名前テーブル (ID帯域 → アセット名)
const MAN_NAMES: [&str; 9] = [
    "Man1", "Man2", "Man3", "Man4", "Man5", "Man6", "Man7", "Man8", "Man9",
];
const PIN_NAMES: [&str; 9] = [
    "Pin1", "Pin2", "Pin3", "Pin4", "Pin5", "Pin6", "Pin7", "Pin8", "Pin9",
];
const SOU_NAMES: [&str; 9] = [
    "Sou1", "Sou2", "Sou3", "Sou4", "Sou5", "Sou6", "Sou7", "Sou8", "Sou9",
];
const WIND_NAMES: [&str; 4] = ["Ton", "Nan", "Shaa", "Pei"];
const DRAGON_NAMES: [&str; 3] = ["Haku", "Hatsu", "Chun"];
const DORA_NAMES: [&str; 3] = ["Man5-Dora", "Pin5-Dora", "Sou5-Dora"];

// グループ化用のID一覧
pub const CHARACTERS: [TileId; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
pub const DOTS: [TileId; 9] = [11, 12, 13, 14, 15, 16, 17, 18, 19];
pub const BAMBOO: [TileId; 9] = [21, 22, 23, 24, 25, 26, 27, 28, 29];
pub const WINDS: [TileId; 4] = [31, 32, 33, 34];
pub const DRAGONS: [TileId; 3] = [35, 36, 37];
pub const DORAS: [TileId; 3] = [41, 42, 43];
pub const SPECIALS: [TileId; 2] = [50, 51];

impl Tile {
    // 正規名を返却. 定義域外のIDはNone.
    pub fn name(&self) -> Option<&'static str> {
        let id = self.0;
        match id {
            MAN_FIRST..=MAN_LAST => Some(MAN_NAMES[(id - MAN_FIRST) as usize]),
            PIN_FIRST..=PIN_LAST => Some(PIN_NAMES[(id - PIN_FIRST) as usize]),
            SOU_FIRST..=SOU_LAST => Some(SOU_NAMES[(id - SOU_FIRST) as usize]),
            WIND_FIRST..=WIND_LAST => Some(WIND_NAMES[(id - WIND_FIRST) as usize]),
            DRAGON_FIRST..=DRAGON_LAST => Some(DRAGON_NAMES[(id - DRAGON_FIRST) as usize]),
            DORA_FIRST..=DORA_LAST => Some(DORA_NAMES[(id - DORA_FIRST) as usize]),
            ID_BACK => Some("Back"),
            ID_BLANK => Some("Blank"),
            ID_FRONT => Some("Front"),
            _ => None,
        }
    }

    // 表示用の名前. 定義域外は"Unknown".
    #[inline]
    pub fn display_name(&self) -> &'static str {
        self.name().unwrap_or("Unknown")
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.name().is_some()
    }

    // 数牌
    #[inline]
    pub fn is_suit(&self) -> bool {
        matches!(
            self.0,
            MAN_FIRST..=MAN_LAST | PIN_FIRST..=PIN_LAST | SOU_FIRST..=SOU_LAST
        )
    }

    // 風牌
    #[inline]
    pub fn is_wind(&self) -> bool {
        matches!(self.0, WIND_FIRST..=WIND_LAST)
    }

    // 三元牌
    #[inline]
    pub fn is_dragon(&self) -> bool {
        matches!(self.0, DRAGON_FIRST..=DRAGON_LAST)
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.is_wind() || self.is_dragon()
    }

    // 赤5
    #[inline]
    pub fn is_dora(&self) -> bool {
        matches!(self.0, DORA_FIRST..=DORA_LAST)
    }

    // 空白牌・無地の表面
    #[inline]
    pub fn is_special(&self) -> bool {
        self.0 == ID_BLANK || self.0 == ID_FRONT
    }

    // 裏面
    #[inline]
    pub fn is_back(&self) -> bool {
        self.0 == ID_BACK
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.display_name(), self.0)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("integer tile id")
    }

    // TileIdに収まらない値は切り捨てると有効IDに化けるため, 不正IDへ丸める
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Tile(TileId::try_from(v).unwrap_or(TileId::MIN)))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Tile(TileId::try_from(v).unwrap_or(TileId::MIN)))
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as de::Deserializer<'de>>::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_i64(TileVisitor)
    }
}

#[test]
fn test_suit_names() {
    for (prefix, arr) in [("Man", CHARACTERS), ("Pin", DOTS), ("Sou", BAMBOO)] {
        for (i, &id) in arr.iter().enumerate() {
            let t = Tile(id);
            assert!(t.is_valid());
            assert!(t.is_suit());
            assert_eq!(t.display_name(), format!("{}{}", prefix, i + 1));
        }
    }
}

#[test]
fn test_honor_names() {
    assert_eq!(Tile(31).name(), Some("Ton"));
    assert_eq!(Tile(32).name(), Some("Nan"));
    assert_eq!(Tile(33).name(), Some("Shaa"));
    assert_eq!(Tile(34).name(), Some("Pei"));
    assert_eq!(Tile(35).name(), Some("Haku"));
    assert_eq!(Tile(36).name(), Some("Hatsu"));
    assert_eq!(Tile(37).name(), Some("Chun"));
    for &id in &WINDS {
        assert!(Tile(id).is_wind() && Tile(id).is_honor());
    }
    for &id in &DRAGONS {
        assert!(Tile(id).is_dragon() && Tile(id).is_honor());
    }
}

#[test]
fn test_dora_and_special_names() {
    assert_eq!(Tile(41).name(), Some("Man5-Dora"));
    assert_eq!(Tile(42).name(), Some("Pin5-Dora"));
    assert_eq!(Tile(43).name(), Some("Sou5-Dora"));
    assert_eq!(Tile(50).name(), Some("Blank"));
    assert_eq!(Tile(51).name(), Some("Front"));
    assert_eq!(Tile(0).name(), Some("Back"));
    assert!(Tile(41).is_dora());
    assert!(Tile(50).is_special() && Tile(51).is_special());
    assert!(Tile(0).is_back());
}

#[test]
fn test_invalid_ids() {
    for id in [10, 20, 30, 38, 40, 44, 49, 52, 100, -1] {
        let t = Tile(id);
        assert_eq!(t.name(), None);
        assert!(!t.is_valid());
        assert_eq!(t.display_name(), "Unknown");
    }
}

#[test]
fn test_name_idempotent() {
    for id in -5..60 {
        assert_eq!(Tile(id).name(), Tile(id).name());
    }
}

#[test]
fn test_serde() {
    assert_eq!(serde_json::to_string(&Tile(1)).unwrap(), "\"Man1\"");
    assert_eq!(serde_json::to_string(&Tile(41)).unwrap(), "\"Man5-Dora\"");
    assert_eq!(serde_json::to_string(&Tile(999)).unwrap(), "\"Unknown\"");
    let t: Tile = serde_json::from_str("21").unwrap();
    assert_eq!(t, Tile(21));
    // 定義域外のIDもデシリアライズ自体は成功する
    let t: Tile = serde_json::from_str("-1").unwrap();
    assert!(!t.is_valid());
}

#[test]
fn test_deserialize_overflow() {
    // 2^32+1 を i32 に切り捨てると Man1 になってしまう
    let t: Tile = serde_json::from_str("4294967297").unwrap();
    assert_eq!(t, Tile(TileId::MIN));
    assert!(!t.is_valid());

    let t: Tile = serde_json::from_str("9223372036854775807").unwrap();
    assert!(!t.is_valid());
    let t: Tile = serde_json::from_str("-4294967296").unwrap();
    assert!(!t.is_valid());
}
