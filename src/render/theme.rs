use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Tile;

// 牌画像のテーマ (アセットディレクトリ名に一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Regular,
    Black,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Regular
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => write!(f, "Regular"),
            Self::Black => write!(f, "Black"),
        }
    }
}

// 牌画像のパスを合成
// backの場合はIDによらず裏面, 定義域外のIDは空白牌に差し替え
pub fn asset_path(tile: Tile, back: bool, theme: Theme) -> String {
    let name = if back {
        "Back"
    } else {
        tile.name().unwrap_or("Blank")
    };
    format!("{}/{}.svg", theme, name)
}

#[test]
fn test_asset_path() {
    assert_eq!(asset_path(Tile(1), false, Theme::Regular), "Regular/Man1.svg");
    assert_eq!(asset_path(Tile(33), false, Theme::Black), "Black/Shaa.svg");
    assert_eq!(asset_path(Tile(999), false, Theme::Black), "Black/Blank.svg");
}

#[test]
fn test_asset_path_back() {
    // 裏面指定はIDを無視する
    for id in [0, 1, 19, 34, 43, 50, 999, -1] {
        assert_eq!(asset_path(Tile(id), true, Theme::Regular), "Regular/Back.svg");
    }
}
