use serde::{Deserialize, Serialize};

// 牌の表示サイズ
// 名前付き4種と段階指定8種. cell()は(幅, 高さ)を0.25rem単位で返却.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "1")]
    S1,
    #[serde(rename = "2")]
    S2,
    #[serde(rename = "3")]
    S3,
    #[serde(rename = "4")]
    S4,
    #[serde(rename = "6")]
    S6,
    #[serde(rename = "7")]
    S7,
    #[serde(rename = "8")]
    S8,
    #[serde(rename = "9")]
    S9,
}

impl Size {
    pub fn cell(self) -> (u32, u32) {
        match self {
            Self::Sm | Self::S2 => (8, 11),
            Self::Md | Self::S4 => (12, 16),
            Self::Lg | Self::S6 => (16, 22),
            Self::Xl | Self::S8 => (20, 28),
            Self::S1 => (6, 8),
            Self::S3 => (10, 14),
            Self::S7 => (18, 24),
            Self::S9 => (24, 32),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::Md
    }
}

// 強調・状態表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Special {
    Normal,
    Highlighted,
    Focused,
    Disabled,
    Warning,
    Success,
}

impl Default for Special {
    fn default() -> Self {
        Self::Normal
    }
}

// 回転角
// 270と-90は別の入力値として受理するが, 変換後の見た目は同一(-90度)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    #[serde(rename = "0")]
    R0,
    #[serde(rename = "90")]
    R90,
    #[serde(rename = "180")]
    R180,
    #[serde(rename = "270")]
    R270,
    #[serde(rename = "-90")]
    RNeg90,
}

impl Rotation {
    // 実際に適用する回転角(度)
    pub fn transform_degrees(self) -> i32 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 | Self::RNeg90 => -90,
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::R0
    }
}

// 1回の描画に適用する5軸のバリアント
// 各軸は独立. 軸間の依存は裏面表示時のホバー・選択の無効化のみ.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderVariant {
    pub size: Size,
    pub hoverable: bool,
    pub selected: bool,
    pub special: Special,
    pub rotation: Rotation,
}

impl RenderVariant {
    // 裏面表示の上書きルール. 各軸に埋め込まず後処理として適用する.
    fn face_down(mut self) -> Self {
        self.hoverable = false;
        self.selected = false;
        self
    }
}

pub fn resolve_variant(
    size: Size,
    hoverable: bool,
    selected: bool,
    special: Special,
    rotation: Rotation,
    back: bool,
) -> RenderVariant {
    let v = RenderVariant {
        size,
        hoverable,
        selected,
        special,
        rotation,
    };
    if back { v.face_down() } else { v }
}

#[test]
fn test_face_down_override() {
    let v = resolve_variant(
        Size::Lg,
        true,
        true,
        Special::Highlighted,
        Rotation::R90,
        true,
    );
    assert!(!v.hoverable);
    assert!(!v.selected);
    // 他の軸はそのまま通過する
    assert_eq!(v.size, Size::Lg);
    assert_eq!(v.special, Special::Highlighted);
    assert_eq!(v.rotation, Rotation::R90);
}

#[test]
fn test_face_up_passthrough() {
    let v = resolve_variant(
        Size::Sm,
        true,
        true,
        Special::Warning,
        Rotation::R180,
        false,
    );
    assert!(v.hoverable);
    assert!(v.selected);
}

#[test]
fn test_deterministic() {
    let a = resolve_variant(Size::Xl, false, true, Special::Focused, Rotation::R270, false);
    let b = resolve_variant(Size::Xl, false, true, Special::Focused, Rotation::R270, false);
    assert_eq!(a, b);
}

#[test]
fn test_rotation_alias() {
    // 270と-90は別の値だが適用される変換は同じ
    assert_ne!(Rotation::R270, Rotation::RNeg90);
    assert_eq!(
        Rotation::R270.transform_degrees(),
        Rotation::RNeg90.transform_degrees()
    );
    assert_eq!(Rotation::R270.transform_degrees(), -90);
    assert_eq!(Rotation::R0.transform_degrees(), 0);
    assert_eq!(Rotation::R90.transform_degrees(), 90);
    assert_eq!(Rotation::R180.transform_degrees(), 180);
}

#[test]
fn test_defaults() {
    let v = RenderVariant::default();
    assert_eq!(v.size, Size::Md);
    assert!(!v.hoverable);
    assert!(!v.selected);
    assert_eq!(v.special, Special::Normal);
    assert_eq!(v.rotation, Rotation::R0);
}

#[test]
fn test_named_size_aliases() {
    // 名前付きサイズは対応する段階と同寸
    assert_eq!(Size::Sm.cell(), Size::S2.cell());
    assert_eq!(Size::Md.cell(), Size::S4.cell());
    assert_eq!(Size::Lg.cell(), Size::S6.cell());
    assert_eq!(Size::Xl.cell(), Size::S8.cell());
    assert_eq!(Size::Md.cell(), (12, 16));
}

#[test]
fn test_variant_serde() {
    let v = resolve_variant(Size::S9, true, false, Special::Success, Rotation::RNeg90, false);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(
        json,
        r#"{"size":"9","hoverable":true,"selected":false,"special":"success","rotation":"-90"}"#
    );
    let v2: RenderVariant = serde_json::from_str(&json).unwrap();
    assert_eq!(v, v2);
}
