// 牌の描画解決 (アセットパスと表示バリアント)
mod theme;
mod variant;

pub use theme::*;
pub use variant::*;
