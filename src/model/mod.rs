// 麻雀クライアントのデータモデル
mod define;
mod tile;

pub use define::*;
pub use tile::*;
