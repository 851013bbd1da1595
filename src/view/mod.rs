// 各ページのビューモデル (静的データまたは外部供給データ駆動)
mod lobby;
mod speed_dial;
mod table;

pub use lobby::*;
pub use speed_dial::*;
pub use table::*;
