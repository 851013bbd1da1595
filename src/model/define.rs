// 型エイリアス
pub type TileId = i32; // 牌ID (疎な整数, 帯域で区分)

// 牌IDの帯域
pub const MAN_FIRST: TileId = 1; // 萬子 Man1~Man9
pub const MAN_LAST: TileId = 9;
pub const PIN_FIRST: TileId = 11; // 筒子 Pin1~Pin9
pub const PIN_LAST: TileId = 19;
pub const SOU_FIRST: TileId = 21; // 索子 Sou1~Sou9
pub const SOU_LAST: TileId = 29;
pub const WIND_FIRST: TileId = 31; // 風牌 Ton,Nan,Shaa,Pei
pub const WIND_LAST: TileId = 34;
pub const DRAGON_FIRST: TileId = 35; // 三元牌 Haku,Hatsu,Chun
pub const DRAGON_LAST: TileId = 37;
pub const DORA_FIRST: TileId = 41; // 赤5 Man5-Dora,Pin5-Dora,Sou5-Dora
pub const DORA_LAST: TileId = 43;

// 特殊牌
pub const ID_BACK: TileId = 0; // 裏面
pub const ID_BLANK: TileId = 50; // 空白牌 (不正IDの代替にも使用)
pub const ID_FRONT: TileId = 51; // 無地の表面
