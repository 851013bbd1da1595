use std::fmt;

use crate::model::Tile;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

// 手牌中の定義域外の牌を抽出
// 不正IDをどう扱うか(拒否・無視)は呼び出し側のポリシー
pub fn invalid_tiles(hand: &[Tile]) -> Vec<Tile> {
    hand.iter().copied().filter(|t| !t.is_valid()).collect()
}

pub fn is_valid_hand(hand: &[Tile]) -> bool {
    hand.iter().all(|t| t.is_valid())
}

#[test]
fn test_hand_validity() {
    let hand = vec![Tile(1), Tile(19), Tile(34), Tile(43)];
    assert!(is_valid_hand(&hand));
    assert_eq!(invalid_tiles(&hand), vec![]);

    let hand = vec![Tile(1), Tile(10), Tile(34), Tile(-1)];
    assert!(!is_valid_hand(&hand));
    assert_eq!(invalid_tiles(&hand), vec![Tile(10), Tile(-1)]);
}

#[test]
fn test_vec_to_string() {
    assert_eq!(vec_to_string(&[Tile(31), Tile(35)]), "[Ton, Haku]");
    let empty: [Tile; 0] = [];
    assert_eq!(vec_to_string(&empty), "[]");
}
