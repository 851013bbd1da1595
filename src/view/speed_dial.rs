use serde::{Deserialize, Serialize};

// スピードダイヤル(フローティングメニュー)の状態モデル
// 時計は持たない. mouse_leave()が遅延時間を返し, 実際の計時と
// close_after_leave()の呼び出しは描画側の責務.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Click,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

// ツールチップの表示側
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SpeedDial {
    pub actions: Vec<Action>,
    pub position: Position,
    pub direction: Direction,
    pub trigger: Trigger,
    pub gap: u32, // 単位: 0.25rem
    pub hover_delay_ms: u32,
    open: bool,
    pending_close: bool,
}

impl SpeedDial {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            position: Position::TopRight,
            direction: Direction::Down,
            trigger: Trigger::Click,
            gap: 3,
            hover_delay_ms: 300,
            open: false,
            pending_close: false,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    // 主ボタンのクリック (clickトリガのみ)
    pub fn toggle(&mut self) {
        if self.trigger == Trigger::Click {
            self.open = !self.open;
        }
    }

    // メニュー外のクリックで閉じる (clickトリガのみ)
    pub fn click_outside(&mut self) {
        if self.trigger == Trigger::Click {
            self.open = false;
        }
    }

    // hoverトリガ: 進入で開く. 閉鎖予約があれば取り消す.
    pub fn mouse_enter(&mut self) {
        if self.trigger == Trigger::Hover {
            self.open = true;
            self.pending_close = false;
        }
    }

    // hoverトリガ: 離脱で閉鎖を予約し, 待機時間(ms)を返す
    pub fn mouse_leave(&mut self) -> Option<u32> {
        if self.trigger == Trigger::Hover && self.open {
            self.pending_close = true;
            Some(self.hover_delay_ms)
        } else {
            None
        }
    }

    // 待機時間経過後に描画側から呼ぶ. 予約が取り消し済みなら何もしない.
    pub fn close_after_leave(&mut self) {
        if self.pending_close {
            self.open = false;
            self.pending_close = false;
        }
    }

    // アクション実行. clickトリガではメニューを閉じる.
    pub fn activate(&mut self, index: usize) -> Option<&Action> {
        if !self.open || index >= self.actions.len() {
            return None;
        }
        if self.trigger == Trigger::Click {
            self.open = false;
        }
        Some(&self.actions[index])
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self.direction, Direction::Up | Direction::Down)
    }

    // 展開アニメーションの初期オフセット
    pub fn enter_offset(&self) -> i32 {
        match self.direction {
            Direction::Up | Direction::Left => 20,
            Direction::Down | Direction::Right => -20,
        }
    }

    // ツールチップは展開方向の反対側に出す
    pub fn tooltip_side(&self) -> Side {
        match self.direction {
            Direction::Up => Side::Bottom,
            Direction::Down => Side::Top,
            Direction::Left => Side::Right,
            Direction::Right => Side::Left,
        }
    }
}

#[cfg(test)]
fn dial(trigger: Trigger) -> SpeedDial {
    let actions = vec![
        Action {
            label: "Quit Game".to_string(),
        },
        Action {
            label: "Sign Out".to_string(),
        },
    ];
    let mut d = SpeedDial::new(actions);
    d.trigger = trigger;
    d
}

#[test]
fn test_click_toggle() {
    let mut d = dial(Trigger::Click);
    assert!(!d.is_open());
    d.toggle();
    assert!(d.is_open());
    d.toggle();
    assert!(!d.is_open());

    d.toggle();
    d.click_outside();
    assert!(!d.is_open());
}

#[test]
fn test_click_ignores_hover_events() {
    let mut d = dial(Trigger::Click);
    d.mouse_enter();
    assert!(!d.is_open());
    assert_eq!(d.mouse_leave(), None);
}

#[test]
fn test_hover_open_close() {
    let mut d = dial(Trigger::Hover);
    d.mouse_enter();
    assert!(d.is_open());
    assert_eq!(d.mouse_leave(), Some(300));
    d.close_after_leave();
    assert!(!d.is_open());
}

#[test]
fn test_hover_reenter_cancels_close() {
    let mut d = dial(Trigger::Hover);
    d.mouse_enter();
    d.mouse_leave();
    d.mouse_enter(); // 待機中に再進入
    d.close_after_leave();
    assert!(d.is_open());
}

#[test]
fn test_activate() {
    let mut d = dial(Trigger::Click);
    assert_eq!(d.activate(0), None); // 閉じている間は無効
    d.toggle();
    let label = d.activate(1).map(|a| a.label.clone());
    assert_eq!(label.as_deref(), Some("Sign Out"));
    assert!(!d.is_open()); // clickトリガは実行で閉じる
    assert_eq!(d.activate(9), None);
}

#[test]
fn test_direction_maps() {
    let mut d = dial(Trigger::Click);
    assert!(d.is_vertical());
    assert_eq!(d.enter_offset(), -20);
    assert_eq!(d.tooltip_side(), Side::Top);

    d.direction = Direction::Up;
    assert_eq!(d.enter_offset(), 20);
    assert_eq!(d.tooltip_side(), Side::Bottom);

    d.direction = Direction::Left;
    assert!(!d.is_vertical());
    assert_eq!(d.enter_offset(), 20);
    assert_eq!(d.tooltip_side(), Side::Right);

    d.direction = Direction::Right;
    assert_eq!(d.enter_offset(), -20);
    assert_eq!(d.tooltip_side(), Side::Left);
}
