use serde::{Deserialize, Serialize};

// 卓面レイアウト
// 同心の3x3グリッド3層: 外層=プレイヤー, 中層=牌山, 内層=河.
// 各層の縁セル8個が表示領域で, 中央セルに次の層が入れ子になる.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ring {
    Player,
    Wall,
    Discard,
}

impl Ring {
    // 層の縁(1列/1行)が占める割合(%)
    pub fn edge_percent(self) -> u32 {
        match self {
            Self::Player => 10,
            Self::Wall => 15,
            Self::Discard => 20,
        }
    }

    fn prefix(self) -> char {
        match self {
            Self::Player => 'P',
            Self::Wall => 'W',
            Self::Discard => 'D',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Cell {
    // 縁セルをDOM上の出現順で列挙 (中央セルは入れ子用なので含まない)
    pub const EDGES: [Cell; 8] = [
        Cell::TopLeft,
        Cell::Top,
        Cell::TopRight,
        Cell::Left,
        Cell::Right,
        Cell::BottomLeft,
        Cell::Bottom,
        Cell::BottomRight,
    ];

    // 3x3グリッド内の(行, 列)
    pub fn grid_pos(self) -> (usize, usize) {
        match self {
            Self::TopLeft => (0, 0),
            Self::Top => (0, 1),
            Self::TopRight => (0, 2),
            Self::Left => (1, 0),
            Self::Center => (1, 1),
            Self::Right => (1, 2),
            Self::BottomLeft => (2, 0),
            Self::Bottom => (2, 1),
            Self::BottomRight => (2, 2),
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::TopLeft => "TL",
            Self::Top => "T",
            Self::TopRight => "TR",
            Self::Left => "L",
            Self::Center => "C",
            Self::Right => "R",
            Self::BottomLeft => "BL",
            Self::Bottom => "B",
            Self::BottomRight => "BR",
        }
    }
}

// モック表示に使うセルラベル (P-TL, W-B, D-Rなど)
pub fn cell_label(ring: Ring, cell: Cell) -> String {
    format!("{}-{}", ring.prefix(), cell.suffix())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableCell {
    Edge {
        ring: Ring,
        cell: Cell,
        label: String,
    },
    // 最内層の中央: 退室ボタンの置き場
    Quit,
}

// 全セルを描画順(外層から内層へ, 各層は行優先)で列挙
pub fn layout() -> Vec<TableCell> {
    let mut cells = vec![];
    push_ring(&mut cells, &[Ring::Player, Ring::Wall, Ring::Discard]);
    cells
}

fn push_ring(cells: &mut Vec<TableCell>, rings: &[Ring]) {
    let ring = rings[0];
    let edge = |cell| TableCell::Edge {
        ring,
        cell,
        label: cell_label(ring, cell),
    };

    // 上段3セルと左セル, 中央(入れ子), 右セル以降の順
    cells.push(edge(Cell::TopLeft));
    cells.push(edge(Cell::Top));
    cells.push(edge(Cell::TopRight));
    cells.push(edge(Cell::Left));
    if rings.len() == 1 {
        cells.push(TableCell::Quit);
    } else {
        push_ring(cells, &rings[1..]);
    }
    cells.push(edge(Cell::Right));
    cells.push(edge(Cell::BottomLeft));
    cells.push(edge(Cell::Bottom));
    cells.push(edge(Cell::BottomRight));
}

#[test]
fn test_edge_percent() {
    assert_eq!(Ring::Player.edge_percent(), 10);
    assert_eq!(Ring::Wall.edge_percent(), 15);
    assert_eq!(Ring::Discard.edge_percent(), 20);
}

#[test]
fn test_cell_label() {
    assert_eq!(cell_label(Ring::Player, Cell::TopLeft), "P-TL");
    assert_eq!(cell_label(Ring::Wall, Cell::Bottom), "W-B");
    assert_eq!(cell_label(Ring::Discard, Cell::Right), "D-R");
}

#[test]
fn test_grid_pos() {
    assert_eq!(Cell::TopLeft.grid_pos(), (0, 0));
    assert_eq!(Cell::Center.grid_pos(), (1, 1));
    assert_eq!(Cell::BottomRight.grid_pos(), (2, 2));
    for cell in Cell::EDGES {
        assert_ne!(cell.grid_pos(), (1, 1));
    }
}

#[test]
fn test_layout_order() {
    let cells = layout();
    // 縁8セル x 3層 + 退室ボタン
    assert_eq!(cells.len(), 25);
    assert_eq!(
        cells[0],
        TableCell::Edge {
            ring: Ring::Player,
            cell: Cell::TopLeft,
            label: "P-TL".to_string(),
        }
    );
    // 外層の左セルの次は中層の先頭
    assert_eq!(
        cells[4],
        TableCell::Edge {
            ring: Ring::Wall,
            cell: Cell::TopLeft,
            label: "W-TL".to_string(),
        }
    );
    // 最内層の中央が退室ボタン
    assert_eq!(cells[12], TableCell::Quit);
    assert_eq!(
        cells[24],
        TableCell::Edge {
            ring: Ring::Player,
            cell: Cell::BottomRight,
            label: "P-BR".to_string(),
        }
    );
}
