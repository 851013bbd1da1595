use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::common::{vec_to_string, Res};
use crate::warn;

// ロビーの部屋一覧
// 部屋情報は静的モックまたは外部供給のJSON. ゲームの状態は持たない.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lobby {
    pub rooms: Vec<Room>,
}

impl Default for Lobby {
    fn default() -> Self {
        let rooms = (1..=5)
            .map(|i| Room {
                name: format!("Room {}", i),
            })
            .collect();
        Self { rooms }
    }
}

impl Lobby {
    pub fn from_json(json: &str) -> Res<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // パース失敗時は警告を出して既定の部屋一覧を使用
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(lobby) => lobby,
            Err(e) => {
                warn!("invalid room list: {}", e);
                Self::default()
            }
        }
    }
}

impl fmt::Display for Lobby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rooms: {}", vec_to_string(&self.rooms))
    }
}

#[test]
fn test_default_rooms() {
    let lobby = Lobby::default();
    assert_eq!(lobby.rooms.len(), 5);
    assert_eq!(lobby.rooms[0].name, "Room 1");
    assert_eq!(lobby.rooms[4].name, "Room 5");
}

#[test]
fn test_from_json() {
    let json = r#"{"rooms":[{"name":"Room A"},{"name":"Room B"}]}"#;
    let lobby = Lobby::from_json(json).unwrap();
    assert_eq!(lobby.rooms.len(), 2);
    assert_eq!(lobby.rooms[1].name, "Room B");
    assert_eq!(serde_json::to_string(&lobby).unwrap(), json);
}

#[test]
fn test_from_json_fallback() {
    let lobby = Lobby::from_json_or_default("not json");
    assert_eq!(lobby, Lobby::default());
}

#[test]
fn test_display() {
    let lobby = Lobby::from_json_or_default(r#"{"rooms":[{"name":"Room 1"}]}"#);
    assert_eq!(format!("{}", lobby), "rooms: [Room 1]");
}
