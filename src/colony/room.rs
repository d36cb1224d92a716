/// Role of a room in the colony
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomKind {
    Start,
    End,
    Ordinary,
}

impl RoomKind {
    /// Map a `##start` / `##end` command line to its kind
    pub fn from_marker(line: &str) -> Option<Self> {
        match line {
            "##start" => Some(RoomKind::Start),
            "##end" => Some(RoomKind::End),
            _ => None,
        }
    }

    /// Command line announcing this kind, if any
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            RoomKind::Start => Some("##start"),
            RoomKind::End => Some("##end"),
            RoomKind::Ordinary => None,
        }
    }
}

/// A named room; coordinates are display metadata only
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub kind: RoomKind,
}

impl Room {
    pub fn new(name: impl Into<String>, x: i64, y: i64, kind: RoomKind) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            kind,
        }
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == RoomKind::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == RoomKind::End
    }
}
