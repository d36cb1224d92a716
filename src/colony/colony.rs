use crate::colony::room::{Room, RoomKind};
use crate::colony::tunnel::Tunnel;
use crate::error::{LemInError, Result};
use std::collections::HashMap;

/// Rooms, symmetric adjacency and the two distinguished endpoints.
///
/// Read-only once built. The adjacency map is authoritative: tunnels may name
/// rooms that were never declared with coordinates.
#[derive(Clone, Debug)]
pub struct Colony {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
    tunnels: Vec<Tunnel>,
    adjacency: HashMap<String, Vec<String>>,
    start: usize,
    end: usize,
}

impl Colony {
    /// Neighbors of `name` in tunnel declaration order; empty if none
    pub fn neighbors(&self, name: &str) -> &[String] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Room declared under `name`, if it had a room line
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|&i| &self.rooms[i])
    }

    pub fn start(&self) -> &Room {
        &self.rooms[self.start]
    }

    pub fn end(&self) -> &Room {
        &self.rooms[self.end]
    }

    #[inline]
    pub fn is_start(&self, name: &str) -> bool {
        self.start().name == name
    }

    #[inline]
    pub fn is_end(&self, name: &str) -> bool {
        self.end().name == name
    }

    /// Rooms in declaration order
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Tunnels in declaration order
    pub fn tunnels(&self) -> &[Tunnel] {
        &self.tunnels
    }

    /// Render the colony back in the input format
    pub fn describe(&self, ants: u32) -> String {
        let mut out = String::with_capacity(64 * (self.rooms.len() + self.tunnels.len()));
        out.push_str(&ants.to_string());
        out.push('\n');
        for room in &self.rooms {
            if let Some(marker) = room.kind.marker() {
                out.push_str(marker);
                out.push('\n');
            }
            out.push_str(&format!("{} {} {}\n", room.name, room.x, room.y));
        }
        for tunnel in &self.tunnels {
            out.push_str(&tunnel.to_string());
            out.push('\n');
        }
        out
    }
}

/// Incremental construction of a [`Colony`], enforcing name uniqueness,
/// single endpoints and tunnel symmetry.
#[derive(Debug, Default)]
pub struct ColonyBuilder {
    rooms: Vec<Room>,
    index: HashMap<String, usize>,
    tunnels: Vec<Tunnel>,
    adjacency: HashMap<String, Vec<String>>,
    start: Option<usize>,
    end: Option<usize>,
}

impl ColonyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a room. Invalid format errors carry line 0; the parser
    /// re-anchors them.
    pub fn add_room(&mut self, room: Room) -> Result<&mut Self> {
        if self.index.contains_key(&room.name) {
            return Err(LemInError::invalid(0, format!("duplicate room `{}`", room.name)));
        }
        let id = self.rooms.len();
        let slot = match room.kind {
            RoomKind::Start => Some(&mut self.start),
            RoomKind::End => Some(&mut self.end),
            RoomKind::Ordinary => None,
        };
        if let Some(slot) = slot {
            if slot.is_some() {
                return Err(LemInError::invalid(0, format!("second {:?} room", room.kind)));
            }
            *slot = Some(id);
        }
        self.index.insert(room.name.clone(), id);
        self.rooms.push(room);
        Ok(self)
    }

    /// Link two rooms in both directions
    pub fn add_tunnel(&mut self, tunnel: Tunnel) -> &mut Self {
        self.adjacency
            .entry(tunnel.a.clone())
            .or_default()
            .push(tunnel.b.clone());
        self.adjacency
            .entry(tunnel.b.clone())
            .or_default()
            .push(tunnel.a.clone());
        self.tunnels.push(tunnel);
        self
    }

    pub fn build(self) -> Result<Colony> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(Colony {
                rooms: self.rooms,
                index: self.index,
                tunnels: self.tunnels,
                adjacency: self.adjacency,
                start,
                end,
            }),
            _ => Err(LemInError::MissingEndpoint),
        }
    }
}
