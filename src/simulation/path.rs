use crate::colony::Colony;
use crate::error::{LemInError, Result};
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Room names from the start room to the end room, both inclusive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    rooms: Vec<String>,
}

impl Path {
    /// Wrap a room sequence. Consecutive rooms are expected to be adjacent.
    pub fn new(rooms: Vec<String>) -> Self {
        Self { rooms }
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of tunnels walked
    pub fn edge_count(&self) -> usize {
        self.rooms.len().saturating_sub(1)
    }

    #[inline]
    pub fn room(&self, idx: usize) -> &str {
        &self.rooms[idx]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rooms.join(" -> "))
    }
}

/// Breadth-first search from the start room to the end room.
///
/// Queue entries carry the whole partial path, so the first one reaching the
/// end is returned as is. Rooms are marked visited when enqueued, which keeps
/// each room expanded once and makes the result a shortest path. Ties go to
/// the adjacency order, i.e. tunnel declaration order.
pub fn find_path(colony: &Colony) -> Result<Path> {
    let start = colony.start().name.as_str();
    let end = colony.end().name.as_str();

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    visited.insert(start);
    queue.push_back(vec![start]);

    while let Some(partial) = queue.pop_front() {
        let Some(&room) = partial.last() else {
            continue;
        };
        if room == end {
            let path = Path::new(partial.into_iter().map(str::to_owned).collect());
            log::info!("shortest path ({} tunnels): {}", path.edge_count(), path);
            return Ok(path);
        }

        for next in colony.neighbors(room) {
            if visited.insert(next.as_str()) {
                let mut extended = Vec::with_capacity(partial.len() + 1);
                extended.extend_from_slice(&partial);
                extended.push(next.as_str());
                queue.push_back(extended);
            }
        }
    }

    log::warn!("{} is unreachable from {}", end, start);
    Err(LemInError::NoPathFound)
}
