/// Which rooms of the path currently hold an ant.
///
/// Indexed by path position, since a shortest path never repeats a room.
/// The start (index 0) and end (last index) rooms have no capacity limit
/// and are never recorded.
#[derive(Clone, Debug)]
pub struct OccupancyTable {
    occupied: Vec<bool>,
}

impl OccupancyTable {
    /// Create an empty table for a path of `path_len` rooms
    pub fn new(path_len: usize) -> Self {
        Self {
            occupied: vec![false; path_len],
        }
    }

    #[inline]
    fn is_limited(&self, idx: usize) -> bool {
        idx != 0 && idx + 1 < self.occupied.len()
    }

    /// Check whether an ant may enter the room at `idx`
    #[inline]
    pub fn is_free(&self, idx: usize) -> bool {
        !self.is_limited(idx) || !self.occupied[idx]
    }

    #[inline]
    pub fn occupy(&mut self, idx: usize) {
        if self.is_limited(idx) {
            debug_assert!(!self.occupied[idx], "room {idx} already occupied");
            self.occupied[idx] = true;
        }
    }

    #[inline]
    pub fn release(&mut self, idx: usize) {
        if self.is_limited(idx) {
            self.occupied[idx] = false;
        }
    }

    /// Check if the ordinary room at `idx` holds an ant
    pub fn is_occupied(&self, idx: usize) -> bool {
        self.is_limited(idx) && self.occupied[idx]
    }

    /// Count occupied ordinary rooms
    pub fn count_occupied(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_unlimited() {
        let mut table = OccupancyTable::new(3);

        table.occupy(0);
        table.occupy(2);
        table.occupy(2);

        assert!(table.is_free(0));
        assert!(table.is_free(2));
        assert_eq!(table.count_occupied(), 0);
    }

    #[test]
    fn test_occupy_and_release() {
        let mut table = OccupancyTable::new(4);

        assert!(table.is_free(1));
        table.occupy(1);
        assert!(!table.is_free(1));
        assert!(table.is_occupied(1));
        assert!(table.is_free(2));
        assert_eq!(table.count_occupied(), 1);

        table.release(1);
        assert!(table.is_free(1));
        assert_eq!(table.count_occupied(), 0);
    }

    #[test]
    fn test_two_room_path_has_no_limited_rooms() {
        let mut table = OccupancyTable::new(2);

        table.occupy(1);
        assert!(table.is_free(1));
        assert!(!table.is_occupied(1));
    }
}
