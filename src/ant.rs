/// An ant walking the shared path.
///
/// `pos` indexes into the path: 0 is the start room, `len - 1` the end room.
/// It only ever grows, one step per turn at most.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ant {
    pub id: u32,
    pub pos: usize,
}

impl Ant {
    /// Create a new ant in the start room
    pub fn new(id: u32) -> Self {
        Self { id, pos: 0 }
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.pos == 0
    }

    /// Check if ant has reached the last index of a path of `path_len` rooms
    #[inline]
    pub fn has_arrived(&self, path_len: usize) -> bool {
        self.pos + 1 >= path_len
    }

    /// Step one room forward
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ant_creation() {
        let ant = Ant::new(42);

        assert_eq!(ant.id, 42);
        assert_eq!(ant.pos, 0);
        assert!(ant.is_at_start());
        assert!(!ant.has_arrived(3));
    }

    #[test]
    fn test_ant_movement() {
        let mut ant = Ant::new(1);

        ant.advance();
        assert_eq!(ant.pos, 1);
        assert!(!ant.is_at_start());
        assert!(!ant.has_arrived(3));

        ant.advance();
        assert!(ant.has_arrived(3));
    }
}
