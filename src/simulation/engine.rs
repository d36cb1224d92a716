use crate::ant::Ant;
use crate::error::Result;
use crate::simulation::occupancy::OccupancyTable;
use crate::simulation::path::Path;
use colored::Colorize;
use std::collections::VecDeque;
use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

/// One ant entering one room
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move<'p> {
    pub ant: u32,
    pub room: &'p str,
}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}-{}", self.ant, self.room)
    }
}

/// Moves made during one turn, in ant id order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn<'p> {
    pub number: usize,
    pub moves: Vec<Move<'p>>,
}

impl fmt::Display for Turn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

/// Totals reported once the simulation stops
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationSummary {
    pub ants: u32,
    pub turns: usize,
    pub moves: usize,
    /// Ants that left the start room
    pub released: u32,
    /// Ants standing in the end room
    pub finished: u32,
    pub elapsed: Duration,
}

/// Turn-synchronous scheduler moving every ant along a single path.
///
/// Ants are processed in id order each turn. A room vacated earlier in the
/// turn can be entered by a later ant in the same turn.
///
/// Ants still in the start room are only counted; an [`Ant`] is created when
/// it leaves and dropped once it reaches the end room, so memory follows the
/// path length rather than the population.
pub struct SimulationEngine<'p> {
    path: &'p Path,
    ant_count: u32,
    /// Ants between the start and end rooms, lowest id first
    walking: VecDeque<Ant>,
    occupancy: OccupancyTable,
    turn: usize,
    moves: usize,
    released: u32,
    finished: u32,
}

impl<'p> SimulationEngine<'p> {
    /// Create a new engine with `ant_count` ants waiting in the start room
    pub fn new(path: &'p Path, ant_count: u32) -> Self {
        Self {
            path,
            ant_count,
            walking: VecDeque::new(),
            occupancy: OccupancyTable::new(path.len()),
            turn: 0,
            moves: 0,
            released: 0,
            finished: 0,
        }
    }

    /// Ants between the start and end rooms, in id order
    pub fn walking(&self) -> impl Iterator<Item = &Ant> {
        self.walking.iter()
    }

    /// Ants still in the start room
    pub fn waiting(&self) -> u32 {
        self.ant_count - self.released
    }

    pub fn finished(&self) -> u32 {
        self.finished
    }

    pub fn occupancy(&self) -> &OccupancyTable {
        &self.occupancy
    }

    /// Turns that produced at least one move so far
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Run one turn. Returns `None` once no ant can advance.
    pub fn step(&mut self) -> Option<Turn<'p>> {
        let path = self.path;
        let len = path.len();
        if len < 2 {
            return None;
        }
        let mut moves = Vec::new();

        for ant in self.walking.iter_mut() {
            let next = ant.pos + 1;
            if !self.occupancy.is_free(next) {
                log::trace!("ant {} blocked before {}", ant.id, path.room(next));
                continue;
            }

            self.occupancy.release(ant.pos);
            self.occupancy.occupy(next);
            ant.advance();
            moves.push(Move {
                ant: ant.id,
                room: path.room(next),
            });
        }

        let walking = self.walking.len();
        self.walking.retain(|a| !a.has_arrived(len));
        self.finished += (walking - self.walking.len()) as u32;

        // Waiting ants all aim for path[1]; the first one blocked stops the rest
        while self.released < self.ant_count && self.occupancy.is_free(1) {
            self.released += 1;
            let mut ant = Ant::new(self.released);
            ant.advance();
            self.occupancy.occupy(1);
            moves.push(Move {
                ant: ant.id,
                room: path.room(1),
            });
            if ant.has_arrived(len) {
                self.finished += 1;
            } else {
                self.walking.push_back(ant);
            }
        }

        if moves.is_empty() {
            return None;
        }

        self.turn += 1;
        self.moves += moves.len();
        let turn = Turn {
            number: self.turn,
            moves,
        };
        log::debug!("turn {}: {}", turn.number, turn);
        Some(turn)
    }

    /// Drive turns to completion, writing each turn's line as soon as it is made
    pub fn run_simulation<W: Write>(&mut self, out: &mut W) -> Result<SimulationSummary> {
        let sim_start = Instant::now();

        while let Some(turn) = self.step() {
            writeln!(out, "{turn}")?;
        }
        out.flush()?;

        let summary = self.summary(sim_start.elapsed());
        log::info!(
            "simulation finished after {} turns ({} of {} ants home)",
            summary.turns,
            summary.finished,
            summary.ants
        );
        Ok(summary)
    }

    /// Snapshot of the totals so far
    pub fn summary(&self, elapsed: Duration) -> SimulationSummary {
        SimulationSummary {
            ants: self.ant_count,
            turns: self.turn,
            moves: self.moves,
            released: self.released,
            finished: self.finished,
            elapsed,
        }
    }

    /// Print simulation summary to stderr
    pub fn print_summary(&self, summary: &SimulationSummary) {
        eprintln!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            summary.elapsed.as_secs_f64() * 1000.0,
            format!("(path={} tunnels)", self.path.edge_count()).dimmed(),
            "|".dimmed(),
            format!("ants={}", summary.ants).cyan(),
            format!("released={}", summary.released).cyan(),
            format!("finished={}", summary.finished).cyan(),
            format!("turns={}", summary.turns).cyan(),
            format!("moves={}", summary.moves).cyan(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(rooms: &[&str]) -> Path {
        Path::new(rooms.iter().map(|r| r.to_string()).collect())
    }

    fn run(path: &Path, ants: u32) -> (String, SimulationSummary) {
        let mut out = Vec::new();
        let summary = SimulationEngine::new(path, ants)
            .run_simulation(&mut out)
            .unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_two_ants_single_room() {
        let (out, summary) = run(&path(&["start", "A", "end"]), 2);

        assert_eq!(out, "L1-A\nL2-A L1-end\nL2-end\n");
        assert_eq!(summary.turns, 3);
        assert_eq!(summary.moves, 4);
        assert_eq!(summary.finished, 2);
        assert_eq!(summary.released, 2);
    }

    #[test]
    fn test_vacated_room_is_reused_within_turn() {
        let path = path(&["start", "A", "end"]);
        let mut engine = SimulationEngine::new(&path, 2);

        engine.step().unwrap();
        let second = engine.step().unwrap();

        assert_eq!(
            second.moves,
            vec![Move { ant: 1, room: "end" }, Move { ant: 2, room: "A" }]
        );
        assert_eq!(second.number, 2);
    }

    #[test]
    fn test_direct_tunnel_moves_everyone_at_once() {
        let (out, summary) = run(&path(&["start", "end"]), 3);

        assert_eq!(out, "L1-end L2-end L3-end\n");
        assert_eq!(summary.turns, 1);
        assert_eq!(summary.finished, 3);
    }

    #[test]
    fn test_no_ants_no_output() {
        let (out, summary) = run(&path(&["start", "A", "end"]), 0);

        assert!(out.is_empty());
        assert_eq!(summary.turns, 0);
    }

    #[test]
    fn test_longer_path_pipeline() {
        let (out, _) = run(&path(&["s", "a", "b", "e"]), 3);

        assert_eq!(
            out,
            "L1-a\nL1-b L2-a\nL1-e L2-b L3-a\nL2-e L3-b\nL3-e\n"
        );
    }

    #[test]
    fn test_step_after_completion_stays_idle() {
        let path = path(&["start", "A", "end"]);
        let mut engine = SimulationEngine::new(&path, 1);

        while engine.step().is_some() {}
        assert!(engine.step().is_none());
        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.occupancy().count_occupied(), 0);
    }

    #[test]
    fn test_random_runs_keep_rooms_single_and_finish() {
        let mut rng = fastrand::Rng::with_seed(7);

        for _ in 0..100 {
            let len = rng.usize(2..12);
            let rooms: Vec<String> = (0..len).map(|i| format!("r{i}")).collect();
            let path = Path::new(rooms);
            let ants = rng.u32(0..40);
            let mut engine = SimulationEngine::new(&path, ants);

            while engine.step().is_some() {
                let mut per_room = vec![0usize; len];
                for ant in engine.walking() {
                    per_room[ant.pos] += 1;
                }
                for idx in 1..len - 1 {
                    assert!(per_room[idx] <= 1, "room {idx} holds {}", per_room[idx]);
                    assert_eq!(engine.occupancy().is_occupied(idx), per_room[idx] == 1);
                }
                assert!(engine.turn() <= ants as usize + len);
            }

            assert_eq!(engine.finished(), ants);
            assert_eq!(engine.waiting(), 0);
            assert_eq!(engine.walking().count(), 0);
            let expected_turns = match (ants as usize, len) {
                (0, _) => 0,
                (_, 2) => 1,
                (n, l) => n + l - 2,
            };
            assert_eq!(engine.turn(), expected_turns);
        }
    }

    #[test]
    fn test_huge_population_starts_without_allocating_it() {
        let path = path(&["start", "A", "end"]);
        let mut engine = SimulationEngine::new(&path, u32::MAX);

        let first = engine.step().unwrap();
        assert_eq!(first.to_string(), "L1-A");
        let second = engine.step().unwrap();
        assert_eq!(second.to_string(), "L1-end L2-A");
        assert_eq!(engine.waiting(), u32::MAX - 2);
        assert_eq!(engine.finished(), 1);
        assert_eq!(engine.walking().count(), 1);
    }

    #[test]
    fn test_deterministic_output() {
        let path = path(&["s", "a", "b", "c", "e"]);

        assert_eq!(run(&path, 9).0, run(&path, 9).0);
    }

    #[test]
    fn test_turn_display() {
        let turn = Turn {
            number: 1,
            moves: vec![Move { ant: 3, room: "x" }, Move { ant: 4, room: "y" }],
        };

        assert_eq!(turn.to_string(), "L3-x L4-y");
    }
}
