use crate::colony::colony::{Colony, ColonyBuilder};
use crate::colony::room::{Room, RoomKind};
use crate::colony::tunnel::Tunnel;
use crate::error::{LemInError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Parse a colony from a file path.
///
/// Returns the colony and the ant count, if the file declared one.
pub fn parse_colony(path: &str) -> Result<(Colony, Option<u32>)> {
    let file = File::open(path)?;
    read_colony(BufReader::with_capacity(64 * 1024, file))
}

/// Parse a colony directly from an in-memory string
pub fn parse_colony_from_str(src: &str) -> Result<(Colony, Option<u32>)> {
    read_colony(src.as_bytes())
}

/// Line-oriented colony reader.
///
/// `##start` / `##end` annotate the next room line; other `#` lines are
/// comments. Lines with whitespace are rooms, lines with `-` are tunnels and
/// anything else must be the ant count.
pub fn read_colony<R: BufRead>(reader: R) -> Result<(Colony, Option<u32>)> {
    let mut builder = ColonyBuilder::new();
    let mut ants: Option<u32> = None;
    let mut pending = RoomKind::Ordinary;

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            if let Some(kind) = RoomKind::from_marker(line) {
                pending = kind;
            }
            continue;
        }

        if line.contains(char::is_whitespace) {
            let room = parse_room(line, pending).map_err(|e| e.at_line(line_no))?;
            builder.add_room(room).map_err(|e| e.at_line(line_no))?;
            pending = RoomKind::Ordinary;
        } else if line.contains('-') {
            let tunnel = line.parse::<Tunnel>().map_err(|e| e.at_line(line_no))?;
            builder.add_tunnel(tunnel);
        } else {
            if ants.is_some() {
                return Err(LemInError::invalid(line_no, "ant count declared twice"));
            }
            let count = line
                .parse::<u32>()
                .map_err(|_| LemInError::invalid(line_no, format!("bad ant count `{line}`")))?;
            ants = Some(count);
        }
    }

    if pending != RoomKind::Ordinary {
        return Err(LemInError::MissingEndpoint);
    }

    let colony = builder.build()?;
    log::info!(
        "parsed colony: {} rooms, {} tunnels",
        colony.rooms().len(),
        colony.tunnels().len()
    );
    Ok((colony, ants))
}

/// `name x y`
fn parse_room(line: &str, kind: RoomKind) -> Result<Room> {
    let mut parts = line.split_whitespace();
    let (Some(name), Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(LemInError::invalid(0, format!("bad room `{line}`")));
    };
    let coord = |s: &str| {
        s.parse::<i64>()
            .map_err(|_| LemInError::invalid(0, format!("bad coordinate `{s}`")))
    };
    Ok(Room::new(name, coord(x)?, coord(y)?, kind))
}
