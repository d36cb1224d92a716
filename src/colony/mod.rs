pub mod colony;
pub mod parser;
pub mod room;
pub mod tunnel;

pub use colony::{Colony, ColonyBuilder};
pub use parser::{parse_colony, parse_colony_from_str, read_colony};
pub use room::{Room, RoomKind};
pub use tunnel::Tunnel;
