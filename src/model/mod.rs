mod tally;
mod team;
mod team_matches;

pub use tally::*;
pub use team::*;
pub use team_matches::*;
