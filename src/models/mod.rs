//! Data structures for tournament mode: participants, groups, matches, configuration and errors.

mod config;
mod error;
mod game;
mod group;
mod participant;
mod tournament;

pub use config::{total_group_slots, PointValues, TournamentConfig};
pub use error::{ErrorKind, InvalidStateError, TournamentError, ValidationError};
pub use game::{GameMatch, KnockoutRound, MatchId, MatchStage, MatchStatus};
pub use group::{Group, GroupId, GroupStanding};
pub use participant::{Participant, ParticipantId};
pub use tournament::{Tournament, TournamentId, TournamentPhase};
