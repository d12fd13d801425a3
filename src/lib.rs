//! Scoreboard tournament mode: library with models and tournament logic.

pub mod logic;
pub mod models;
pub mod roster;

pub use logic::{
    all_standings, apply_manual_draw, apply_random_draw, begin_draw, compute_standings,
    create_final_if_ready, draw, draw_with_rng, final_from_semifinals, generate_group_schedules,
    generate_round_robin, group_standings, record_match_result, semifinals_from_groups,
    start_knockout, start_match, validate_manual_draw, FinalReadiness, GroupAssignment,
    GroupTable, NotReadyReason, Pairing,
};
pub use models::{
    ErrorKind, GameMatch, Group, GroupId, GroupStanding, InvalidStateError, KnockoutRound,
    MatchId, MatchStage, MatchStatus, Participant, ParticipantId, PointValues, Tournament,
    TournamentConfig, TournamentError, TournamentId, TournamentPhase, ValidationError,
};
