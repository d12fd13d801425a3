//! Errors raised by tournament operations.

use crate::models::game::MatchId;
use crate::models::group::GroupId;
use crate::models::participant::ParticipantId;
use crate::models::tournament::TournamentPhase;
use thiserror::Error;

/// Malformed or inconsistent input. Will not succeed on retry with the same input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("No participants to draw")]
    NoParticipants,
    #[error("No groups configured")]
    NoGroups,
    #[error("Participant {0} is listed more than once")]
    DuplicateParticipant(ParticipantId),
    #[error("Group sizes are too large to add up")]
    GroupSizeOverflow,
    #[error("Group sizes add up to {expected} but there are {actual} participants")]
    CountMismatch { expected: usize, actual: usize },
    #[error("Unknown participant {0}")]
    UnknownParticipant(ParticipantId),
    #[error("Group index {index} is out of range ({group_count} groups)")]
    GroupOutOfRange { index: usize, group_count: usize },
    #[error("Group {index} has {actual} participants assigned, expected {expected}")]
    GroupSizeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Participant {0} is not assigned to a group")]
    MissingParticipant(ParticipantId),
    #[error("Participant name must not be empty")]
    EmptyName,
    #[error("A participant with this name already exists")]
    DuplicateName,
    #[error("Knockout matches need a winner; scores must differ")]
    DrawnKnockoutMatch,
    #[error("Invalid roster: {0}")]
    Roster(String),
}

/// A cardinality or completeness precondition is not met yet.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvalidStateError {
    #[error("Semifinals need exactly 2 groups, got {0}")]
    WrongGroupCount(usize),
    #[error("Insufficient participants in {group}: need a rank 1 and a rank 2")]
    InsufficientParticipants { group: String },
    #[error("Insufficient participants in {group}: {tied} participants are tied on rank 1, so there is no rank 2")]
    TiedForFirst { group: String, tied: usize },
    #[error("Group stage is not finished: {remaining} match(es) left")]
    GroupStageIncomplete { remaining: usize },
    #[error("Tournament is in phase {actual:?}, expected {expected:?}")]
    WrongPhase {
        expected: TournamentPhase,
        actual: TournamentPhase,
    },
    #[error("Match {0} is already completed")]
    MatchAlreadyCompleted(MatchId),
}

/// Coarse classification, used by callers to pick a response status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    InvalidState,
    NotFound,
}

/// Any error from a tournament operation.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("Participant {0} not found")]
    ParticipantNotFound(ParticipantId),
    #[error("Group {0} not found")]
    GroupNotFound(GroupId),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TournamentError::Validation(_) => ErrorKind::Validation,
            TournamentError::InvalidState(_) => ErrorKind::InvalidState,
            TournamentError::MatchNotFound(_)
            | TournamentError::ParticipantNotFound(_)
            | TournamentError::GroupNotFound(_) => ErrorKind::NotFound,
        }
    }
}
