//! Knockout advancement: semifinal pairings from the groups, the final from the semifinals.

use crate::models::{GameMatch, Group, GroupStanding, InvalidStateError, MatchId, ParticipantId};
use serde::Serialize;

/// Two participants who should meet next.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Pairing {
    pub player1: ParticipantId,
    pub player2: ParticipantId,
}

/// A group together with its current standings.
#[derive(Clone, Debug)]
pub struct GroupTable<'a> {
    pub group: &'a Group,
    pub standings: Vec<GroupStanding>,
}

/// Why the final cannot be paired yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotReadyReason {
    /// Not exactly two semifinal results were supplied.
    SemifinalCount(usize),
    Incomplete(MatchId),
    NoWinner(MatchId),
}

/// Outcome of polling for the final.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FinalReadiness {
    Ready(Pairing),
    NotReady(NotReadyReason),
}

/// Cross-seeded semifinals from exactly two groups:
/// semifinal 1 = A1 vs B2, semifinal 2 = B1 vs A2.
pub fn semifinals_from_groups(groups: &[GroupTable<'_>]) -> Result<[Pairing; 2], InvalidStateError> {
    let [a, b] = groups else {
        return Err(InvalidStateError::WrongGroupCount(groups.len()));
    };
    let (a1, a2) = top_two(a)?;
    let (b1, b2) = top_two(b)?;
    Ok([
        Pairing {
            player1: a1,
            player2: b2,
        },
        Pairing {
            player1: b1,
            player2: a2,
        },
    ])
}

fn top_two(table: &GroupTable<'_>) -> Result<(ParticipantId, ParticipantId), InvalidStateError> {
    let at_rank = |rank: usize| {
        table
            .standings
            .iter()
            .find(|s| s.rank == rank)
            .map(|s| s.participant_id)
    };
    let tied = table.standings.iter().filter(|s| s.rank == 1).count();
    match (at_rank(1), at_rank(2)) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ if tied > 1 => Err(InvalidStateError::TiedForFirst {
            group: table.group.name.clone(),
            tied,
        }),
        _ => Err(InvalidStateError::InsufficientParticipants {
            group: table.group.name.clone(),
        }),
    }
}

/// Pair the two semifinal winners, in the order the results were given.
pub fn final_from_semifinals(results: &[GameMatch]) -> FinalReadiness {
    let [first, second] = results else {
        return FinalReadiness::NotReady(NotReadyReason::SemifinalCount(results.len()));
    };
    for m in [first, second] {
        if !m.is_completed() {
            return FinalReadiness::NotReady(NotReadyReason::Incomplete(m.id));
        }
    }
    match (first.winner, second.winner) {
        (Some(player1), Some(player2)) => FinalReadiness::Ready(Pairing { player1, player2 }),
        (None, _) => FinalReadiness::NotReady(NotReadyReason::NoWinner(first.id)),
        (_, None) => FinalReadiness::NotReady(NotReadyReason::NoWinner(second.id)),
    }
}
