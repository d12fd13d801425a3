//! Round-robin schedule generation.

use crate::models::{Group, GroupId, ParticipantId};

/// One scheduled pairing inside a group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScheduledPair {
    pub group_id: GroupId,
    pub player1: ParticipantId,
    pub player2: ParticipantId,
}

/// Every unordered pair of distinct participants exactly once.
///
/// Order is fixed: outer index `i`, inner index `j > i`, both over the input order.
/// Fewer than two participants yields no pairs.
pub fn generate_round_robin(participant_ids: &[ParticipantId]) -> Vec<(ParticipantId, ParticipantId)> {
    let n = participant_ids.len();
    if n < 2 {
        return Vec::new();
    }
    let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
    for (i, &a) in participant_ids.iter().enumerate() {
        for &b in &participant_ids[i + 1..] {
            pairs.push((a, b));
        }
    }
    pairs
}

/// Round-robin for each group independently, tagged with the group id.
pub fn generate_group_schedules(groups: &[Group]) -> Vec<ScheduledPair> {
    groups
        .iter()
        .flat_map(|g| {
            generate_round_robin(&g.participant_ids)
                .into_iter()
                .map(move |(player1, player2)| ScheduledPair {
                    group_id: g.id,
                    player1,
                    player2,
                })
        })
        .collect()
}
