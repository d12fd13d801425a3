//! Group and the derived per-participant group standing.

use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// A fixed set of participants playing a round-robin among themselves.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Ordinal position within the tournament (0-based).
    pub position: usize,
    pub participant_ids: Vec<ParticipantId>,
}

impl Group {
    /// Create a group named after its position: 0 -> "Group A", 1 -> "Group B", ...
    pub fn new(position: usize, participant_ids: Vec<ParticipantId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: format!("Group {}", group_letter(position)),
            position,
            participant_ids,
        }
    }
}

fn group_letter(position: usize) -> String {
    let mut n = position;
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Accumulated group-stage statistics for one participant. Recomputed on every read.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStanding {
    pub participant_id: ParticipantId,
    pub participant_name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
    /// 1-based competition rank; 0 until ranks are assigned.
    pub rank: usize,
}

impl GroupStanding {
    /// Zeroed standing for a participant with no completed matches.
    pub fn new(participant_id: ParticipantId, participant_name: impl Into<String>) -> Self {
        Self {
            participant_id,
            participant_name: participant_name.into(),
            wins: 0,
            losses: 0,
            draws: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
            rank: 0,
        }
    }

    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}
