//! Match (game), its status, and which phase of the tournament it belongs to.

use crate::models::group::GroupId;
use crate::models::participant::ParticipantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Progress of a single match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

/// Knockout round tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnockoutRound {
    Semifinal,
    Final,
}

/// Phase of the tournament this match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchStage {
    Group {
        group_id: GroupId,
    },
    Knockout {
        round: KnockoutRound,
        /// Ordering within the round, starting at 1.
        match_number: u32,
    },
}

/// A single 1v1 match between two participants.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub player1: ParticipantId,
    pub player2: ParticipantId,
    pub player1_score: u32,
    pub player2_score: u32,
    pub status: MatchStatus,
    /// None while undecided, and for drawn matches.
    pub winner: Option<ParticipantId>,
    pub stage: MatchStage,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    pub fn new(player1: ParticipantId, player2: ParticipantId, stage: MatchStage) -> Self {
        Self {
            id: Uuid::new_v4(),
            player1,
            player2,
            player1_score: 0,
            player2_score: 0,
            status: MatchStatus::Pending,
            winner: None,
            stage,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// New pending match in the given group.
    pub fn group(player1: ParticipantId, player2: ParticipantId, group_id: GroupId) -> Self {
        Self::new(player1, player2, MatchStage::Group { group_id })
    }

    /// New pending knockout match.
    pub fn knockout(
        player1: ParticipantId,
        player2: ParticipantId,
        round: KnockoutRound,
        match_number: u32,
    ) -> Self {
        Self::new(player1, player2, MatchStage::Knockout { round, match_number })
    }

    /// Set the final score and mark completed. Winner is the higher scorer; equal scores leave it empty.
    pub fn complete(&mut self, player1_score: u32, player2_score: u32) {
        self.player1_score = player1_score;
        self.player2_score = player2_score;
        self.winner = match player1_score.cmp(&player2_score) {
            std::cmp::Ordering::Greater => Some(self.player1),
            std::cmp::Ordering::Less => Some(self.player2),
            std::cmp::Ordering::Equal => None,
        };
        self.status = MatchStatus::Completed;
        self.completed_at = Some(Utc::now());
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn involves(&self, id: ParticipantId) -> bool {
        self.player1 == id || self.player2 == id
    }

    /// True if this is a group match of `group_id`.
    pub fn in_group(&self, group_id: GroupId) -> bool {
        matches!(self.stage, MatchStage::Group { group_id: g } if g == group_id)
    }

    /// The knockout round, if this is a knockout match.
    pub fn knockout_round(&self) -> Option<KnockoutRound> {
        match self.stage {
            MatchStage::Knockout { round, .. } => Some(round),
            MatchStage::Group { .. } => None,
        }
    }
}
