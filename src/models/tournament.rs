//! Tournament and TournamentPhase.

use crate::models::config::TournamentConfig;
use crate::models::error::{InvalidStateError, TournamentError, ValidationError};
use crate::models::game::{GameMatch, MatchId};
use crate::models::group::{Group, GroupId};
use crate::models::participant::{Participant, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentPhase {
    /// Adding participants, choosing group sizes and points.
    #[default]
    Setup,
    /// Roster is frozen; waiting for a random or manual draw.
    GroupDraw,
    /// Groups drawn, round-robin matches being played.
    GroupStage,
    /// Semifinals, then the final.
    Knockout,
    /// Final played.
    Completed,
}

/// Full tournament state on top of a board's participants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub participants: Vec<Participant>,
    pub config: TournamentConfig,
    pub phase: TournamentPhase,
    /// Filled by the draw; membership never changes afterwards.
    pub groups: Vec<Group>,
    /// Group and knockout matches.
    pub matches: Vec<GameMatch>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new tournament in Setup with no participants.
    pub fn new(name: impl Into<String>, config: TournamentConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            participants: Vec::new(),
            config,
            phase: TournamentPhase::Setup,
            groups: Vec::new(),
            matches: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create a tournament with an initial roster. Still in Setup.
    pub fn with_participants(
        name: impl Into<String>,
        participants: Vec<Participant>,
        config: TournamentConfig,
    ) -> Self {
        Self {
            participants,
            ..Self::new(name, config)
        }
    }

    /// Fail unless the tournament is in `expected`.
    pub fn require_phase(&self, expected: TournamentPhase) -> Result<(), InvalidStateError> {
        if self.phase != expected {
            return Err(InvalidStateError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Participants of a group, in group order. Ids without a roster entry are left out.
    pub fn group_participants(&self, group: &Group) -> Vec<Participant> {
        group
            .participant_ids
            .iter()
            .filter_map(|id| self.participant(*id).cloned())
            .collect()
    }

    /// Add a participant (Setup only). Names are trimmed and unique, case-insensitive.
    pub fn add_participant(&mut self, name: impl Into<String>) -> Result<ParticipantId, TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self
            .participants
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name))
        {
            return Err(ValidationError::DuplicateName.into());
        }
        let participant = Participant::new(name);
        let id = participant.id;
        self.participants.push(participant);
        Ok(id)
    }

    /// Add every name from a CSV roster (Setup only). Stops at the first rejected name.
    pub fn import_roster<R: std::io::Read>(&mut self, reader: R) -> Result<usize, TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        let names = crate::roster::parse_roster(reader)?;
        for name in &names {
            self.add_participant(name.as_str())?;
        }
        Ok(names.len())
    }

    /// Remove a participant by id (Setup only).
    pub fn remove_participant(&mut self, id: ParticipantId) -> Result<(), TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or(TournamentError::ParticipantNotFound(id))?;
        self.participants.remove(idx);
        Ok(())
    }

    /// Replace group sizes and point values (Setup only).
    pub fn set_config(&mut self, config: TournamentConfig) -> Result<(), TournamentError> {
        self.require_phase(TournamentPhase::Setup)?;
        self.config = config;
        Ok(())
    }

    /// Winner of the completed final, if any.
    pub fn champion(&self) -> Option<&Participant> {
        self.matches
            .iter()
            .find(|m| m.knockout_round() == Some(crate::models::KnockoutRound::Final) && m.is_completed())
            .and_then(|m| m.winner)
            .and_then(|id| self.participant(id))
    }

    /// Back to Setup with the same participants and config. Clears groups and matches.
    pub fn reset(&mut self) {
        self.groups.clear();
        self.matches.clear();
        self.phase = TournamentPhase::Setup;
    }
}
