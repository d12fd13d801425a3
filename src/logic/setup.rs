//! Setup phase: freeze the roster and move to the draw.

use crate::models::{Tournament, TournamentError, TournamentPhase, ValidationError};

/// Setup -> GroupDraw. The configured group sizes must hold exactly the current roster.
pub fn begin_draw(tournament: &mut Tournament) -> Result<(), TournamentError> {
    tournament.require_phase(TournamentPhase::Setup)?;
    if tournament.participants.is_empty() {
        return Err(ValidationError::NoParticipants.into());
    }
    if tournament.config.group_sizes.is_empty() {
        return Err(ValidationError::NoGroups.into());
    }
    let expected = tournament
        .config
        .total_slots()
        .ok_or(ValidationError::GroupSizeOverflow)?;
    let actual = tournament.participants.len();
    if expected != actual {
        return Err(ValidationError::CountMismatch { expected, actual }.into());
    }
    tournament.phase = TournamentPhase::GroupDraw;
    log::info!(
        "Tournament {} ready for draw: {} participants in {} group(s)",
        tournament.id,
        actual,
        tournament.config.group_sizes.len()
    );
    Ok(())
}
