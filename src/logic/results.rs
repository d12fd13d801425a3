//! Match progress and results for both group and knockout matches.

use crate::logic::knockout::create_final_if_ready;
use crate::models::{
    InvalidStateError, KnockoutRound, MatchId, MatchStatus, Tournament, TournamentError,
    TournamentPhase, ValidationError,
};

/// Pending -> InProgress. Allowed during the group and knockout stages.
pub fn start_match(tournament: &mut Tournament, match_id: MatchId) -> Result<(), TournamentError> {
    require_playing_phase(tournament)?;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_completed() {
        return Err(InvalidStateError::MatchAlreadyCompleted(match_id).into());
    }
    m.status = MatchStatus::InProgress;
    Ok(())
}

/// Record the final score of a match and mark it completed.
///
/// Knockout matches must have a winner. Completing the second semifinal creates the final;
/// completing the final completes the tournament.
pub fn record_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    player1_score: u32,
    player2_score: u32,
) -> Result<(), TournamentError> {
    require_playing_phase(tournament)?;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_completed() {
        return Err(InvalidStateError::MatchAlreadyCompleted(match_id).into());
    }
    let round = m.knockout_round();
    if round.is_some() && player1_score == player2_score {
        return Err(ValidationError::DrawnKnockoutMatch.into());
    }
    m.complete(player1_score, player2_score);

    match round {
        Some(KnockoutRound::Semifinal) => {
            create_final_if_ready(tournament);
        }
        Some(KnockoutRound::Final) => {
            tournament.phase = TournamentPhase::Completed;
            log::info!("Tournament {} completed", tournament.id);
        }
        None => {}
    }
    Ok(())
}

fn require_playing_phase(tournament: &Tournament) -> Result<(), InvalidStateError> {
    match tournament.phase {
        TournamentPhase::GroupStage | TournamentPhase::Knockout => Ok(()),
        actual => Err(InvalidStateError::WrongPhase {
            expected: TournamentPhase::GroupStage,
            actual,
        }),
    }
}
