//! Knockout stage: semifinals from the group tables, the final once both semifinals are decided.

use crate::logic::advancement::{final_from_semifinals, semifinals_from_groups, FinalReadiness, GroupTable};
use crate::logic::group_stage::remaining_group_matches;
use crate::logic::standings::compute_standings;
use crate::models::{
    GameMatch, InvalidStateError, KnockoutRound, MatchStage, Tournament, TournamentError,
    TournamentPhase,
};

/// GroupStage -> Knockout. Every group match must be completed; creates semifinals 1 and 2.
pub fn start_knockout(tournament: &mut Tournament) -> Result<(), TournamentError> {
    tournament.require_phase(TournamentPhase::GroupStage)?;
    let remaining = remaining_group_matches(tournament);
    if remaining > 0 {
        return Err(InvalidStateError::GroupStageIncomplete { remaining }.into());
    }

    let tables: Vec<GroupTable<'_>> = tournament
        .groups
        .iter()
        .map(|g| GroupTable {
            group: g,
            standings: compute_standings(
                g.id,
                &tournament.matches,
                &tournament.group_participants(g),
                &tournament.config.points,
            ),
        })
        .collect();
    let [semi1, semi2] = semifinals_from_groups(&tables)?;

    tournament.matches.push(GameMatch::knockout(
        semi1.player1,
        semi1.player2,
        KnockoutRound::Semifinal,
        1,
    ));
    tournament.matches.push(GameMatch::knockout(
        semi2.player1,
        semi2.player2,
        KnockoutRound::Semifinal,
        2,
    ));
    tournament.phase = TournamentPhase::Knockout;
    log::info!("Tournament {} entered knockout stage", tournament.id);
    Ok(())
}

/// Semifinals sorted by match number.
pub fn semifinals(tournament: &Tournament) -> Vec<GameMatch> {
    let mut semis: Vec<(u32, GameMatch)> = tournament
        .matches
        .iter()
        .filter_map(|m| match m.stage {
            MatchStage::Knockout {
                round: KnockoutRound::Semifinal,
                match_number,
            } => Some((match_number, m.clone())),
            _ => None,
        })
        .collect();
    semis.sort_by_key(|(n, _)| *n);
    semis.into_iter().map(|(_, m)| m).collect()
}

/// Create the final if both semifinals are decided and no final exists yet.
/// Returns true if a final was created by this call.
pub fn create_final_if_ready(tournament: &mut Tournament) -> bool {
    if tournament.phase != TournamentPhase::Knockout {
        return false;
    }
    if tournament
        .matches
        .iter()
        .any(|m| m.knockout_round() == Some(KnockoutRound::Final))
    {
        return false;
    }
    match final_from_semifinals(&semifinals(tournament)) {
        FinalReadiness::Ready(pairing) => {
            tournament.matches.push(GameMatch::knockout(
                pairing.player1,
                pairing.player2,
                KnockoutRound::Final,
                1,
            ));
            log::info!("Final created for tournament {}", tournament.id);
            true
        }
        FinalReadiness::NotReady(reason) => {
            log::debug!("Final not ready: {:?}", reason);
            false
        }
    }
}
