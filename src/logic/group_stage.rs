//! Group stage: apply the draw, create the round-robin matches, read standings.

use crate::logic::draw::{assignment_to_groups, draw_with_rng, validate_manual_draw, GroupAssignment};
use crate::logic::schedule::generate_group_schedules;
use crate::logic::standings::compute_standings;
use crate::models::{
    GameMatch, GroupId, GroupStanding, Tournament, TournamentError, TournamentPhase,
};
use rand::Rng;

/// Random draw (GroupDraw -> GroupStage). Creates groups and their pending matches.
pub fn apply_random_draw<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    tournament.require_phase(TournamentPhase::GroupDraw)?;
    let ids = tournament.participant_ids();
    let assignment = draw_with_rng(&ids, &tournament.config.group_sizes, rng)?;
    install_groups(tournament, &assignment);
    log::info!("Random draw applied to tournament {}", tournament.id);
    Ok(())
}

/// Manual draw (GroupDraw -> GroupStage). The assignment is validated before anything changes.
pub fn apply_manual_draw(
    tournament: &mut Tournament,
    assignment: &GroupAssignment,
) -> Result<(), TournamentError> {
    tournament.require_phase(TournamentPhase::GroupDraw)?;
    let ids = tournament.participant_ids();
    validate_manual_draw(&ids, &tournament.config.group_sizes, assignment)?;
    install_groups(tournament, assignment);
    log::info!("Manual draw applied to tournament {}", tournament.id);
    Ok(())
}

fn install_groups(tournament: &mut Tournament, assignment: &GroupAssignment) {
    let ids = tournament.participant_ids();
    let groups = assignment_to_groups(&ids, tournament.config.group_sizes.len(), assignment);
    let matches: Vec<GameMatch> = generate_group_schedules(&groups)
        .into_iter()
        .map(|pair| GameMatch::group(pair.player1, pair.player2, pair.group_id))
        .collect();
    log::info!(
        "Created {} group(s) and {} group match(es)",
        groups.len(),
        matches.len()
    );
    tournament.groups = groups;
    tournament.matches = matches;
    tournament.phase = TournamentPhase::GroupStage;
}

/// Current standings of one group.
pub fn group_standings(
    tournament: &Tournament,
    group_id: GroupId,
) -> Result<Vec<GroupStanding>, TournamentError> {
    let group = tournament
        .group(group_id)
        .ok_or(TournamentError::GroupNotFound(group_id))?;
    Ok(compute_standings(
        group.id,
        &tournament.matches,
        &tournament.group_participants(group),
        &tournament.config.points,
    ))
}

/// Standings for every group, in group order.
pub fn all_standings(tournament: &Tournament) -> Vec<(GroupId, Vec<GroupStanding>)> {
    tournament
        .groups
        .iter()
        .map(|g| {
            let standings = compute_standings(
                g.id,
                &tournament.matches,
                &tournament.group_participants(g),
                &tournament.config.points,
            );
            (g.id, standings)
        })
        .collect()
}

/// Group matches not yet completed.
pub fn remaining_group_matches(tournament: &Tournament) -> usize {
    tournament
        .matches
        .iter()
        .filter(|m| m.knockout_round().is_none() && !m.is_completed())
        .count()
}
