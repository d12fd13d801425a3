//! Group standings: per-participant statistics, tie-breaks and competition ranking.

use crate::models::{GameMatch, GroupId, GroupStanding, Participant, ParticipantId, PointValues};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Compute the standings of one group from its completed matches, ordered by rank.
///
/// Only matches tagged with `group_id` and `Completed` count. Every participant gets a
/// row, even with nothing played. Matches naming a participant not in `participants`
/// are skipped.
///
/// Sort order: points, goal difference, goals for (all descending), then head-to-head
/// wins between the two compared participants. Rank numbers only look at the first three,
/// so a head-to-head split still shares a rank.
pub fn compute_standings(
    group_id: GroupId,
    matches: &[GameMatch],
    participants: &[Participant],
    points: &PointValues,
) -> Vec<GroupStanding> {
    let played: Vec<&GameMatch> = matches
        .iter()
        .filter(|m| m.in_group(group_id) && m.is_completed())
        .collect();

    let mut standings: Vec<GroupStanding> = participants
        .iter()
        .map(|p| GroupStanding::new(p.id, p.name.clone()))
        .collect();
    let index: HashMap<ParticipantId, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| (s.participant_id, i))
        .collect();

    for m in &played {
        let (Some(&i1), Some(&i2)) = (index.get(&m.player1), index.get(&m.player2)) else {
            continue;
        };
        let (s1, s2) = (i64::from(m.player1_score), i64::from(m.player2_score));
        match s1.cmp(&s2) {
            Ordering::Greater => {
                credit_win(&mut standings[i1], points);
                credit_loss(&mut standings[i2], points);
            }
            Ordering::Less => {
                credit_win(&mut standings[i2], points);
                credit_loss(&mut standings[i1], points);
            }
            Ordering::Equal => {
                credit_draw(&mut standings[i1], points);
                credit_draw(&mut standings[i2], points);
            }
        }
        standings[i1].goals_for += s1;
        standings[i1].goals_against += s2;
        standings[i2].goals_for += s2;
        standings[i2].goals_against += s1;
    }

    for s in &mut standings {
        s.goal_difference = s.goals_for - s.goals_against;
    }

    sort_standings(&mut standings, &played);
    assign_ranks(&mut standings);

    log::debug!(
        "Computed standings for group {} from {} completed match(es)",
        group_id,
        played.len()
    );
    standings
}

fn credit_win(s: &mut GroupStanding, points: &PointValues) {
    s.wins += 1;
    s.points = s.points.saturating_add(points.win);
}

fn credit_loss(s: &mut GroupStanding, points: &PointValues) {
    s.losses += 1;
    s.points = s.points.saturating_add(points.loss);
}

fn credit_draw(s: &mut GroupStanding, points: &PointValues) {
    s.draws += 1;
    s.points = s.points.saturating_add(points.draw);
}

/// Points, goal difference, goals for: higher first.
fn compare_totals(a: &GroupStanding, b: &GroupStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then(b.goal_difference.cmp(&a.goal_difference))
        .then(b.goals_for.cmp(&a.goals_for))
}

/// More direct wins against the other ranks first. Draws do not count.
fn compare_head_to_head(a: &GroupStanding, b: &GroupStanding, played: &[&GameMatch]) -> Ordering {
    let direct_wins = |who: ParticipantId, other: ParticipantId| {
        played
            .iter()
            .filter(|m| m.involves(who) && m.involves(other))
            .filter(|m| {
                (m.player1 == who && m.player1_score > m.player2_score)
                    || (m.player2 == who && m.player2_score > m.player1_score)
            })
            .count()
    };
    let a_wins = direct_wins(a.participant_id, b.participant_id);
    let b_wins = direct_wins(b.participant_id, a.participant_id);
    b_wins.cmp(&a_wins)
}

/// Stable insertion sort. Head-to-head is not transitive across three-way ties, so the
/// comparator is not a total order and must not be handed to `sort_by`.
fn sort_standings(standings: &mut [GroupStanding], played: &[&GameMatch]) {
    for i in 1..standings.len() {
        let mut j = i;
        while j > 0 {
            let ord = compare_totals(&standings[j - 1], &standings[j])
                .then_with(|| compare_head_to_head(&standings[j - 1], &standings[j], played));
            if ord != Ordering::Greater {
                break;
            }
            standings.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Competition ranking ("1, 1, 3"): tie only on identical points, goal difference and goals for.
fn assign_ranks(standings: &mut [GroupStanding]) {
    for i in 0..standings.len() {
        let rank = if i > 0 && compare_totals(&standings[i - 1], &standings[i]) == Ordering::Equal {
            standings[i - 1].rank
        } else {
            i + 1
        };
        standings[i].rank = rank;
    }
}
