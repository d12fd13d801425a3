//! Integration tests for group standings: point accounting, tie-breaks and rank numbers.

use scoreboard_tournament::{
    compute_standings, GameMatch, GroupId, GroupStanding, MatchStatus, Participant, PointValues,
};
use uuid::Uuid;

fn roster(names: &[&str]) -> Vec<Participant> {
    names.iter().map(|n| Participant::new(*n)).collect()
}

fn played(group: GroupId, a: &Participant, b: &Participant, sa: u32, sb: u32) -> GameMatch {
    let mut m = GameMatch::group(a.id, b.id, group);
    m.complete(sa, sb);
    m
}

fn names(standings: &[GroupStanding]) -> Vec<&str> {
    standings.iter().map(|s| s.participant_name.as_str()).collect()
}

fn ranks(standings: &[GroupStanding]) -> Vec<usize> {
    standings.iter().map(|s| s.rank).collect()
}

#[test]
fn goal_difference_separates_equal_points() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C"]);
    let matches = vec![
        played(group, &p[0], &p[1], 5, 2),
        played(group, &p[1], &p[2], 1, 1),
        GameMatch::group(p[0].id, p[2].id, group),
    ];

    let s = compute_standings(group, &matches, &p, &PointValues::default());

    assert_eq!(names(&s), vec!["A", "C", "B"]);
    assert_eq!(ranks(&s), vec![1, 2, 3]);
    assert_eq!((s[0].points, s[0].goal_difference, s[0].wins), (3, 3, 1));
    assert_eq!((s[1].points, s[1].goal_difference, s[1].draws), (1, 0, 1));
    assert_eq!((s[2].points, s[2].goal_difference, s[2].losses), (1, -3, 1));
    assert_eq!(s[2].goals_for, 3);
    assert_eq!(s[2].goals_against, 6);
    assert_eq!(s.iter().map(|x| x.points).sum::<i64>(), 3 + 2);
}

#[test]
fn goal_difference_always_matches_goals() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C", "D"]);
    let matches = vec![
        played(group, &p[0], &p[1], 3, 0),
        played(group, &p[2], &p[3], 2, 2),
        played(group, &p[0], &p[2], 1, 4),
        played(group, &p[1], &p[3], 0, 1),
    ];
    for s in compute_standings(group, &matches, &p, &PointValues::default()) {
        assert_eq!(s.goal_difference, i64::from(s.goals_for) - i64::from(s.goals_against));
        assert_eq!(
            s.points,
            3 * i64::from(s.wins) + i64::from(s.draws),
            "points for {}",
            s.participant_name
        );
    }
}

#[test]
fn only_completed_matches_of_the_group_count() {
    let group = Uuid::new_v4();
    let other = Uuid::new_v4();
    let p = roster(&["A", "B"]);

    let mut in_progress = GameMatch::group(p[0].id, p[1].id, group);
    in_progress.player1_score = 9;
    in_progress.status = MatchStatus::InProgress;
    let elsewhere = played(other, &p[0], &p[1], 0, 5);

    let s = compute_standings(group, &[in_progress, elsewhere], &p, &PointValues::default());
    assert!(s.iter().all(|x| x.played() == 0 && x.points == 0 && x.goals_for == 0));
    assert_eq!(ranks(&s), vec![1, 1]);
}

#[test]
fn participants_without_matches_are_listed_last() {
    let group = Uuid::new_v4();
    let p = roster(&["Idle", "A", "B"]);
    let matches = vec![played(group, &p[1], &p[2], 2, 2)];

    let s = compute_standings(group, &matches, &p, &PointValues::default());
    assert_eq!(s.len(), 3);
    assert_eq!(s[2].participant_name, "Idle");
    assert_eq!(s[2].points, 0);
    assert_eq!(ranks(&s), vec![1, 1, 3]);
}

#[test]
fn identical_totals_share_rank_and_next_rank_skips() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C"]);
    // A and B both beat C 2-0 and draw each other.
    let matches = vec![
        played(group, &p[0], &p[2], 2, 0),
        played(group, &p[1], &p[2], 2, 0),
        played(group, &p[0], &p[1], 1, 1),
    ];
    let s = compute_standings(group, &matches, &p, &PointValues::default());
    assert_eq!(names(&s), vec!["A", "B", "C"]);
    assert_eq!(ranks(&s), vec![1, 1, 3]);
}

#[test]
fn goal_difference_outranks_head_to_head() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C"]);
    // A and B are level on points and B won their direct match, but A has the better goal difference.
    let matches = vec![
        played(group, &p[0], &p[2], 5, 0),
        played(group, &p[1], &p[0], 1, 0),
        played(group, &p[2], &p[1], 1, 0),
    ];
    let s = compute_standings(group, &matches, &p, &PointValues::default());

    assert_eq!(names(&s), vec!["A", "B", "C"]);
    assert_eq!(ranks(&s), vec![1, 2, 3]);
    assert_eq!((s[0].points, s[0].goal_difference, s[0].goals_for), (3, 4, 5));
    assert_eq!((s[1].points, s[1].goal_difference, s[1].goals_for), (3, 0, 1));
    assert_eq!((s[2].points, s[2].goal_difference, s[2].goals_for), (3, -4, 1));
}

#[test]
fn three_way_head_to_head_cycle_keeps_roster_order() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C"]);
    // A beats B, B beats C, C beats A: all level on every total.
    let matches = vec![
        played(group, &p[0], &p[1], 1, 0),
        played(group, &p[1], &p[2], 1, 0),
        played(group, &p[2], &p[0], 1, 0),
    ];
    let s = compute_standings(group, &matches, &p, &PointValues::default());

    assert_eq!(names(&s), vec!["A", "B", "C"]);
    assert_eq!(ranks(&s), vec![1, 1, 1]);
    assert!(s.iter().all(|x| x.points == 3 && x.goal_difference == 0 && x.goals_for == 1));
}

#[test]
fn large_scores_do_not_overflow_goal_totals() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C"]);
    let matches = vec![
        played(group, &p[0], &p[1], u32::MAX, 0),
        played(group, &p[0], &p[2], 1, 0),
    ];
    let s = compute_standings(group, &matches, &p, &PointValues::default());

    assert_eq!(s[0].participant_name, "A");
    assert_eq!(s[0].goals_for, i64::from(u32::MAX) + 1);
    assert_eq!(s[0].goal_difference, i64::from(u32::MAX) + 1);
    let b = s.iter().find(|x| x.participant_name == "B").unwrap();
    assert_eq!(b.goal_difference, -i64::from(u32::MAX));
}

#[test]
fn extreme_point_values_saturate() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C"]);
    let points = PointValues {
        win: i64::MAX,
        ..PointValues::default()
    };
    let matches = vec![
        played(group, &p[0], &p[1], 1, 0),
        played(group, &p[0], &p[2], 1, 0),
    ];
    let s = compute_standings(group, &matches, &p, &points);
    assert_eq!(s[0].points, i64::MAX);
}

#[test]
fn head_to_head_breaks_full_tie() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C", "D"]);
    // A and B: one win, one loss each, 2 goals for and 2 against. B beat A.
    let matches = vec![
        played(group, &p[0], &p[1], 0, 1),
        played(group, &p[0], &p[2], 2, 1),
        played(group, &p[1], &p[3], 1, 2),
    ];
    let s = compute_standings(group, &matches, &p, &PointValues::default());

    let pos = |name: &str| s.iter().position(|x| x.participant_name == name).unwrap();
    let a = &s[pos("A")];
    let b = &s[pos("B")];
    assert_eq!((a.points, a.goal_difference, a.goals_for), (3, 0, 2));
    assert_eq!((b.points, b.goal_difference, b.goals_for), (3, 0, 2));
    assert!(pos("B") < pos("A"));
    assert_eq!(a.rank, b.rank);
}

#[test]
fn unknown_participants_are_skipped() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B"]);
    let ghost = Participant::new("Ghost");
    let matches = vec![
        played(group, &p[0], &ghost, 3, 0),
        played(group, &p[0], &p[1], 1, 0),
    ];
    let s = compute_standings(group, &matches, &p, &PointValues::default());
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].participant_name, "A");
    assert_eq!((s[0].wins, s[0].goals_for), (1, 1));
}

#[test]
fn custom_point_values_apply() {
    let group = Uuid::new_v4();
    let p = roster(&["A", "B", "C"]);
    let points = PointValues {
        win: 2,
        loss: -1,
        draw: 1,
    };
    let matches = vec![
        played(group, &p[0], &p[1], 3, 1),
        played(group, &p[1], &p[2], 0, 0),
    ];
    let s = compute_standings(group, &matches, &p, &points);
    let by_name = |n: &str| s.iter().find(|x| x.participant_name == n).unwrap().points;
    assert_eq!(by_name("A"), 2);
    assert_eq!(by_name("B"), 0);
    assert_eq!(by_name("C"), 1);
}
