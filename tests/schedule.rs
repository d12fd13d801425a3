//! Integration tests for round-robin schedule generation.

use scoreboard_tournament::logic::ScheduledPair;
use scoreboard_tournament::{generate_group_schedules, generate_round_robin, Group};
use std::collections::HashSet;
use uuid::Uuid;

#[test]
fn fewer_than_two_participants_have_no_matches() {
    assert!(generate_round_robin(&[]).is_empty());
    assert!(generate_round_robin(&[Uuid::new_v4()]).is_empty());
}

#[test]
fn every_pair_plays_exactly_once() {
    for n in 2..9 {
        let ids: Vec<_> = (0..n).map(|_| Uuid::new_v4()).collect();
        let pairs = generate_round_robin(&ids);
        assert_eq!(pairs.len(), n * (n - 1) / 2);
        let unique: HashSet<_> = pairs
            .iter()
            .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
            .collect();
        assert_eq!(unique.len(), pairs.len());
        assert!(pairs.iter().all(|(a, b)| a != b));
    }
}

#[test]
fn pairs_follow_nested_input_order() {
    let ids: Vec<_> = (0..4).map(|_| Uuid::new_v4()).collect();
    let pairs = generate_round_robin(&ids);
    assert_eq!(
        pairs,
        vec![
            (ids[0], ids[1]),
            (ids[0], ids[2]),
            (ids[0], ids[3]),
            (ids[1], ids[2]),
            (ids[1], ids[3]),
            (ids[2], ids[3]),
        ]
    );
}

#[test]
fn group_schedules_are_tagged_per_group() {
    let a = Group::new(0, (0..3).map(|_| Uuid::new_v4()).collect());
    let b = Group::new(1, (0..4).map(|_| Uuid::new_v4()).collect());
    let schedule = generate_group_schedules(&[a.clone(), b.clone()]);
    assert_eq!(schedule.len(), 3 + 6);
    let in_a: Vec<&ScheduledPair> = schedule.iter().filter(|p| p.group_id == a.id).collect();
    assert_eq!(in_a.len(), 3);
    assert!(in_a
        .iter()
        .all(|p| a.participant_ids.contains(&p.player1) && a.participant_ids.contains(&p.player2)));
    assert_eq!(schedule.iter().filter(|p| p.group_id == b.id).count(), 6);
}
