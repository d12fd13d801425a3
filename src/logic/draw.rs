//! Group draw: split participants into fixed-size groups, randomly or by manual assignment.

use crate::models::{total_group_slots, Group, ParticipantId, ValidationError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

/// Participant id -> group index (position in the configured group sizes).
pub type GroupAssignment = HashMap<ParticipantId, usize>;

/// Random draw using the thread-local RNG.
pub fn draw(
    participant_ids: &[ParticipantId],
    group_sizes: &[usize],
) -> Result<GroupAssignment, ValidationError> {
    draw_with_rng(participant_ids, group_sizes, &mut rand::thread_rng())
}

/// Random draw with a caller-supplied RNG.
///
/// Shuffles all ids uniformly (Fisher-Yates) and slices the result into runs of
/// `group_sizes` in order: run 0 -> group 0, run 1 -> group 1, ...
pub fn draw_with_rng<R: Rng + ?Sized>(
    participant_ids: &[ParticipantId],
    group_sizes: &[usize],
    rng: &mut R,
) -> Result<GroupAssignment, ValidationError> {
    check_draw_input(participant_ids, group_sizes)?;

    let mut shuffled = participant_ids.to_vec();
    shuffled.shuffle(rng);

    let mut assignment = GroupAssignment::with_capacity(shuffled.len());
    let mut remaining = shuffled.as_slice();
    for (index, &size) in group_sizes.iter().enumerate() {
        let (run, rest) = remaining.split_at(size);
        assignment.extend(run.iter().map(|&id| (id, index)));
        remaining = rest;
    }
    Ok(assignment)
}

/// Check a manual assignment against the roster and group sizes.
///
/// Rules, in the order they are checked: totals match, every mapped id is known,
/// every group index is in range, every participant is assigned, every group holds
/// exactly its configured size.
pub fn validate_manual_draw(
    participant_ids: &[ParticipantId],
    group_sizes: &[usize],
    assignment: &GroupAssignment,
) -> Result<(), ValidationError> {
    check_draw_input(participant_ids, group_sizes)?;

    let known: HashSet<ParticipantId> = participant_ids.iter().copied().collect();
    let mut counts = vec![0usize; group_sizes.len()];
    for (&id, &index) in assignment {
        if !known.contains(&id) {
            return Err(ValidationError::UnknownParticipant(id));
        }
        if index >= group_sizes.len() {
            return Err(ValidationError::GroupOutOfRange {
                index,
                group_count: group_sizes.len(),
            });
        }
        counts[index] += 1;
    }

    if let Some(&missing) = participant_ids.iter().find(|id| !assignment.contains_key(*id)) {
        return Err(ValidationError::MissingParticipant(missing));
    }

    for (index, (&expected, &actual)) in group_sizes.iter().zip(&counts).enumerate() {
        if expected != actual {
            return Err(ValidationError::GroupSizeMismatch {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Build groups from an assignment. Members keep the roster order of `participant_ids`.
pub fn assignment_to_groups(
    participant_ids: &[ParticipantId],
    group_count: usize,
    assignment: &GroupAssignment,
) -> Vec<Group> {
    let mut members: Vec<Vec<ParticipantId>> = vec![Vec::new(); group_count];
    for id in participant_ids {
        if let Some(&index) = assignment.get(id) {
            if let Some(group) = members.get_mut(index) {
                group.push(*id);
            }
        }
    }
    members
        .into_iter()
        .enumerate()
        .map(|(position, ids)| Group::new(position, ids))
        .collect()
}

fn check_draw_input(
    participant_ids: &[ParticipantId],
    group_sizes: &[usize],
) -> Result<(), ValidationError> {
    if participant_ids.is_empty() {
        return Err(ValidationError::NoParticipants);
    }
    if group_sizes.is_empty() {
        return Err(ValidationError::NoGroups);
    }
    let mut seen = HashSet::with_capacity(participant_ids.len());
    if let Some(&dup) = participant_ids.iter().find(|id| !seen.insert(**id)) {
        return Err(ValidationError::DuplicateParticipant(dup));
    }
    let expected = total_group_slots(group_sizes).ok_or(ValidationError::GroupSizeOverflow)?;
    if expected != participant_ids.len() {
        return Err(ValidationError::CountMismatch {
            expected,
            actual: participant_ids.len(),
        });
    }
    Ok(())
}
