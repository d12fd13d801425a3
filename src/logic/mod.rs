//! Tournament business logic: draw, schedule, standings, advancement and the phase flow around them.

pub mod advancement;
pub mod draw;
mod group_stage;
mod knockout;
mod results;
pub mod schedule;
mod setup;
pub mod standings;

pub use advancement::{
    final_from_semifinals, semifinals_from_groups, FinalReadiness, GroupTable, NotReadyReason,
    Pairing,
};
pub use draw::{assignment_to_groups, draw, draw_with_rng, validate_manual_draw, GroupAssignment};
pub use group_stage::{
    all_standings, apply_manual_draw, apply_random_draw, group_standings, remaining_group_matches,
};
pub use knockout::{create_final_if_ready, semifinals, start_knockout};
pub use results::{record_match_result, start_match};
pub use schedule::{generate_group_schedules, generate_round_robin, ScheduledPair};
pub use setup::begin_draw;
pub use standings::compute_standings;
