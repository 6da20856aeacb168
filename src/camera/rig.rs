//! Pure camera rig state machine
//!
//! Three modes: free overview, focusing on a body, resetting back to the
//! overview pose. Movement uses exponential easing: each tick the pose moves a
//! fixed fraction of the remaining distance toward its goal, so the approach
//! converges monotonically with no overshoot. Kept free of ECS types so the
//! transition logic is directly unit-testable.

use bevy::prelude::*;

/// Fixed overview pose on the +Z axis.
pub const OVERVIEW_POSITION: Vec3 = Vec3::new(0.0, 0.0, 150.0);
pub const OVERVIEW_TARGET: Vec3 = Vec3::ZERO;

/// Fraction of the remaining distance covered per tick.
pub const EASE_FRACTION: f32 = 0.05;

/// Once within this distance of the overview position, the reset is done.
pub const RESET_THRESHOLD: f32 = 0.5;

/// Camera standoff along +Z from the focused body. The anchor is rendered
/// much larger than the planets, so it gets a larger standoff.
pub const ANCHOR_STANDOFF: f32 = 30.0;
pub const BODY_STANDOFF: f32 = 10.0;

/// Lateral shift of the look-at target, so the label next to the body is not
/// hidden behind it.
pub const TARGET_SHIFT: Vec3 = Vec3::new(4.0, 0.0, 0.0);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RigMode {
    #[default]
    Overview,
    Focusing,
    Resetting,
}

/// Camera position plus look-at target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Pose {
    pub const OVERVIEW: Pose = Pose {
        position: OVERVIEW_POSITION,
        target: OVERVIEW_TARGET,
    };
}

/// The focused body's live world position, sampled this tick.
#[derive(Clone, Copy, Debug)]
pub struct FocusTarget {
    pub world_position: Vec3,
    pub is_anchor: bool,
}

impl FocusTarget {
    pub fn standoff(&self) -> f32 {
        if self.is_anchor { ANCHOR_STANDOFF } else { BODY_STANDOFF }
    }
}

/// Result of one tick: the eased pose, whether the rig drove it, and whether
/// the reset finished this tick (the caller clears the reset flag on that).
#[derive(Clone, Copy, Debug)]
pub struct RigTick {
    pub pose: Pose,
    pub driven: bool,
    pub reset_done: bool,
}

#[derive(Resource, Default)]
pub struct CameraRig {
    pub mode: RigMode,
}

impl CameraRig {
    /// Advance the state machine by one tick. `pose` is the camera's current
    /// pose, including any rotation the user applied since the last tick, so
    /// user input and programmatic easing compose additively.
    pub fn tick(&mut self, pose: Pose, focus: Option<FocusTarget>, reset_requested: bool) -> RigTick {
        if reset_requested {
            self.mode = RigMode::Resetting;
        } else if focus.is_some() {
            // Covers both Overview -> Focusing and retargeting a different
            // body while already focusing, with no intervening Overview tick.
            self.mode = RigMode::Focusing;
        }

        match self.mode {
            RigMode::Overview => RigTick {
                pose,
                driven: false,
                reset_done: false,
            },
            RigMode::Focusing => {
                let Some(focus) = focus else {
                    // Selection cleared without a reset request; nothing to
                    // track this tick.
                    return RigTick {
                        pose,
                        driven: false,
                        reset_done: false,
                    };
                };
                let desired = Pose {
                    position: focus.world_position + Vec3::Z * focus.standoff(),
                    target: focus.world_position + TARGET_SHIFT,
                };
                RigTick {
                    pose: ease(pose, desired),
                    driven: true,
                    reset_done: false,
                }
            }
            RigMode::Resetting => {
                let pose = ease(pose, Pose::OVERVIEW);
                let reset_done = pose.position.distance(OVERVIEW_POSITION) < RESET_THRESHOLD;
                if reset_done {
                    self.mode = RigMode::Overview;
                }
                RigTick {
                    pose,
                    driven: true,
                    reset_done,
                }
            }
        }
    }
}

fn ease(current: Pose, desired: Pose) -> Pose {
    Pose {
        position: current.position.lerp(desired.position, EASE_FRACTION),
        target: current.target.lerp(desired.target, EASE_FRACTION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus_on(world_position: Vec3) -> Option<FocusTarget> {
        Some(FocusTarget {
            world_position,
            is_anchor: false,
        })
    }

    #[test]
    fn overview_is_idle() {
        let mut rig = CameraRig::default();
        let pose = Pose {
            position: Vec3::new(30.0, 12.0, 90.0),
            target: Vec3::ZERO,
        };
        let tick = rig.tick(pose, None, false);
        assert_eq!(rig.mode, RigMode::Overview);
        assert!(!tick.driven);
        assert_eq!(tick.pose, pose);
    }

    #[test]
    fn focusing_converges_to_standoff_without_overshoot() {
        let mut rig = CameraRig::default();
        let body = Vec3::new(62.0, 0.0, 0.0);
        let desired = body + Vec3::Z * BODY_STANDOFF;
        let mut pose = Pose::OVERVIEW;

        let mut last_distance = pose.position.distance(desired);
        for _ in 0..400 {
            pose = rig.tick(pose, focus_on(body), false).pose;
            let distance = pose.position.distance(desired);
            assert!(distance <= last_distance, "distance must never increase");
            last_distance = distance;
        }
        assert_eq!(rig.mode, RigMode::Focusing);
        assert!(last_distance < 0.05);
        assert!(pose.target.distance(body + TARGET_SHIFT) < 0.05);
    }

    #[test]
    fn anchor_uses_larger_standoff() {
        let mut rig = CameraRig::default();
        let focus = Some(FocusTarget {
            world_position: Vec3::ZERO,
            is_anchor: true,
        });
        let mut pose = Pose::OVERVIEW;
        for _ in 0..400 {
            pose = rig.tick(pose, focus, false).pose;
        }
        assert!(pose.position.distance(Vec3::Z * ANCHOR_STANDOFF) < 0.05);
    }

    #[test]
    fn retargeting_never_passes_through_overview() {
        let mut rig = CameraRig::default();
        let mut pose = Pose::OVERVIEW;
        for _ in 0..50 {
            pose = rig.tick(pose, focus_on(Vec3::new(20.0, 0.0, 0.0)), false).pose;
        }
        assert_eq!(rig.mode, RigMode::Focusing);

        let second = Vec3::new(-40.0, 0.0, 0.0);
        for _ in 0..400 {
            pose = rig.tick(pose, focus_on(second), false).pose;
            assert_eq!(rig.mode, RigMode::Focusing);
        }
        assert!(pose.position.distance(second + Vec3::Z * BODY_STANDOFF) < 0.05);
    }

    #[test]
    fn reset_converges_to_overview_and_finishes() {
        let mut rig = CameraRig::default();
        let mut pose = Pose::OVERVIEW;
        for _ in 0..100 {
            pose = rig.tick(pose, focus_on(Vec3::new(62.0, 0.0, 0.0)), false).pose;
        }

        let mut finished = false;
        let mut last_distance = pose.position.distance(OVERVIEW_POSITION);
        for _ in 0..500 {
            let tick = rig.tick(pose, None, !finished);
            pose = tick.pose;
            let distance = pose.position.distance(OVERVIEW_POSITION);
            assert!(distance <= last_distance, "reset must converge monotonically");
            last_distance = distance;
            if tick.reset_done {
                finished = true;
                break;
            }
        }
        assert!(finished);
        assert!(last_distance < RESET_THRESHOLD);
        assert_eq!(rig.mode, RigMode::Overview);
    }

    #[test]
    fn reset_preempts_focus_tracking() {
        let mut rig = CameraRig::default();
        let mut pose = Pose::OVERVIEW;
        for _ in 0..100 {
            pose = rig.tick(pose, focus_on(Vec3::new(62.0, 0.0, 0.0)), false).pose;
        }
        // A stale focus target must lose to an explicit reset request.
        rig.tick(pose, focus_on(Vec3::new(62.0, 0.0, 0.0)), true);
        assert_eq!(rig.mode, RigMode::Resetting);
    }
}
