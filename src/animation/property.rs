// src/animation/property.rs
//
// Single-shot property animation toward a set of per-axis targets.
// At most one animation is active at a time; starting a new one
// replaces whatever was in flight.

use std::collections::HashMap;

use crate::animation::EasingType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone)]
struct PropertyAnimation {
    target: HashMap<Axis, f32>,
    duration: f32,
    easing: EasingType,
}

#[derive(Debug, Clone, Default)]
pub struct Animatable {
    animation: Option<PropertyAnimation>,
}

impl Animatable {
    pub fn animate_to(&mut self, target: HashMap<Axis, f32>, duration: f32, easing: EasingType) {
        self.animation = Some(PropertyAnimation {
            target,
            duration,
            easing,
        });
    }

    /// Eased value for `axis` at `progress` in [0, 1], starting from `start`.
    /// An axis without a target stays at its start value.
    pub fn value_at(&self, axis: Axis, progress: f32, start: f32) -> f32 {
        match &self.animation {
            Some(animation) => match animation.target.get(&axis) {
                Some(&end) => animation.easing.apply(
                    progress * animation.duration,
                    start,
                    end - start,
                    animation.duration,
                ),
                None => start,
            },
            None => start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_no_animation_returns_start() {
        let animatable = Animatable::default();
        assert_eq!(animatable.value_at(Axis::X, 0.5, 7.0), 7.0);
    }

    #[test]
    fn test_untargeted_axis_returns_start() {
        let mut animatable = Animatable::default();
        animatable.animate_to(
            HashMap::from([(Axis::X, 100.0)]),
            4.0,
            EasingType::EaseInOutQuad,
        );

        assert_eq!(animatable.value_at(Axis::Y, 0.5, 3.0), 3.0);
    }

    #[test]
    fn test_targeted_axis_interpolates() {
        let mut animatable = Animatable::default();
        animatable.animate_to(
            HashMap::from([(Axis::X, 100.0)]),
            4.0,
            EasingType::EaseInOutQuad,
        );

        assert!((animatable.value_at(Axis::X, 0.0, 0.0)).abs() < EPSILON);
        assert!((animatable.value_at(Axis::X, 0.5, 0.0) - 50.0).abs() < EPSILON);
        assert!((animatable.value_at(Axis::X, 1.0, 0.0) - 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_new_animation_replaces_active_one() {
        let mut animatable = Animatable::default();
        animatable.animate_to(
            HashMap::from([(Axis::X, 100.0)]),
            4.0,
            EasingType::EaseInOutQuad,
        );
        animatable.animate_to(HashMap::from([(Axis::Y, 40.0)]), 2.0, EasingType::Linear);

        // the old x target is gone, only the new y target applies
        assert_eq!(animatable.value_at(Axis::X, 1.0, 0.0), 0.0);
        assert!((animatable.value_at(Axis::Y, 1.0, 0.0) - 40.0).abs() < EPSILON);
    }
}
