//! Easing curves for the rollback settle

/// Easing function applied to rollback interpolation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, damped arrival
    #[default]
    EaseOut,
    EaseOutQuad,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    ///
    /// Endpoints are always exact so interpolated runs land precisely on
    /// their targets.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseOutQuad] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        // Damped arrival: more than half the distance is covered by t=0.5
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseOutQuad.apply(0.5) > 0.5);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn test_monotone() {
        let mut previous = 0.0;
        for step in 1..=20 {
            let value = Easing::EaseOut.apply(step as f32 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }
}
