use crate::types::Summary;
use std::fmt;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered per step, shared by running and walking.
const STEP_LEN_KM: f64 = 0.65;
/// Distance covered per stroke.
const STROKE_LEN_KM: f64 = 1.38;

/// One completed training session as reported by the tracker.
///
/// Stored fields are fixed at construction; everything else is derived on
/// each call. Default bodies cover the stride-based workouts; swimming
/// replaces both the stride length and the mean-speed formula. Duration is
/// always positive here since the packet decoder rejects anything else.
pub trait Training: fmt::Debug {
    /// Display name used in the rendered summary.
    fn label(&self) -> &'static str;

    /// Count of discrete movement units (steps or strokes).
    fn action(&self) -> u32;

    /// Session length in hours.
    fn duration_h(&self) -> f64;

    /// Body weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Distance covered per action unit, in km.
    fn step_length_km(&self) -> f64 {
        STEP_LEN_KM
    }

    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.step_length_km() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Calories burned over the session. Each workout has its own formula.
    fn spent_calories(&self) -> f64;

    /// Assemble the report. Speed is evaluated before calories since the
    /// calorie formulas read it.
    fn summary(&self) -> Summary {
        Summary {
            workout: self.label().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Running {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Running {
    const SPEED_FACTOR: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        (Self::SPEED_FACTOR * self.mean_speed_kmh() - Self::SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * (self.duration_h * MIN_IN_H)
    }
}

#[derive(Debug, Clone)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    /// Body height in centimeters; divisor in the calorie formula.
    pub height_cm: f64,
}

impl SportsWalking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        // Squared speed over height is floored, not divided exactly. The
        // tracker firmware computes it that way and the reference outputs
        // depend on it.
        let speed_term = (self.mean_speed_kmh().powi(2) / self.height_cm).floor();

        (Self::WEIGHT_FACTOR * self.weight_kg
            + speed_term * Self::SPEED_HEIGHT_FACTOR * self.weight_kg)
            * (self.duration_h * MIN_IN_H)
    }
}

#[derive(Debug, Clone)]
pub struct Swimming {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_FACTOR: f64 = 2.0;
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_length_km(&self) -> f64 {
        STROKE_LEN_KM
    }

    // Pool-based, not stroke-based: laps times pool length is the ground
    // truth for how far the swimmer actually moved per hour.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT) * Self::WEIGHT_FACTOR * self.weight_kg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn running_reference_session() {
        let run = Running {
            action: 15_000,
            duration_h: 1.0,
            weight_kg: 75.0,
        };
        assert!(close(run.distance_km(), 9.75));
        assert!(close(run.mean_speed_kmh(), 9.75));
        assert!(close(run.spent_calories(), 699.75));
    }

    #[test]
    fn walking_reference_session() {
        let walk = SportsWalking {
            action: 9_000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 180.0,
        };
        assert!(close(walk.distance_km(), 5.85));
        assert!(close(walk.mean_speed_kmh(), 5.85));
        // 5.85^2 / 180 floors to zero, leaving only the weight term.
        assert!(close(walk.spent_calories(), 157.5));
    }

    #[test]
    fn walking_speed_term_survives_flooring_for_short_walkers() {
        let walk = SportsWalking {
            action: 9_000,
            duration_h: 1.0,
            weight_kg: 75.0,
            height_cm: 30.0,
        };
        // 34.2225 / 30 floors to 1.0: (0.035*75 + 1*0.029*75) * 60.
        assert!(close(walk.spent_calories(), 288.0));
    }

    #[test]
    fn swimming_reference_session() {
        let swim = Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        };
        assert!(close(swim.distance_km(), 0.9936));
        assert!(close(swim.mean_speed_kmh(), 1.0));
        assert!(close(swim.spent_calories(), 336.0));
    }

    #[test]
    fn swimming_distance_and_speed_use_different_bases() {
        // Strokes drive distance, pool laps drive speed.
        let swim = Swimming {
            action: 1_000,
            duration_h: 2.0,
            weight_kg: 80.0,
            pool_length_m: 50.0,
            pool_laps: 20,
        };
        assert!(close(swim.distance_km(), 1.38));
        assert!(close(swim.mean_speed_kmh(), 0.5));
    }

    #[test]
    fn running_calories_go_negative_at_low_speed() {
        // Inherent property of the coefficients, kept as-is.
        let crawl = Running {
            action: 100,
            duration_h: 1.0,
            weight_kg: 75.0,
        };
        assert!(crawl.spent_calories() < 0.0);
    }

    #[test]
    fn derived_accessors_are_idempotent() {
        let swim = Swimming {
            action: 720,
            duration_h: 1.0,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        };
        assert_eq!(
            swim.distance_km().to_bits(),
            swim.distance_km().to_bits()
        );
        assert_eq!(
            swim.mean_speed_kmh().to_bits(),
            swim.mean_speed_kmh().to_bits()
        );
        assert_eq!(
            swim.spent_calories().to_bits(),
            swim.spent_calories().to_bits()
        );
    }

    #[test]
    fn summary_carries_all_derived_values() {
        let run = Running {
            action: 15_000,
            duration_h: 1.0,
            weight_kg: 75.0,
        };
        let summary = run.summary();
        assert_eq!(summary.workout, "Running");
        assert!(close(summary.duration_h, 1.0));
        assert!(close(summary.distance_km, run.distance_km()));
        assert!(close(summary.mean_speed_kmh, run.mean_speed_kmh()));
        assert!(close(summary.calories_kcal, run.spent_calories()));
    }
}
