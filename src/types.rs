#[derive(Debug, Clone)]
pub struct Packet {
    pub code: String,
    pub values: Vec<f64>,
}

/// Finished report for one session. Built once, never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub workout: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// Fixed-format sentence, three decimals per numeric field.
    pub fn render(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
