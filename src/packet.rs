use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::types::Packet;

pub const CODE_SWIMMING: &str = "SWM";
pub const CODE_RUNNING: &str = "RUN";
pub const CODE_WALKING: &str = "WLK";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PacketError {
    #[error("unknown workout code: {0:?}")]
    UnknownCode(String),

    #[error("packet {code:?} expects {expected} values, got {got}")]
    Arity {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("duration must be positive, got {0} h")]
    DegenerateDuration(f64),
}

/// How many positional values each workout code carries.
///
/// Layouts, in order:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, pool laps
fn expected_arity(code: &str) -> Option<usize> {
    match code {
        CODE_RUNNING => Some(3),
        CODE_WALKING => Some(4),
        CODE_SWIMMING => Some(5),
        _ => None,
    }
}

/// Turn one raw sensor packet into the matching workout.
///
/// The packet is checked for a known code, an exact value count, and a
/// positive duration before anything is constructed. Construction itself
/// computes nothing.
pub fn decode(packet: &Packet) -> Result<Box<dyn Training>, PacketError> {
    let expected = expected_arity(&packet.code)
        .ok_or_else(|| PacketError::UnknownCode(packet.code.clone()))?;

    if packet.values.len() != expected {
        return Err(PacketError::Arity {
            code: packet.code.clone(),
            expected,
            got: packet.values.len(),
        });
    }

    let action = packet.values[0] as u32;
    let duration_h = packet.values[1];
    let weight_kg = packet.values[2];

    if duration_h <= 0.0 {
        return Err(PacketError::DegenerateDuration(duration_h));
    }

    let training: Box<dyn Training> = match packet.code.as_str() {
        CODE_RUNNING => Box::new(Running {
            action,
            duration_h,
            weight_kg,
        }),
        CODE_WALKING => Box::new(SportsWalking {
            action,
            duration_h,
            weight_kg,
            height_cm: packet.values[3],
        }),
        CODE_SWIMMING => Box::new(Swimming {
            action,
            duration_h,
            weight_kg,
            pool_length_m: packet.values[3],
            pool_laps: packet.values[4] as u32,
        }),
        _ => unreachable!("arity table covers every known code"),
    };

    Ok(training)
}
