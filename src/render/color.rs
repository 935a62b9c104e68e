//! Color hints for i3bar-style output

/// Session just started
pub const START: Rgb = Rgb(0x8b, 0xf0, 0x9b);
/// Session about to end
pub const END: Rgb = Rgb(0xe9, 0x4d, 0x44);
/// Breaks and everything else
pub const BREAK: Rgb = Rgb(0xdd, 0xee, 0x5c);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn mix(self, other: Rgb, t: f64) -> Rgb {
        let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb(
            channel(self.0, other.0),
            channel(self.1, other.1),
            channel(self.2, other.2),
        )
    }
}

/// Color for an active session: one gradient step per whole minute of the
/// session, red with nothing left and green with everything left.
pub fn session_color(session_duration: i64, seconds_left: i64) -> Rgb {
    let steps = session_duration.div_euclid(60);
    if steps <= 1 {
        return if steps == 1 { END } else { START };
    }
    let step = seconds_left.div_euclid(60).clamp(0, steps - 1);
    END.mix(START, step as f64 / (steps - 1) as f64)
}
