//! Clock readouts

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// `MM:SS` for a countdown
pub fn clock(seconds: i64) -> String {
    format!("{:02}:{:02}", seconds.div_euclid(MINUTE), seconds.rem_euclid(MINUTE))
}

/// Time past the end of the session, in the coarsest unit that still fits
pub fn waiting(elapsed: i64) -> String {
    if elapsed < HOUR {
        format!("{:02}:{:02} min", elapsed.div_euclid(MINUTE), elapsed.rem_euclid(MINUTE))
    } else if elapsed < DAY {
        format!("{:02}:{:02} h", elapsed / HOUR, (elapsed % HOUR) / MINUTE)
    } else if elapsed <= WEEK {
        format!("{:02}:{:02} d", elapsed / DAY, (elapsed % DAY) / HOUR)
    } else {
        "Over a week".to_string()
    }
}
