use std::{fmt, str::FromStr};

use crate::foundation::error::{WatchshotError, WatchshotResult};

/// Wall-clock time to render.
///
/// `hour` is always given in 24-hour terms (0..=23). In 12-hour mode the displayed hour is
/// derived from it, so 0 and 12 both show as "12".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    is_24h: bool,
}

/// The four digits placed in the 2x2 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockDigits {
    pub hour_tens: u8,
    pub hour_ones: u8,
    pub minute_tens: u8,
    pub minute_ones: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, is_24h: bool) -> WatchshotResult<Self> {
        if hour > 23 {
            return Err(WatchshotError::validation(format!(
                "hour {hour} out of range (0..=23)"
            )));
        }
        if minute > 59 {
            return Err(WatchshotError::validation(format!(
                "minute {minute} out of range (0..=59)"
            )));
        }
        Ok(Self {
            hour,
            minute,
            is_24h,
        })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn is_24h(self) -> bool {
        self.is_24h
    }

    pub fn display_hour(self) -> u8 {
        if self.is_24h {
            return self.hour;
        }
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn digits(self) -> ClockDigits {
        let h = self.display_hour();
        ClockDigits {
            hour_tens: h / 10,
            hour_ones: h % 10,
            minute_tens: self.minute / 10,
            minute_ones: self.minute % 10,
        }
    }

    /// 12-hour mode hides a leading zero hour digit; 24-hour mode always shows it.
    pub fn shows_hour_tens(self) -> bool {
        self.is_24h || self.digits().hour_tens != 0
    }

    /// Output file stem such as `09-41-12h` or `23-59-24h`.
    pub fn file_stem(self) -> String {
        format!(
            "{:02}-{:02}-{}",
            self.hour,
            self.minute,
            if self.is_24h { "24h" } else { "12h" }
        )
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.digits();
        write!(
            f,
            "{}{}:{}{} ({})",
            d.hour_tens,
            d.hour_ones,
            d.minute_tens,
            d.minute_ones,
            if self.is_24h { "24h" } else { "12h" }
        )
    }
}

/// Parses `HH:MM`, `HH:MM/12h` or `HH:MM/24h`. A bare `HH:MM` uses 12-hour display.
impl FromStr for ClockTime {
    type Err = WatchshotError;

    fn from_str(s: &str) -> WatchshotResult<Self> {
        let s = s.trim();
        let (clock, is_24h) = match s.split_once('/') {
            None => (s, false),
            Some((clock, "12h")) => (clock, false),
            Some((clock, "24h")) => (clock, true),
            Some((_, other)) => {
                return Err(WatchshotError::validation(format!(
                    "unknown clock format '{other}' in '{s}' (expected 12h or 24h)"
                )));
            }
        };
        let (h, m) = clock
            .split_once(':')
            .ok_or_else(|| WatchshotError::validation(format!("time '{s}' must be HH:MM")))?;
        let hour = h
            .parse::<u8>()
            .map_err(|_| WatchshotError::validation(format!("invalid hour in '{s}'")))?;
        let minute = m
            .parse::<u8>()
            .map_err(|_| WatchshotError::validation(format!("invalid minute in '{s}'")))?;
        Self::new(hour, minute, is_24h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/time.rs"]
mod tests;
