use crate::CHIP8_TIMER_HZ;

/// Delay and sound timers. Both count down once per `tick`, which the host
/// calls at 60hz no matter how fast instructions run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
    tone_off: bool,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count both timers down by one. Returns true when the sound timer went
    /// from 1 to 0 during this call.
    pub fn tick(&mut self) -> bool {
        self.delay = self.delay.saturating_sub(1);
        self.tone_off = self.sound == 1;
        self.sound = self.sound.saturating_sub(1);
        self.tone_off
    }

    /// Whether the last `tick` turned the tone off. Stays set until the next tick.
    pub fn tone_off(&self) -> bool {
        self.tone_off
    }

    pub fn is_tone_on(&self) -> bool {
        self.sound != 0
    }
}

/// Turns elapsed wall time into a number of due 60hz timer ticks.
#[derive(Clone, Debug, Default)]
pub struct TickClock {
    elapsed: f64,
}

impl TickClock {
    const TICK_DURATION: f64 = 1.0 / CHIP8_TIMER_HZ;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta_s: f64) -> u32 {
        self.elapsed += delta_s;
        // tolerate float error so that exactly 1s yields 60 ticks
        let due = ((self.elapsed + 1e-9) / Self::TICK_DURATION).floor();
        if due < 1.0 {
            return 0;
        }
        self.elapsed = (self.elapsed - due * Self::TICK_DURATION).max(0.0);
        due as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_counts_to_zero_and_stays() {
        let mut timers = Timers::new();
        timers.delay = 5;

        for _ in 0..5 {
            timers.tick();
        }
        assert_eq!(timers.delay, 0);

        timers.tick();
        assert_eq!(timers.delay, 0);
    }

    #[test]
    fn test_timers_are_independent() {
        let mut timers = Timers::new();
        timers.delay = 3;
        timers.sound = 1;

        timers.tick();

        assert_eq!(timers.delay, 2);
        assert_eq!(timers.sound, 0);
    }

    #[test]
    fn test_tone_off_edge() {
        let mut timers = Timers::new();
        timers.sound = 2;
        assert!(timers.is_tone_on());

        assert!(!timers.tick());
        assert!(!timers.tone_off());
        assert!(timers.is_tone_on());

        assert!(timers.tick());
        assert!(timers.tone_off());
        assert!(!timers.is_tone_on());

        // only reported once
        assert!(!timers.tick());
        assert!(!timers.tone_off());
    }

    #[test]
    fn test_silent_timer_never_fires() {
        let mut timers = Timers::new();
        for _ in 0..10 {
            assert!(!timers.tick());
        }
    }

    #[test]
    fn test_clock_one_second() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(1.0), 60);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_clock_accumulates() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
        assert_eq!(clock.advance(0.01), 0);
        assert_eq!(clock.advance(0.01), 1);
    }
}
