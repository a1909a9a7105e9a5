/// Fixed-timestep driver for the simulation
///
/// Wall-clock time is accumulated and paid out as whole simulation ticks,
/// so animation frame counts and per-tick forces behave the same at any
/// display rate.
use std::time::{Duration, Instant};

/// Simulation ticks per second
pub const TICK_RATE: u32 = 60;

/// Length of one tick
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Maximum ticks paid out for one frame, so a long stall does not snowball
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Timing state of the main loop
#[derive(Debug)]
pub struct GameLoop {
    /// Time owed to the simulation
    accumulator: Duration,
    last_frame_time: Instant,
    paused: bool,
    frame_count: u64,
    tick_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of wall-clock time, returns the ticks it pays for
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;
        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }
        // drop whatever the cap left behind
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = self.accumulator.min(TICK_DURATION);
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks paid out
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused at tick {}", self.tick_count);
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // no burst of catch-up ticks
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
