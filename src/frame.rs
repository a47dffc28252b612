use std::time::Instant;

/// Frame metadata - frame counter and timing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u32,
    /// Seconds since the clock started
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u32, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Wall clock that yields one `FrameInfo` per tick.
/// Use it in the event loop, or as an iterator: `for frame in clock { ... }`
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u32,
    start_time: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start_time: now,
            last_tick: now,
        }
    }

    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    /// Advance to the next frame
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        let time = now.duration_since(self.start_time).as_secs_f32();

        let info = FrameInfo::new(self.frame_number, time, delta);

        self.frame_number = self.frame_number.wrapping_add(1);
        self.last_tick = now;

        info
    }

    /// Restart delta measurement without touching the frame counter
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        Some(self.tick())
    }
}

/// Fixed-step frames for scripted runs
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    delta: f32,
    next: u32,
}

impl FixedStep {
    pub fn new(delta: f32) -> Self {
        Self { delta, next: 0 }
    }
}

impl Iterator for FixedStep {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let number = self.next;
        self.next = self.next.checked_add(1)?;
        Some(FrameInfo::new(number, number as f32 * self.delta, self.delta))
    }
}
