use std::time::Duration;

use instant::Instant;

use crate::config::SceneConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopping,
    /// Holds the time the last frame was advanced.
    Running(Instant),
    Pausing,
}

/// Logical frame counter driven by a host timer.
///
/// The host may call [`AnimationClock::update`] as often as it likes, the
/// counter only moves forward one frame once `frame_rate` has elapsed since
/// the previous step. Calls in between are skipped.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    state: ClockState,
    frame_rate: Duration,
    current_frame: u32,
}

impl AnimationClock {
    pub fn new(frame_rate: Duration) -> Self {
        Self {
            state: ClockState::Stopping,
            frame_rate,
            current_frame: 0,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, ClockState::Running(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, ClockState::Pausing)
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn frame_rate(&self) -> Duration {
        self.frame_rate
    }

    pub fn set_frame_rate(&mut self, value: Duration) {
        self.frame_rate = value;
    }

    pub fn play(&mut self, now: Instant) {
        if !self.is_playing() {
            log::info!("Start playing from frame {}", self.current_frame);
            self.state = ClockState::Running(now);
        }
    }

    pub fn pause(&mut self) {
        if self.is_playing() {
            log::info!("Pause at frame {}", self.current_frame);
            self.state = ClockState::Pausing;
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if self.is_paused() {
            log::info!("Resume at frame {}", self.current_frame);
            self.state = ClockState::Running(now);
        }
    }

    pub fn stop(&mut self) {
        self.state = ClockState::Stopping;
        self.current_frame = 0;
    }

    pub fn seek(&mut self, frame: u32) {
        log::debug!("Seek from {} to {}", self.current_frame, frame);
        self.current_frame = frame;
    }

    /// Steps one frame regardless of the play state.
    pub fn advance(&mut self) -> u32 {
        self.current_frame = self.current_frame.saturating_add(1);
        self.current_frame
    }

    /// Returns `true` when a new frame is due and has been taken.
    pub fn update(&mut self, now: Instant) -> bool {
        if let ClockState::Running(previous) = self.state {
            if now >= previous && now.duration_since(previous) >= self.frame_rate {
                self.advance();
                self.state = ClockState::Running(now);
                log::trace!("Advance to frame {}", self.current_frame);
                return true;
            }
        }
        false
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(SceneConfig::DEFAULT_FRAME_RATE_MILLIS))
    }
}
