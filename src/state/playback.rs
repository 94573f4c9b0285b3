//! Playhead state shared by the timeline and the preview.
//!
//! The clock is advanced by a per-frame tick and only ever touches its own
//! fields. It reads the project duration but never the clips or markers, so it
//! cannot interfere with commits, undo or redo.

use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackClock {
    current_time: f64,
    is_playing: bool,
    last_tick: Option<Instant>,
}

impl PlaybackClock {
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Start or resume playback. The next tick measures from "now".
    pub fn play(&mut self) {
        if !self.is_playing {
            self.is_playing = true;
            self.last_tick = None;
            tracing::debug!("Playback: play (from {:.2}s)", self.current_time);
        }
    }

    pub fn pause(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            self.last_tick = None;
            tracing::debug!("Playback: pause at {:.2}s", self.current_time);
        }
    }

    pub fn toggle(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Move the playhead. Negative times clamp to 0.
    pub fn seek(&mut self, time: f64) {
        self.current_time = time.max(0.0);
        tracing::debug!("Playback: seek to {:.2}s", self.current_time);
    }

    pub fn seek_to_start(&mut self) {
        self.seek(0.0);
    }

    pub fn seek_to_end(&mut self, duration: f64) {
        self.seek(duration);
    }

    /// Advance by `delta` seconds of wall time.
    ///
    /// Playback stops on the tick after the playhead reaches `duration` and
    /// rewinds to 0. Returns `true` when this call stopped playback.
    pub fn advance(&mut self, delta: f64, duration: f64) -> bool {
        if !self.is_playing {
            return false;
        }
        if self.current_time >= duration {
            self.is_playing = false;
            self.last_tick = None;
            self.current_time = 0.0;
            tracing::debug!("Playback: reached end ({:.2}s), rewinding", duration);
            return true;
        }
        self.current_time = (self.current_time + delta.max(0.0)).min(duration);
        false
    }

    /// Frame callback: advance by the wall time elapsed since the previous
    /// tick. The first tick after `play` only records the instant.
    pub fn tick(&mut self, now: Instant, duration: f64) -> bool {
        if !self.is_playing {
            return false;
        }
        let delta = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f64())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance(delta, duration)
    }
}
