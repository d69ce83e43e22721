//! Frame pacing state machine.
//!
//! [`Scheduler::step`] performs exactly one unit of work: the start-up
//! sequence on the first call, then one fetch/render/emit/sleep cycle per
//! call. [`Scheduler::run`] is the plain caller loop around it.

use std::time::Duration;

use super::{CancelToken, Clock, PlaybackSession};
use crate::ascii::FrameRenderer;
use crate::display::Display;
use crate::error::PlaybackError;
use crate::source::FrameSource;

/// How a playback pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The source ran out of frames
    Completed { frames_played: u64 },
    /// The user cancelled playback
    Interrupted { frames_played: u64 },
}

impl PlaybackOutcome {
    pub fn frames_played(&self) -> u64 {
        match self {
            PlaybackOutcome::Completed { frames_played }
            | PlaybackOutcome::Interrupted { frames_played } => *frames_played,
        }
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, PlaybackOutcome::Interrupted { .. })
    }

    /// Status line shown once playback has ended.
    pub fn status_message(&self) -> &'static str {
        match self {
            PlaybackOutcome::Completed { .. } => "✓ Video playback complete!",
            PlaybackOutcome::Interrupted { .. } => "⏸ Playback stopped by user",
        }
    }
}

/// Result of a single scheduler step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More work to do; call `step` again
    Continue,
    /// Playback has ended
    Finished(PlaybackOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Initializing { start_index: u64 },
    Running,
    Finished(PlaybackOutcome),
}

/// Timing settings for a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after the banner before the first frame
    pub banner_pause: Duration,
    /// Frame delay when the source has no frame rate
    pub fallback_frame_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            banner_pause: Duration::from_secs(2),
            fallback_frame_delay: super::FALLBACK_FRAME_DELAY,
        }
    }
}

/// Drives one playback pass over a frame source.
#[derive(Debug)]
pub struct Scheduler {
    session: PlaybackSession,
    renderer: FrameRenderer,
    frame_delay: Duration,
    banner_pause: Duration,
    frames_played: u64,
    state: State,
}

impl Scheduler {
    pub fn new(session: PlaybackSession, start_index: u64, pacing: Pacing) -> Self {
        let frame_delay = session.frame_delay(pacing.fallback_frame_delay);
        Self {
            session,
            renderer: FrameRenderer::new(),
            frame_delay,
            banner_pause: pacing.banner_pause,
            frames_played: 0,
            state: State::Initializing { start_index },
        }
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Target time between frames.
    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Run steps until playback finishes.
    pub fn run<S, D, C>(
        &mut self,
        source: &mut S,
        display: &mut D,
        clock: &C,
        cancel: &CancelToken,
    ) -> Result<PlaybackOutcome, PlaybackError>
    where
        S: FrameSource + ?Sized,
        D: Display + ?Sized,
        C: Clock + ?Sized,
    {
        loop {
            if let Step::Finished(outcome) = self.step(source, display, clock, cancel)? {
                return Ok(outcome);
            }
        }
    }

    /// Advance the state machine by one step.
    ///
    /// Once finished, further calls keep returning the same outcome without
    /// touching the source or display.
    pub fn step<S, D, C>(
        &mut self,
        source: &mut S,
        display: &mut D,
        clock: &C,
        cancel: &CancelToken,
    ) -> Result<Step, PlaybackError>
    where
        S: FrameSource + ?Sized,
        D: Display + ?Sized,
        C: Clock + ?Sized,
    {
        match self.state {
            State::Initializing { start_index } => {
                self.initialize(start_index, source, display, clock, cancel)
            }
            State::Running => self.tick(source, display, clock, cancel),
            State::Finished(outcome) => Ok(Step::Finished(outcome)),
        }
    }

    fn initialize<S, D, C>(
        &mut self,
        start_index: u64,
        source: &mut S,
        display: &mut D,
        clock: &C,
        cancel: &CancelToken,
    ) -> Result<Step, PlaybackError>
    where
        S: FrameSource + ?Sized,
        D: Display + ?Sized,
        C: Clock + ?Sized,
    {
        if cancel.is_cancelled() {
            return self.finish(false, display);
        }

        let start = self.session.start_at(start_index);
        let dims = self.session.dimensions();
        log::info!(
            "Rendering {}x{} cells with the {} ramp from frame {}",
            dims.width,
            dims.height,
            self.session.ramp().name(),
            start
        );
        if start > 0 {
            source.seek(start)?;
        }
        if self.session.frame_rate() <= 0.0 {
            log::warn!(
                "Unknown frame rate, pacing at {:?} per frame",
                self.frame_delay
            );
        }

        display.write_text(&self.session.banner())?;
        display.flush()?;

        if !self.banner_pause.is_zero() && clock.sleep(self.banner_pause, cancel) {
            return self.finish(false, display);
        }

        display.clear()?;
        self.state = State::Running;
        Ok(Step::Continue)
    }

    fn tick<S, D, C>(
        &mut self,
        source: &mut S,
        display: &mut D,
        clock: &C,
        cancel: &CancelToken,
    ) -> Result<Step, PlaybackError>
    where
        S: FrameSource + ?Sized,
        D: Display + ?Sized,
        C: Clock + ?Sized,
    {
        if cancel.is_cancelled() {
            return self.finish(false, display);
        }

        let started = clock.now();

        let Some(frame) = source.next_frame()? else {
            // The decoder may have stopped because of the same Ctrl+C
            let natural = !cancel.is_cancelled();
            return self.finish(natural, display);
        };

        let dims = self.session.dimensions();
        let progress = self.session.progress_line();
        let text = self
            .renderer
            .render_text(&frame, dims, self.session.ramp().chars());

        display.home()?;
        display.write_text(text)?;
        display.write_text("\n")?;
        display.write_text(&progress)?;
        display.flush()?;

        self.session.advance();
        self.frames_played += 1;

        let elapsed = clock.now().saturating_sub(started);
        let remaining = self.frame_delay.saturating_sub(elapsed);
        if remaining.is_zero() {
            log::debug!(
                "Frame {} took {:?}, over the {:?} budget",
                self.session.index() - 1,
                elapsed,
                self.frame_delay
            );
        } else if clock.sleep(remaining, cancel) {
            return self.finish(false, display);
        }

        Ok(Step::Continue)
    }

    fn finish<D: Display + ?Sized>(
        &mut self,
        natural: bool,
        display: &mut D,
    ) -> Result<Step, PlaybackError> {
        let outcome = if natural {
            PlaybackOutcome::Completed {
                frames_played: self.frames_played,
            }
        } else {
            PlaybackOutcome::Interrupted {
                frames_played: self.frames_played,
            }
        };
        self.state = State::Finished(outcome);
        log::info!(
            "Playback finished after {} frames: {:?}",
            self.frames_played,
            outcome
        );

        display.write_text(&format!("\n\n{}\n", outcome.status_message()))?;
        display.flush()?;
        Ok(Step::Finished(outcome))
    }
}
