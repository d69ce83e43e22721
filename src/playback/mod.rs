//! Playback scheduling: session state, pacing, and cancellation.
//!
//! The loop is single-threaded. Fetch, render and emit block; the only
//! suspension point is the pacing sleep, which a [`CancelToken`] can cut
//! short at any moment.

mod cancel;
mod clock;
mod scheduler;
mod session;

pub use cancel::{install_ctrlc_handler, CancelToken};
pub use clock::{Clock, SystemClock};
pub use scheduler::{Pacing, PlaybackOutcome, Scheduler, Step};
pub use session::{frame_delay, progress_line, PlaybackSession, FALLBACK_FRAME_DELAY};
