use std::time::Duration;

use crate::config::LOADING_SHOWN_KEY;
use crate::env::Environment;
use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingPhase {
    #[default]
    Splash,
    Revealing,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingEvent {
    MinDisplayElapsed,
    RepeatVisit,
    ExitAnimationFinished,
    /// Forces `Done` from any phase.
    SafetyTimeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: LoadingPhase,
    pub to: LoadingPhase,
    pub event: LoadingEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingTimings {
    min_display: Duration,
    safety: Duration,
}

impl LoadingTimings {
    pub const MIN_DISPLAY: Duration = Duration::from_millis(3000);
    pub const SAFETY: Duration = Duration::from_millis(4000);

    pub fn new(min_display: Duration, safety: Duration) -> Result<Self, SiteError> {
        if safety <= min_display {
            return Err(SiteError::Timings {
                min_display_ms: min_display.as_millis() as u64,
                safety_ms: safety.as_millis() as u64,
            });
        }
        Ok(Self {
            min_display,
            safety,
        })
    }

    pub fn min_display(&self) -> Duration {
        self.min_display
    }

    pub fn safety(&self) -> Duration {
        self.safety
    }
}

impl Default for LoadingTimings {
    fn default() -> Self {
        Self {
            min_display: Self::MIN_DISPLAY,
            safety: Self::SAFETY,
        }
    }
}

/// Timers the caller has to arm after [`LoadingSequencer::start`], both
/// measured from mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Schedule {
    pub min_display: Option<Duration>,
    pub safety: Option<Duration>,
}

/// Splash -> Revealing -> Done, with a forced edge to Done on the safety
/// timeout. `Done` is recorded in session storage so later loads in the same
/// session skip the splash.
#[derive(Debug, Clone, Default)]
pub struct LoadingSequencer {
    phase: LoadingPhase,
    timings: LoadingTimings,
}

impl LoadingSequencer {
    pub fn new(timings: LoadingTimings) -> Self {
        Self {
            phase: LoadingPhase::Splash,
            timings,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoadingPhase::Done
    }

    /// Check for a repeat visit and return the timers to arm.
    pub fn start<E: Environment>(&mut self, env: &E) -> Schedule {
        if env.session_get(LOADING_SHOWN_KEY).is_some() {
            self.apply(LoadingEvent::RepeatVisit, env);
        }
        if self.is_done() {
            return Schedule::default();
        }
        Schedule {
            min_display: Some(self.timings.min_display),
            safety: Some(self.timings.safety),
        }
    }

    fn next(&self, event: LoadingEvent) -> Option<LoadingPhase> {
        use LoadingEvent::*;
        use LoadingPhase::*;
        match (self.phase, event) {
            (Done, _) => None,
            (_, SafetyTimeout) => Some(Done),
            (Splash, RepeatVisit) => Some(Done),
            (Splash, MinDisplayElapsed) => Some(Revealing),
            (Revealing, ExitAnimationFinished) => Some(Done),
            _ => None,
        }
    }

    /// Feed an event in. Events that don't apply to the current phase are
    /// ignored and return `None`.
    pub fn apply<E: Environment>(&mut self, event: LoadingEvent, env: &E) -> Option<Transition> {
        let to = self.next(event)?;
        let transition = Transition {
            from: self.phase,
            to,
            event,
        };
        self.phase = to;
        if to == LoadingPhase::Done {
            if event == LoadingEvent::SafetyTimeout {
                log::info!("safety timeout forced the loading screen closed");
            }
            if let Err(e) = env.session_set(LOADING_SHOWN_KEY, "true") {
                log::warn!("couldn't record loading screen as shown: {e}");
            }
        }
        log::debug!("loading {:?} -> {:?} on {:?}", transition.from, to, event);
        Some(transition)
    }
}
