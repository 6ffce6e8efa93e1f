//! Cooperative animation scheduler.
//!
//! The host owns frame pacing. The scheduler asks it for one tick at a time
//! through [`FrameClock`] and remembers the handle it is waiting for; a
//! callback carrying any other handle (cancelled, or from before a reset)
//! is ignored.

/// Identifies one requested tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Host-side frame pacing primitive
pub trait FrameClock {
    /// Ask for a single callback on a later frame
    fn request_tick(&mut self) -> TickHandle;

    /// Withdraw a request. Hosts may still deliver it; it will be rejected.
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Frame-paced clock for an immediate-mode host loop: at most one request
/// is outstanding, and it comes due on the next frame.
#[derive(Debug, Default)]
pub struct FramePacer {
    next_id: u64,
    pending: Option<TickHandle>,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the tick due this frame, if any
    pub fn take_due(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }
}

impl FrameClock for FramePacer {
    fn request_tick(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
}

impl RunState {
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::Running => "Running",
            RunState::Paused => "Paused",
        }
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    state: RunState,
    pending: Option<TickHandle>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    /// Idle|Paused -> Running. Returns false if already running.
    pub fn start(&mut self, clock: &mut dyn FrameClock) -> bool {
        if self.is_running() {
            return false;
        }
        log::debug!("scheduler {:?} -> Running", self.state);
        self.state = RunState::Running;
        self.pending = Some(clock.request_tick());
        true
    }

    /// Running -> Paused. Returns false in any other state.
    pub fn pause(&mut self, clock: &mut dyn FrameClock) -> bool {
        if !self.is_running() {
            return false;
        }
        log::debug!("scheduler Running -> Paused");
        self.cancel_pending(clock);
        self.state = RunState::Paused;
        true
    }

    /// Any state -> Idle
    pub fn reset(&mut self, clock: &mut dyn FrameClock) {
        log::debug!("scheduler {:?} -> Idle", self.state);
        self.cancel_pending(clock);
        self.state = RunState::Idle;
    }

    /// Accept a delivered tick. Only the outstanding handle is accepted, and
    /// only while running; everything else is a stale callback.
    pub fn begin_tick(&mut self, handle: TickHandle) -> bool {
        if !self.is_running() || self.pending != Some(handle) {
            log::trace!("dropping stale tick {handle:?}");
            return false;
        }
        self.pending = None;
        true
    }

    /// Request the next tick if still running and nothing is outstanding
    pub fn finish_tick(&mut self, clock: &mut dyn FrameClock) {
        if self.is_running() && self.pending.is_none() {
            self.pending = Some(clock.request_tick());
        }
    }

    fn cancel_pending(&mut self, clock: &mut dyn FrameClock) {
        if let Some(handle) = self.pending.take() {
            clock.cancel_tick(handle);
        }
    }
}
