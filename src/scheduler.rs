//! Tick sources
//!
//! The controller starts and stops a [`Scheduler`] on phase changes. In the
//! browser that is a `setInterval`; headless runs and tests use
//! [`ManualScheduler`] and call `GameController::tick` themselves.

/// A fixed-rate tick source
pub trait Scheduler {
    /// Begin firing ticks. An already running schedule is cancelled first.
    fn start(&mut self);
    /// Stop firing ticks. No-op if not running.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Headless scheduler; records state, the caller drives ticks
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    running: bool,
    /// Number of times a schedule was created
    pub starts: u32,
    /// Number of times a live schedule was cancelled
    pub stops: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self) {
        if self.running {
            self.stop();
        }
        self.running = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::IntervalScheduler;

#[cfg(target_arch = "wasm32")]
mod web {
    use super::Scheduler;
    use crate::consts::TICK_INTERVAL_MS;

    /// `window.setInterval` at the fixed tick rate
    #[derive(Default)]
    pub struct IntervalScheduler {
        callback: Option<js_sys::Function>,
        handle: Option<i32>,
    }

    impl IntervalScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set the function each tick calls. Must happen before `start`.
        pub fn bind(&mut self, callback: js_sys::Function) {
            self.callback = Some(callback);
        }
    }

    impl Scheduler for IntervalScheduler {
        fn start(&mut self) {
            self.stop();
            let Some(callback) = &self.callback else {
                log::warn!("Scheduler started before a tick callback was bound");
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            match window
                .set_interval_with_callback_and_timeout_and_arguments_0(callback, TICK_INTERVAL_MS)
            {
                Ok(handle) => self.handle = Some(handle),
                Err(e) => log::error!("setInterval failed: {:?}", e),
            }
        }

        fn stop(&mut self) {
            if let Some(handle) = self.handle.take() {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(handle);
                }
            }
        }

        fn is_running(&self) -> bool {
            self.handle.is_some()
        }
    }
}
