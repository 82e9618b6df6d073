// clock.rs - Periodic generation clock running on a tokio runtime

use std::time::Duration;

use conway::{SharedController, lock};
use log::debug;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Ticks `controller` every `period` until the task is aborted.
///
/// `on_generation` runs after each tick that actually computed a generation,
/// outside the controller lock. Overrunning ticks are skipped, not queued.
pub async fn run_clock<F>(controller: SharedController, period: Duration, on_generation: F)
where
    F: Fn() + Send + 'static,
{
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        let stepped = lock(&controller).tick().is_some();
        if stepped {
            on_generation();
        }
    }
}

/// Owns the runtime driving `run_clock`; dropping it stops the clock.
pub struct Clock {
    handle: JoinHandle<()>,
    _runtime: Runtime,
}

impl Clock {
    pub fn start<F>(runtime: Runtime, controller: SharedController, period: Duration, on_generation: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        debug!("starting generation clock every {period:?}");
        let handle = runtime.spawn(run_clock(controller, period, on_generation));
        Self {
            handle,
            _runtime: runtime,
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
