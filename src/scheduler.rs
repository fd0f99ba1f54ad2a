use crate::Life;
use log::info;
use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

/// Auto-play state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Running,
    Paused,
}

/// Steps a [`Life`] on a fixed period until paused.
///
/// At most one periodic task exists per scheduler. The task runs on the Tokio
/// runtime `start` is called from and is aborted by `pause` or on drop.
pub struct Scheduler {
    life: Arc<Mutex<Life>>,
    period: Duration,
    state: PlayState,
    task: Option<JoinHandle<()>>,
}

impl Scheduler {
    /// Uses the period from the simulation's config.
    pub fn new(life: Life) -> Self {
        Self::from_shared(Arc::new(Mutex::new(life)))
    }

    pub fn from_shared(life: Arc<Mutex<Life>>) -> Self {
        let period = lock(&life).config().period;
        Self {
            life,
            period,
            state: PlayState::Idle,
            task: None,
        }
    }

    /// Shared handle to the simulation being played.
    pub fn life(&self) -> &Arc<Mutex<Life>> {
        &self.life
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// Starts auto-play; does nothing if already running.
    ///
    /// The first generation is computed one period after the call. A random
    /// board is created right away if the simulation has none.
    ///
    /// Must be called from within a current-thread Tokio runtime. On a
    /// multi-thread runtime a tick already in progress may still complete one
    /// step after `pause` returns, since abort only lands at the next await.
    pub fn start(&mut self) {
        if self.state == PlayState::Running {
            return;
        }
        {
            let mut life = lock(&self.life);
            if life.board().is_none() {
                life.random_board();
            }
        }

        // tokio intervals reject a zero period
        let period = self.period.max(Duration::from_millis(1));
        let first_tick = Instant::now() + period;
        let life = Arc::clone(&self.life);
        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                lock(&life).step();
            }
        }));
        self.state = PlayState::Running;
        info!("auto-play started, period {:?}", period);
    }

    /// Stops auto-play; does nothing unless running.
    pub fn pause(&mut self) {
        if self.state != PlayState::Running {
            return;
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.state = PlayState::Paused;
        info!("auto-play paused at generation {}", lock(&self.life).generation());
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// A panicking renderer must not stop the board from being used.
fn lock(life: &Mutex<Life>) -> MutexGuard<'_, Life> {
    life.lock().unwrap_or_else(PoisonError::into_inner)
}
