//! Mounted background animation.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::field::{DEFAULT_PARTICLES, Frame, ParticleField, ViewportSize};

/// Default frame period (about 60 frames per second).
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundConfig {
    pub particles: usize,
    pub frame_interval: Duration,
    /// Fixed seed for reproducible fields; random when `None`.
    pub seed: Option<u64>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            particles: DEFAULT_PARTICLES,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            seed: None,
        }
    }
}

/// Entry point for mounting the animated background.
pub struct Background;

impl Background {
    /// Start the animation.
    ///
    /// Spawns one repeating animation task and one resize subscription.
    /// Both belong to the returned handle and are released together when it
    /// is dropped or [`unmount`](MountedBackground::unmount)ed.
    ///
    /// Must be called inside a tokio runtime.
    #[must_use]
    pub fn mount(viewport: ViewportSize, config: BackgroundConfig) -> MountedBackground {
        let mut field = match config.seed {
            Some(seed) => ParticleField::seeded(viewport, config.particles, seed),
            None => ParticleField::random(viewport, config.particles),
        };
        let (resize_tx, mut resize_rx) = watch::channel(viewport);
        let (frame_tx, frame_rx) = watch::channel(field.frame());

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(config.frame_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        field.step();
                        if frame_tx.send(field.frame()).is_err() {
                            break;
                        }
                    }
                    changed = resize_rx.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        let size = *resize_rx.borrow_and_update();
                        field.resize(size);
                    }
                }
            }
            tracing::debug!("Background animation stopped");
        });

        tracing::debug!(
            particles = config.particles,
            interval_ms = config.frame_interval.as_millis(),
            "Background mounted"
        );
        MountedBackground {
            resize_tx,
            frame_rx,
            task,
        }
    }
}

/// Handle owning a running background animation.
///
/// Dropping it aborts the animation task and closes the resize
/// subscription. There is no other teardown path.
pub struct MountedBackground {
    resize_tx: watch::Sender<ViewportSize>,
    frame_rx: watch::Receiver<Frame>,
    task: JoinHandle<()>,
}

impl MountedBackground {
    /// Report a new viewport size to the animation.
    pub fn resize(&self, viewport: ViewportSize) {
        self.resize_tx.send_replace(viewport);
    }

    /// Subscribe to frames.
    #[must_use]
    pub fn frames(&self) -> watch::Receiver<Frame> {
        self.frame_rx.clone()
    }

    /// Most recent frame.
    #[must_use]
    pub fn latest(&self) -> Frame {
        self.frame_rx.borrow().clone()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the animation and release its resources.
    pub fn unmount(self) {}
}

impl Drop for MountedBackground {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(MountedBackground: Send, Sync);

    fn fast_config() -> BackgroundConfig {
        BackgroundConfig {
            particles: 10,
            frame_interval: Duration::from_millis(1),
            seed: Some(3),
        }
    }

    #[tokio::test]
    async fn test_frames_advance() {
        let mounted = Background::mount(ViewportSize::new(300.0, 200.0), fast_config());
        let mut frames = mounted.frames();
        for _ in 0..3 {
            frames.changed().await.unwrap();
        }
        let frame = mounted.latest();
        assert!(frame.tick >= 3);
        assert_eq!(frame.particles.len(), 10);
        assert!(mounted.is_running());
    }

    #[tokio::test]
    async fn test_resize_reaches_animation() {
        let mounted = Background::mount(ViewportSize::new(300.0, 200.0), fast_config());
        mounted.resize(ViewportSize::new(50.0, 40.0));

        let mut frames = mounted.frames();
        let frame = tokio::time::timeout(
            Duration::from_secs(2),
            frames.wait_for(|f| f.viewport == ViewportSize::new(50.0, 40.0)),
        )
        .await
        .unwrap()
        .unwrap()
        .clone();
        assert!(frame.particles.iter().all(|p| p.x <= 50.0 && p.y <= 40.0));
    }

    #[tokio::test]
    async fn test_unmount_releases_task_and_subscription() {
        let mounted = Background::mount(ViewportSize::new(100.0, 100.0), fast_config());
        let mut frames = mounted.frames();
        mounted.unmount();

        // The frame sender lives in the task; it closes once the task is gone.
        let closed = tokio::time::timeout(Duration::from_secs(2), async {
            while frames.changed().await.is_ok() {}
        })
        .await;
        assert!(closed.is_ok());
    }

    #[tokio::test]
    async fn test_zero_viewport_mount() {
        let mounted = Background::mount(ViewportSize::default(), fast_config());
        let mut frames = mounted.frames();
        frames.changed().await.unwrap();
        assert!(mounted.latest().particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
