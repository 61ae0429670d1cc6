//! Decorative particle emitter.
//!
//! Particles are generated from a [`RandomSource`] and tracked in a bounded
//! [`ParticlePool`]. The binding layer asks the pool before appending a node
//! and releases the node when its lifetime ends.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use crate::config::{MAX_TIMER_DELAY_MS, ParticleConfig};

/// Colors a particle can take.
pub const PALETTE: [&str; 5] = [
    "rgba(99,102,241,0.7)",
    "rgba(139,92,246,0.6)",
    "rgba(37,99,235,0.6)",
    "rgba(236,72,153,0.5)",
    "rgba(255,255,255,0.8)",
];

/// Class given to every particle element.
pub const PARTICLE_CLASS: &str = "particle";

/// Source of uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[low, low + span)`.
    fn uniform(&mut self, low: f64, span: f64) -> f64 {
        low + self.next_f64() * span
    }
}

/// Visual parameters of one particle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    /// Width and height, px.
    pub size: f64,
    /// Horizontal position, percent of the container.
    pub left: f64,
    /// Animation duration, seconds.
    pub duration: f64,
    /// Animation delay, seconds.
    pub delay: f64,
    pub color: &'static str,
}

impl ParticleSpec {
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let size = rng.uniform(2.0, 5.0);
        let duration = rng.uniform(8.0, 12.0);
        let delay = rng.uniform(0.0, 3.0);
        let index = ((rng.next_f64() * PALETTE.len() as f64) as usize).min(PALETTE.len() - 1);
        let left = rng.uniform(0.0, 100.0);
        Self {
            size,
            left,
            duration,
            delay,
            color: PALETTE[index],
        }
    }

    /// Inline style for the particle element.
    pub fn css_text(&self) -> String {
        format!(
            "width:{size}px;height:{size}px;left:{left}%;bottom:-20px;\
             background:{color};animation-duration:{duration}s;animation-delay:{delay}s;\
             box-shadow:0 0 {glow}px {color};",
            size = self.size,
            left = self.left,
            color = self.color,
            duration = self.duration,
            delay = self.delay,
            glow = self.size * 3.0,
        )
    }

    /// Time until the element is removed: duration, delay, and one second.
    pub fn lifetime(&self) -> Duration {
        Duration::from_secs_f64(self.duration + self.delay + 1.0)
    }
}

/// Identifier of a live particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(pub u64);

/// Shared flag that stops an emitter.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Why a spawn tick produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnSkip {
    Cancelled,
    AnimationsSuppressed,
    PoolFull,
}

/// Bounded set of live particles with their expiry times.
#[derive(Debug)]
pub struct ParticlePool {
    capacity: usize,
    live: VecDeque<(ParticleId, Instant)>,
    next_id: u64,
    token: CancellationToken,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self::with_token(capacity, CancellationToken::new())
    }

    pub fn with_token(capacity: usize, token: CancellationToken) -> Self {
        Self {
            capacity,
            live: VecDeque::with_capacity(capacity),
            next_id: 0,
            token,
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Try to create a particle at `now`.
    pub fn try_spawn(
        &mut self,
        now: Instant,
        animations_suppressed: bool,
        rng: &mut impl RandomSource,
    ) -> Result<(ParticleId, ParticleSpec), SpawnSkip> {
        if self.token.is_cancelled() {
            return Err(SpawnSkip::Cancelled);
        }
        if animations_suppressed {
            return Err(SpawnSkip::AnimationsSuppressed);
        }
        if self.live.len() >= self.capacity {
            return Err(SpawnSkip::PoolFull);
        }

        let spec = ParticleSpec::random(rng);
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.live.push_back((id, now + spec.lifetime()));
        Ok((id, spec))
    }

    /// Forget a particle whose removal timer fired. Returns false if it was
    /// already gone.
    pub fn release(&mut self, id: ParticleId) -> bool {
        match self.live.iter().position(|(live_id, _)| *live_id == id) {
            Some(index) => {
                self.live.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every particle whose lifetime ended at or before `now`.
    pub fn reap(&mut self, now: Instant) -> Vec<ParticleId> {
        let mut expired = Vec::new();
        self.live.retain(|(id, expiry)| {
            if *expiry <= now {
                expired.push(*id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Cancel the emitter and return every particle still live.
    pub fn shutdown(&mut self) -> Vec<ParticleId> {
        self.token.cancel();
        self.live.drain(..).map(|(id, _)| id).collect()
    }
}

/// Delays of the startup burst, relative to emitter start. Saturates at
/// [`MAX_TIMER_DELAY_MS`].
pub fn burst_delays(config: &ParticleConfig) -> impl Iterator<Item = u32> + '_ {
    (0..config.burst_count)
        .map(|i| i.saturating_mul(config.burst_interval_ms).min(MAX_TIMER_DELAY_MS))
}
