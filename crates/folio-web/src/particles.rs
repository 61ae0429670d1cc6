//! Hero particle emitter bound to `#particles-container`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::particles::{PARTICLE_CLASS, burst_delays};
use folio_core::theme::NO_ANIMATIONS_CLASS;
use folio_core::{ParticleConfig, ParticleId, ParticlePool, RandomSource, SpawnSkip};
use web_sys::Element;
use web_time::Instant;

use crate::dom::{DomResult, Interval, Page};

/// `Math.random()`.
struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// State shared between the timers of one emitter.
struct Shared {
    page: Page,
    container: Element,
    pool: RefCell<ParticlePool>,
    nodes: RefCell<HashMap<ParticleId, Element>>,
}

/// One spawn tick: reap expired particles, then try to add one.
fn spawn(shared: &Rc<Shared>) {
    let now = Instant::now();
    for id in shared.pool.borrow_mut().reap(now) {
        shared.remove_node(id);
    }

    let suppressed = shared.page.root_has_class(NO_ANIMATIONS_CLASS);
    let spawned = shared
        .pool
        .borrow_mut()
        .try_spawn(now, suppressed, &mut JsRandom);
    let (id, spec) = match spawned {
        Ok(spawned) => spawned,
        Err(SpawnSkip::PoolFull) => {
            log::trace!("Particle pool full");
            return;
        }
        Err(_) => return,
    };

    let node = match shared.create_node(&spec.css_text()) {
        Ok(node) => node,
        Err(e) => {
            log::warn!("Failed to create particle: {}", e);
            shared.pool.borrow_mut().release(id);
            return;
        }
    };
    shared.nodes.borrow_mut().insert(id, node);

    let owner = shared.clone();
    let removal = shared.page.set_timeout(spec.lifetime().as_millis() as u32, move || {
        if owner.pool.borrow_mut().release(id) {
            owner.remove_node(id);
        }
    });
    if let Err(e) = removal {
        // The next reap picks it up.
        log::warn!("Failed to schedule particle removal: {}", e);
    }
}

impl Shared {
    fn create_node(&self, css: &str) -> DomResult<Element> {
        let node = self.page.document.create_element("div")?;
        node.set_class_name(PARTICLE_CLASS);
        node.set_attribute("style", css)?;
        self.container.append_child(&node)?;
        Ok(node)
    }

    fn remove_node(&self, id: ParticleId) {
        if let Some(node) = self.nodes.borrow_mut().remove(&id) {
            node.remove();
        }
    }
}

/// A running particle emitter.
pub struct ParticleEmitter {
    shared: Rc<Shared>,
    interval: Option<Interval>,
}

impl ParticleEmitter {
    /// Start the emitter if the page has a particle container.
    pub fn start(page: &Page, config: &ParticleConfig) -> DomResult<Option<Self>> {
        let Some(container) = page.element("particles-container") else {
            log::debug!("#particles-container not found, particles disabled");
            return Ok(None);
        };

        let shared = Rc::new(Shared {
            page: page.clone(),
            container: container.into(),
            pool: RefCell::new(ParticlePool::new(config.max_live)),
            nodes: RefCell::new(HashMap::new()),
        });

        for delay in burst_delays(config) {
            let shared = shared.clone();
            page.set_timeout(delay, move || spawn(&shared))?;
        }

        let ticker = shared.clone();
        let interval = page.set_interval(config.interval_ms, move || spawn(&ticker))?;

        log::info!(
            "Particle emitter started (burst {}, every {} ms, max {})",
            config.burst_count,
            config.interval_ms,
            config.max_live
        );
        Ok(Some(Self {
            shared,
            interval: Some(interval),
        }))
    }

    /// Stop spawning and remove every live particle.
    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.clear();
        }
        let live = self.shared.pool.borrow_mut().shutdown();
        for id in live {
            self.shared.remove_node(id);
        }
        log::info!("Particle emitter stopped");
    }
}
