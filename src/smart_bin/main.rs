use crate::config::Config;
use crate::library::logger::interface::Logger;
use crate::smart_bin::core::{init, transition, Effect, Event, Model};
use crate::smart_bin::run_effect::RunEffect;
use std::collections::VecDeque;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, MutexGuard};

/// One user session: the model plus everything needed to act on it.
///
/// Events are handled one at a time. Each event runs its effects to
/// completion, so a submission finishes before the next event is looked at.
#[derive(Clone)]
pub struct SmartBin {
    model: Arc<Mutex<Model>>,
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    run_effect: RunEffect,
}

impl SmartBin {
    pub fn new(config: Config, logger: Arc<dyn Logger + Send + Sync>, run_effect: RunEffect) -> Self {
        let (model, effects) = init();
        let smart_bin = Self {
            model: Arc::new(Mutex::new(model)),
            config,
            logger: logger.with_namespace("smart_bin"),
            run_effect,
        };
        for event in smart_bin.run_effects(effects) {
            smart_bin.dispatch(event);
        }
        smart_bin
    }

    /// Shared handle for the display to render from.
    pub fn shared_model(&self) -> Arc<Mutex<Model>> {
        Arc::clone(&self.model)
    }

    #[cfg(test)]
    pub fn model(&self) -> Model {
        lock(&self.model).clone()
    }

    pub fn dispatch(&self, event: Event) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let _ = self
                .logger
                .info(&format!("event: {}", event.to_display_string()));

            let mut model = lock(&self.model);
            let old_phase = model.phase.name();
            let (new_model, effects) = transition(&self.config, model.clone(), event);
            *model = new_model;

            let _ = self.logger.info(&format!(
                "phase: {} -> {}, effects: {}",
                old_phase,
                model.phase.name(),
                effects.len()
            ));
            drop(model);

            queue.extend(self.run_effects(effects));
        }
    }

    fn run_effects(&self, effects: Vec<Effect>) -> Vec<Event> {
        effects
            .into_iter()
            .map(|effect| self.run_effect.run_effect(effect))
            .collect()
    }

    pub fn run(&self, events: Receiver<Event>) {
        for event in events {
            self.dispatch(event);
        }
        let _ = self.logger.info("Event channel closed, stopping");
    }
}

pub fn lock(model: &Mutex<Model>) -> MutexGuard<'_, Model> {
    match model.lock() {
        Ok(model) => model,
        Err(poisoned) => poisoned.into_inner(),
    }
}
