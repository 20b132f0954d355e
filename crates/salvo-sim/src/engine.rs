//! Step engine: the core of the simulator.
//!
//! `Episode` owns the ship, the raid, and the battery for one evaluation.
//! Each tick runs a strict sequence: observation, controller call, motion,
//! fire decision, bookkeeping. Termination is checked before each tick and
//! finalization is applied exactly once.

use rand::Rng;
use tracing::{debug, trace, warn};

use salvo_core::components::{Battery, Missile, Ship};
use salvo_core::config::EpisodeConfig;
use salvo_core::enums::{EpisodeOutcome, InterceptResult, LaunchOutcome};
use salvo_core::error::Result;
use salvo_core::events::EpisodeEvent;
use salvo_core::policy::{Action, Policy};
use salvo_core::types::SimTime;

use crate::report::{EpisodeReport, EpisodeStats};
use crate::systems;

/// One engagement from initial state to termination.
#[derive(Debug, Clone)]
pub struct Episode {
    config: EpisodeConfig,
    missiles: Vec<Missile>,
    ship: Ship,
    battery: Battery,
    fitness: f64,
    time: SimTime,
    stats: EpisodeStats,
    events: Vec<EpisodeEvent>,
    outcome: Option<EpisodeOutcome>,
}

impl Episode {
    /// Validate the config and build the initial state.
    pub fn new(config: EpisodeConfig) -> Result<Self> {
        config.validate()?;
        if config.allows_overshoot() {
            warn!(
                missile_speed = config.missile_speed,
                ship_hit_radius = config.ship_hit_radius,
                "missiles can step over the hit radius; episode may end on the tick limit"
            );
        }

        let missiles = config.missiles.iter().copied().map(Missile::new).collect();
        let ship = Ship::new(config.ship_position, config.ship_hit_radius);
        let battery = Battery::new(config.initial_ammo);

        Ok(Self {
            config,
            missiles,
            ship,
            battery,
            fitness: 0.0,
            time: SimTime::default(),
            stats: EpisodeStats::default(),
            events: Vec::new(),
            outcome: None,
        })
    }

    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    pub fn missiles(&self) -> &[Missile] {
        &self.missiles
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    /// Running fitness. Final only once [`Episode::outcome`] is set.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn tick(&self) -> u64 {
        self.time.tick
    }

    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// Trace events recorded so far (empty unless tracing is enabled).
    pub fn events(&self) -> &[EpisodeEvent] {
        &self.events
    }

    /// Set once the episode has been finalized.
    pub fn outcome(&self) -> Option<EpisodeOutcome> {
        self.outcome
    }

    /// The observation the controller would receive for the current state.
    pub fn observation(&self) -> Vec<f64> {
        systems::observation::build(&self.missiles, &self.ship, &self.battery)
    }

    /// Termination condition for the current state, if any.
    ///
    /// Ship destruction takes precedence over a clean sweep.
    pub fn termination(&self) -> Option<EpisodeOutcome> {
        if !self.ship.alive {
            Some(EpisodeOutcome::ShipDestroyed)
        } else if self.missiles.iter().all(|m| !m.alive) {
            Some(EpisodeOutcome::AllIntercepted)
        } else if self.time.tick >= self.config.max_ticks {
            Some(EpisodeOutcome::TickLimit)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some() || self.termination().is_some()
    }

    /// Advance one tick, or finalize if the episode has terminated.
    ///
    /// Returns the outcome once the episode is over; further calls keep
    /// returning it without touching state.
    pub fn step<P, R>(&mut self, policy: &mut P, rng: &mut R) -> Result<Option<EpisodeOutcome>>
    where
        P: Policy + ?Sized,
        R: Rng,
    {
        if let Some(outcome) = self.outcome {
            return Ok(Some(outcome));
        }
        if let Some(outcome) = self.termination() {
            self.finalize(outcome);
            return Ok(Some(outcome));
        }

        let observation = self.observation();
        let raw = policy.decide(&observation);
        let action = Action::from_raw(raw, self.missiles.len(), self.time.tick)?;

        self.run_tick(&action, rng);
        Ok(None)
    }

    /// Run to termination and produce the report.
    pub fn run<P, R>(mut self, policy: &mut P, rng: &mut R) -> Result<EpisodeReport>
    where
        P: Policy + ?Sized,
        R: Rng,
    {
        debug!(
            policy = policy.name(),
            missiles = self.missiles.len(),
            "episode starting"
        );
        let outcome = loop {
            if let Some(outcome) = self.step(policy, rng)? {
                break outcome;
            }
        };
        Ok(EpisodeReport {
            fitness: self.fitness,
            outcome,
            ticks: self.time.tick,
            ammo_remaining: self.battery.ammo,
            shots_fired: self.stats.shots_fired,
            intercepts: self.stats.intercepts,
            invalid_launches: self.stats.invalid_launches,
            missiles_remaining: self.missiles.iter().filter(|m| m.alive).count(),
            events: self.events,
        })
    }

    /// Motion, fire decision, and bookkeeping for one checked action.
    fn run_tick<R: Rng>(&mut self, action: &Action, rng: &mut R) {
        let tick = self.time.tick;
        trace!(tick, fitness = self.fitness, "tick");

        // 1. Motion
        if let Some(missile) =
            systems::movement::run(&mut self.missiles, &mut self.ship, self.config.missile_speed)
        {
            debug!(tick, missile, "missile hit the ship");
            self.record(EpisodeEvent::ShipHit { tick, missile });
        }

        // 2. Fire decision
        let launch = systems::fire_control::run(
            action,
            &mut self.missiles,
            &self.ship,
            &mut self.battery,
            &self.config,
            rng,
        );
        self.fitness += systems::scoring::launch_reward(&self.config.scoring, &launch);
        self.note_launch(tick, launch);

        // 3. Bookkeeping
        self.fitness +=
            systems::bookkeeping::run(&mut self.battery, &mut self.time, &self.config.scoring);
    }

    fn note_launch(&mut self, tick: u64, launch: LaunchOutcome) {
        match launch {
            LaunchOutcome::Held => {}
            LaunchOutcome::Invalid { target } => {
                self.stats.invalid_launches += 1;
                debug!(tick, target, ammo = self.battery.ammo, "launch rejected");
            }
            LaunchOutcome::Fired {
                target,
                distance,
                result,
            } => {
                self.stats.shots_fired += 1;
                debug!(tick, target, distance, ?result, "interceptor fired");
                match result {
                    InterceptResult::Hit => {
                        self.stats.intercepts += 1;
                        self.record(EpisodeEvent::Intercepted {
                            tick,
                            missile: target,
                            distance,
                        });
                    }
                    InterceptResult::Miss => {
                        self.record(EpisodeEvent::Missed {
                            tick,
                            missile: target,
                        });
                    }
                }
            }
        }
    }

    fn finalize(&mut self, outcome: EpisodeOutcome) {
        self.fitness += systems::scoring::terminal_adjustment(&self.config.scoring, outcome);
        self.outcome = Some(outcome);
        debug!(
            tick = self.time.tick,
            ?outcome,
            fitness = self.fitness,
            "episode finished"
        );
        self.record(EpisodeEvent::Finished {
            tick: self.time.tick,
            outcome,
        });
    }

    fn record(&mut self, event: EpisodeEvent) {
        if self.config.trace {
            self.events.push(event);
        }
    }
}
