//! Simulation engine: the core of the trainer.
//!
//! `SimulationEngine` owns the hecs ECS world, applies controller commands,
//! runs all systems once per display frame, and produces `FrameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::f64::consts::TAU;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use atcsim_core::commands::ControllerCommand;
use atcsim_core::components::{AxisCapture, DataTag, Identity, TargetState, TrueState};
use atcsim_core::enums::SimPhase;
use atcsim_core::error::{CommandError, SettingsError};
use atcsim_core::settings::{AircraftSpawn, SimSettings};
use atcsim_core::state::{FrameSnapshot, SweepView};
use atcsim_core::types::{CanvasSize, SimTime};
use atcsim_geo::{GeoBounds, GeoProjection};
use atcsim_kinematics::{assign_altitude, assign_heading, assign_speed, KinematicLimits};
use atcsim_nav::{NavGeometry, NavGeometryResolver, NavigationDataset};

use crate::clock::SimulationClock;
use crate::sweep::SweepScheduler;
use crate::systems;
use crate::systems::render::FrameContext;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    limits: KinematicLimits,
    projection: GeoProjection,
    clock: SimulationClock,
    sweep: SweepScheduler,
    dataset: NavigationDataset,
    resolver: NavGeometryResolver,
    /// Derived from `dataset`; rebuilt when the projection changes.
    geometry: NavGeometry,
}

impl SimulationEngine {
    /// Build the world from validated settings: projection, explicit
    /// aircraft, then seeded traffic. Navigation data starts unloaded.
    pub fn new(settings: &SimSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let bounds = GeoBounds::from_area(&settings.area)?;
        let projection = GeoProjection::new(bounds, settings.canvas);

        let mut world = World::new();
        for spawn in &settings.aircraft {
            world_setup::spawn_aircraft(&mut world, &projection, spawn);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(settings.traffic.seed);
        world_setup::spawn_traffic(&mut world, &mut rng, &projection, settings.traffic.count);

        info!(
            aircraft = world.len(),
            min_lat = bounds.min_lat(),
            max_lat = bounds.max_lat(),
            min_lon = bounds.min_lon(),
            max_lon = bounds.max_lon(),
            "simulation initialised"
        );

        Ok(Self {
            world,
            time: SimTime::default(),
            phase: SimPhase::default(),
            limits: KinematicLimits::from_settings(settings),
            projection,
            clock: SimulationClock::new(),
            sweep: SweepScheduler::new(settings.sweep_interval_ms),
            dataset: NavigationDataset::NotLoaded,
            resolver: NavGeometryResolver::new(settings.active_runways.clone()),
            geometry: NavGeometry::default(),
        })
    }

    /// Advance to display-refresh timestamp `now_ms` and return the frame
    /// to draw. Never fails.
    pub fn frame(&mut self, now_ms: f64) -> FrameSnapshot {
        // The clock consumes timestamps even while paused so resuming does
        // not produce one huge step.
        let dt_ms = self.clock.tick(now_ms);
        let mut swept = false;

        if self.phase == SimPhase::Running && dt_ms > 0.0 {
            self.run_systems(dt_ms);
            if self.sweep.advance(dt_ms) {
                systems::display::refresh(&mut self.world, &self.projection);
                self.time.sweeps += 1;
                swept = true;
                debug!(sweeps = self.time.sweeps, "radar sweep");
            }
        }

        systems::render::build_snapshot(
            &self.world,
            FrameContext {
                time: self.time,
                phase: self.phase,
                canvas: self.projection.canvas(),
                sweep: SweepView {
                    progress: self.sweep.progress(),
                    swept,
                },
                nav_loaded: self.dataset.is_loaded(),
                geometry: &self.geometry,
            },
        )
    }

    /// Apply a controller command. Rejected commands are logged and leave
    /// every aircraft untouched.
    pub fn apply_command(&mut self, command: ControllerCommand) -> Result<(), CommandError> {
        let result = command
            .validate()
            .and_then(|()| self.handle_command(&command));
        if let Err(e) = &result {
            warn!(
                callsign = command.callsign().unwrap_or("-"),
                ?command,
                "command rejected: {e}"
            );
        }
        result
    }

    /// Install navigation records and derive their geometry.
    pub fn install_navigation(&mut self, dataset: NavigationDataset) {
        if !dataset.is_loaded() {
            debug!("navigation dataset not loaded, keeping current geometry");
            return;
        }
        self.dataset = dataset;
        self.rebuild_geometry();
        info!(
            runways = self.geometry.runways.len(),
            localizers = self.geometry.localizers.len(),
            "navigation geometry installed"
        );
    }

    /// The drawing surface changed size.
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        self.set_projection(self.projection.with_canvas(canvas));
    }

    /// Cover a different geographic area.
    pub fn set_bounds(&mut self, bounds: GeoBounds) {
        self.set_projection(GeoProjection::new(bounds, self.projection.canvas()));
    }

    /// Add an aircraft mid-run. It shows up immediately at its true position.
    /// Callsigns stay unique so clearances reach exactly one aircraft.
    pub fn spawn_aircraft(
        &mut self,
        spawn: &AircraftSpawn,
    ) -> Result<hecs::Entity, CommandError> {
        let callsign = spawn.callsign.trim();
        if self.find_aircraft(callsign).is_some() {
            warn!(callsign, "spawn rejected: callsign already in use");
            return Err(CommandError::DuplicateCallsign(callsign.to_string()));
        }
        info!(callsign, "aircraft spawned");
        Ok(world_setup::spawn_aircraft(&mut self.world, &self.projection, spawn))
    }

    /// Remove an aircraft by callsign. Returns whether one was found.
    pub fn remove_aircraft(&mut self, callsign: &str) -> bool {
        match self.find_aircraft(callsign) {
            Some(entity) if self.world.despawn(entity).is_ok() => {
                info!(callsign, "aircraft removed");
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn projection(&self) -> &GeoProjection {
        &self.projection
    }

    pub fn geometry(&self) -> &NavGeometry {
        &self.geometry
    }

    pub fn dataset(&self) -> &NavigationDataset {
        &self.dataset
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn find_aircraft(&self, callsign: &str) -> Option<hecs::Entity> {
        self.world
            .query::<&Identity>()
            .iter()
            .find(|(_, identity)| identity.callsign == callsign)
            .map(|(entity, _)| entity)
    }

    /// Run all per-frame systems in order.
    fn run_systems(&mut self, dt_ms: f64) {
        let dt_secs = dt_ms / 1000.0;
        systems::kinematics::run(&mut self.world, &self.limits, dt_secs);
        self.time.advance(dt_secs);
    }

    fn handle_command(&mut self, command: &ControllerCommand) -> Result<(), CommandError> {
        match command {
            ControllerCommand::SetHeading { callsign, degrees } => {
                self.with_clearance(callsign, |state, target, capture| {
                    assign_heading(state, target, capture, *degrees)
                })
            }
            ControllerCommand::SetSpeed { callsign, knots } => {
                self.with_clearance(callsign, |state, target, capture| {
                    assign_speed(state, target, capture, *knots)
                })
            }
            ControllerCommand::SetAltitude { callsign, feet } => {
                self.with_clearance(callsign, |state, target, capture| {
                    assign_altitude(state, target, capture, *feet)
                })
            }
            ControllerCommand::SetTagAngle { callsign, radians } => {
                let tag = self
                    .world
                    .query_mut::<(&Identity, &mut DataTag)>()
                    .into_iter()
                    .find(|(_, (identity, _))| identity.callsign == *callsign)
                    .map(|(_, (_, tag))| tag)
                    .ok_or_else(|| CommandError::UnknownAircraft(callsign.clone()))?;
                tag.angle_rad = radians.rem_euclid(TAU);
                Ok(())
            }
            ControllerCommand::SetScratchpad { callsign, text } => {
                let identity = self
                    .world
                    .query_mut::<&mut Identity>()
                    .into_iter()
                    .find(|(_, identity)| identity.callsign == *callsign)
                    .map(|(_, identity)| identity)
                    .ok_or_else(|| CommandError::UnknownAircraft(callsign.clone()))?;
                identity.scratchpad = text.trim().to_string();
                Ok(())
            }
            ControllerCommand::Resize { width, height } => {
                let canvas = CanvasSize::new(*width, *height).map_err(|_| {
                    CommandError::OutOfDomain {
                        field: "canvas size",
                        value: width.min(*height),
                    }
                })?;
                self.set_canvas(canvas);
                Ok(())
            }
            ControllerCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                    info!("simulation paused");
                }
                Ok(())
            }
            ControllerCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                    info!("simulation resumed");
                }
                Ok(())
            }
        }
    }

    /// Run `assign` against the named aircraft's kinematic components.
    fn with_clearance(
        &mut self,
        callsign: &str,
        assign: impl FnOnce(&TrueState, &mut TargetState, &mut AxisCapture),
    ) -> Result<(), CommandError> {
        let (_, (_, state, target, capture)) = self
            .world
            .query_mut::<(&Identity, &TrueState, &mut TargetState, &mut AxisCapture)>()
            .into_iter()
            .find(|(_, (identity, ..))| identity.callsign == callsign)
            .ok_or_else(|| CommandError::UnknownAircraft(callsign.to_string()))?;
        assign(state, target, capture);
        debug!(
            callsign,
            heading = target.heading_deg,
            speed = target.speed_kt,
            altitude = target.altitude_ft,
            "clearance assigned"
        );
        Ok(())
    }

    fn set_projection(&mut self, projection: GeoProjection) {
        self.projection = projection;
        systems::display::reproject(&mut self.world, &self.projection);
        self.rebuild_geometry();
        let canvas = self.projection.canvas();
        info!(
            width = canvas.width,
            height = canvas.height,
            "projection changed"
        );
    }

    fn rebuild_geometry(&mut self) {
        self.geometry = self.resolver.resolve(&self.dataset, &self.projection);
    }
}
