//! Pure simulation logic for the lunar mining fleet.
//!
//! A fleet of mining trucks cycles through load, haul, queue, unload and
//! return, while a set of unload stations serve them from per-station FIFO
//! queues. Time advances in fixed one-minute ticks; nothing here performs
//! I/O, so the whole engine is unit-testable and driven by any front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Run configuration, validation, fixed domain timings |
//! | [`error`] | Configuration error kind |
//! | [`truck`] | Truck entity and its five-state cycle |
//! | [`station`] | Unload station FIFO and queue-length history |
//! | [`simulation`] | Tick loop and shortest-queue assignment |
//! | [`report`] | Per-truck and per-station end-of-run statistics |
//!
//! ```
//! use lunarsim_logic::config::SimulationConfig;
//! use lunarsim_logic::simulation::Simulation;
//!
//! let config = SimulationConfig::new(4, 2).unwrap().with_seed(7);
//! let mut sim = Simulation::new(config).unwrap();
//! sim.run();
//! let report = sim.report();
//! assert_eq!(report.trucks.len(), 4);
//! assert_eq!(report.stations.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod simulation;
pub mod station;
pub mod truck;
