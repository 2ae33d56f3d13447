//! Simulation orchestrator - owns the fleet and stations and drives the clock.
//!
//! Each minute runs in two phases:
//! 1. every truck ticks, and a truck that has just arrived at the stations is
//!    assigned to the shortest queue within the same minute;
//! 2. every station processes its queue.
//!
//! No station runs before all trucks have ticked, so a truck can never join a
//! queue and be released from it in the same phase.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::report::SimulationReport;
use crate::station::Station;
use crate::truck::Truck;

pub struct Simulation {
    config: SimulationConfig,
    /// Indexed by truck id.
    trucks: Vec<Truck>,
    /// Indexed by station id.
    stations: Vec<Station>,
    rng: StdRng,
    /// Minutes simulated so far.
    minute: u32,
}

impl Simulation {
    /// Build the fleet: every truck starts loading, every queue starts empty.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let trucks = (0..config.num_trucks)
            .map(|id| Truck::new(id, &mut rng))
            .collect();
        let stations = (0..config.num_stations).map(Station::new).collect();

        Ok(Self {
            config,
            trucks,
            stations,
            rng,
            minute: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn is_finished(&self) -> bool {
        self.minute >= self.config.duration_minutes
    }

    /// Station with the fewest trucks in line. Ties go to the lowest id.
    pub fn station_with_shortest_queue(&self) -> usize {
        let mut shortest = 0;
        for (id, station) in self.stations.iter().enumerate() {
            if station.queue_length() < self.stations[shortest].queue_length() {
                shortest = id;
            }
        }
        shortest
    }

    /// Put a truck at the tail of the shortest queue. A truck arriving at an
    /// empty line starts unloading right away.
    pub fn assign(&mut self, truck_id: usize) {
        let station_id = self.station_with_shortest_queue();
        let station = &mut self.stations[station_id];
        let truck = &mut self.trucks[truck_id];

        truck.join_station(station_id);
        station.enqueue(truck_id);
        if station.queue_length() == 1 {
            truck.begin_unloading();
        }

        log::debug!(
            "minute {}: truck {} -> station {} (queue length {})",
            self.minute,
            truck_id,
            station_id,
            station.queue_length()
        );
    }

    /// Advance one minute.
    pub fn step(&mut self) {
        for truck_id in 0..self.trucks.len() {
            self.trucks[truck_id].advance_one_minute(&mut self.rng);
            if self.trucks[truck_id].needs_station_assignment() {
                self.assign(truck_id);
            }
        }

        for station in &mut self.stations {
            station.process_queue(&mut self.trucks);
        }

        self.minute += 1;
    }

    /// Run every remaining minute of the configured duration.
    pub fn run(&mut self) {
        log::info!(
            "Running simulation with {} trucks and {} stations for {} minutes",
            self.trucks.len(),
            self.stations.len(),
            self.config.duration_minutes
        );

        while !self.is_finished() {
            self.step();
        }

        let report = self.report();
        log::info!(
            "Simulation finished after {} minutes: {} deliveries, {} unloads",
            self.minute,
            report.total_deliveries(),
            report.total_served()
        );
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport::collect(self.minute, &self.trucks, &self.stations)
    }
}
