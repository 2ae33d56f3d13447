//! End-of-run statistics.

use std::fmt;

use serde::Serialize;

use crate::station::Station;
use crate::truck::Truck;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruckReport {
    pub truck_id: usize,
    pub deliveries: u32,
    pub queued_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub station_id: usize,
    pub trucks_served: u32,
    /// None when no minute was simulated.
    pub average_queue_length: Option<f64>,
}

/// Snapshot of fleet and station throughput, in id order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub minutes: u32,
    pub trucks: Vec<TruckReport>,
    pub stations: Vec<StationReport>,
}

impl SimulationReport {
    pub fn collect(minutes: u32, trucks: &[Truck], stations: &[Station]) -> Self {
        Self {
            minutes,
            trucks: trucks
                .iter()
                .map(|t| TruckReport {
                    truck_id: t.id(),
                    deliveries: t.deliveries(),
                    queued_minutes: t.queued_time(),
                })
                .collect(),
            stations: stations
                .iter()
                .map(|s| StationReport {
                    station_id: s.id(),
                    trucks_served: s.served(),
                    average_queue_length: s.average_queue_length(),
                })
                .collect(),
        }
    }

    pub fn total_deliveries(&self) -> u32 {
        self.trucks.iter().map(|t| t.deliveries).sum()
    }

    pub fn total_served(&self) -> u32 {
        self.stations.iter().map(|s| s.trucks_served).sum()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.trucks {
            writeln!(
                f,
                "Truck {}: {} loads delivered, {} minutes spent queued for an unload station",
                t.truck_id, t.deliveries, t.queued_minutes
            )?;
        }
        for s in &self.stations {
            match s.average_queue_length {
                Some(avg) => writeln!(
                    f,
                    "Station {}: {} loads received, average queue length {:.2}",
                    s.station_id, s.trucks_served, avg
                )?,
                None => writeln!(
                    f,
                    "Station {}: {} loads received, average queue length n/a",
                    s.station_id, s.trucks_served
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationReport {
        SimulationReport {
            minutes: 4320,
            trucks: vec![
                TruckReport {
                    truck_id: 0,
                    deliveries: 17,
                    queued_minutes: 12,
                },
                TruckReport {
                    truck_id: 1,
                    deliveries: 15,
                    queued_minutes: 0,
                },
            ],
            stations: vec![StationReport {
                station_id: 0,
                trucks_served: 32,
                average_queue_length: Some(0.04166),
            }],
        }
    }

    #[test]
    fn test_text_format() {
        let text = sample().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Truck 0: 17 loads delivered, 12 minutes spent queued for an unload station",
                "Truck 1: 15 loads delivered, 0 minutes spent queued for an unload station",
                "Station 0: 32 loads received, average queue length 0.04",
            ]
        );
    }

    #[test]
    fn test_totals() {
        let report = sample();
        assert_eq!(report.total_deliveries(), 32);
        assert_eq!(report.total_served(), 32);
    }

    #[test]
    fn test_no_minutes_simulated() {
        let report = SimulationReport {
            minutes: 0,
            trucks: vec![],
            stations: vec![StationReport {
                station_id: 3,
                trucks_served: 0,
                average_queue_length: None,
            }],
        };
        assert_eq!(
            report.to_string(),
            "Station 3: 0 loads received, average queue length n/a\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["minutes"], 4320);
        assert_eq!(value["trucks"][0]["queued_minutes"], 12);
        assert_eq!(value["stations"][0]["trucks_served"], 32);
    }
}
