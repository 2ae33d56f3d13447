//! Mining truck entity and its five-state work cycle.
//!
//! A truck loads at a mining site, drives to an unload station, waits in the
//! station's queue, unloads, and drives back. Each state has a minute budget
//! fixed on entry; the truck counts itself through every state except
//! `Queued`, which only its station can end.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{LOAD_MINUTES_MAX, LOAD_MINUTES_MIN, TRAVEL_MINUTES, UNLOAD_MINUTES};

/// Position of a truck in its work cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruckState {
    Loading,
    SiteToStation,
    Queued,
    Unloading,
    StationToSite,
}

/// Minute budget assigned when a state is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateDuration {
    Fixed(u32),
    /// Fresh draw from [`sample_load_minutes`] on every entry.
    SampledLoad,
}

impl StateDuration {
    pub fn resolve(self, rng: &mut impl Rng) -> u32 {
        match self {
            Self::Fixed(minutes) => minutes,
            Self::SampledLoad => sample_load_minutes(rng),
        }
    }
}

impl TruckState {
    pub const ALL: [TruckState; 5] = [
        Self::Loading,
        Self::SiteToStation,
        Self::Queued,
        Self::Unloading,
        Self::StationToSite,
    ];

    /// Successor in the cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Loading => Self::SiteToStation,
            Self::SiteToStation => Self::Queued,
            Self::Queued => Self::Unloading,
            Self::Unloading => Self::StationToSite,
            Self::StationToSite => Self::Loading,
        }
    }

    /// Budget set on entering this state.
    ///
    /// `Queued` carries the unload budget: the queue itself has no timer, and
    /// the countdown must be ready the moment the station starts the unload.
    pub fn entry_duration(self) -> StateDuration {
        match self {
            Self::Loading => StateDuration::SampledLoad,
            Self::SiteToStation | Self::StationToSite => StateDuration::Fixed(TRAVEL_MINUTES),
            Self::Queued | Self::Unloading => StateDuration::Fixed(UNLOAD_MINUTES),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Loading => "LOADING",
            Self::SiteToStation => "SITE_TO_STATION",
            Self::Queued => "QUEUED",
            Self::Unloading => "UNLOADING",
            Self::StationToSite => "STATION_TO_SITE",
        }
    }

    /// States in which a truck belongs to a station queue.
    pub fn at_station(self) -> bool {
        matches!(self, Self::Queued | Self::Unloading)
    }
}

impl fmt::Display for TruckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Draw a load time, uniform over 1..=5 hours.
pub fn sample_load_minutes(rng: &mut impl Rng) -> u32 {
    rng.gen_range(LOAD_MINUTES_MIN..=LOAD_MINUTES_MAX)
}

/// A mining truck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Truck {
    pub(crate) id: usize,
    pub(crate) state: TruckState,
    /// Minutes spent in the current state. Frozen while queued.
    pub(crate) elapsed: u32,
    /// Minutes the current state lasts.
    pub(crate) required: u32,
    /// Station whose queue this truck is in (Queued or Unloading only).
    pub(crate) station_id: Option<usize>,
    pub(crate) deliveries: u32,
    pub(crate) queued_time: u32,
}

impl Truck {
    /// New truck, empty at a mining site and starting to load.
    pub fn new(id: usize, rng: &mut impl Rng) -> Self {
        Self {
            id,
            state: TruckState::Loading,
            elapsed: 0,
            required: TruckState::Loading.entry_duration().resolve(rng),
            station_id: None,
            deliveries: 0,
            queued_time: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> TruckState {
        self.state
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn station_id(&self) -> Option<usize> {
        self.station_id
    }

    /// Completed load-to-unload cycles.
    pub fn deliveries(&self) -> u32 {
        self.deliveries
    }

    /// Total minutes spent waiting in a station queue.
    pub fn queued_time(&self) -> u32 {
        self.queued_time
    }

    pub fn is_unloading(&self) -> bool {
        self.state == TruckState::Unloading
    }

    /// Queued but not yet placed in any station's line.
    pub fn needs_station_assignment(&self) -> bool {
        self.state == TruckState::Queued && self.station_id.is_none()
    }

    /// Record the station whose queue this truck just joined.
    pub fn join_station(&mut self, station_id: usize) {
        self.station_id = Some(station_id);
    }

    /// Called by the owning station when this truck reaches the head of its
    /// queue. Timing was primed on entering `Queued` and is left untouched.
    pub fn begin_unloading(&mut self) {
        self.state = TruckState::Unloading;
    }

    /// Process one minute.
    pub fn advance_one_minute(&mut self, rng: &mut impl Rng) {
        if self.state == TruckState::Queued {
            self.queued_time += 1;
            return;
        }

        self.elapsed += 1;
        if self.elapsed == self.required {
            self.complete_state(rng);
        }
    }

    fn complete_state(&mut self, rng: &mut impl Rng) {
        match self.state {
            TruckState::Queued => panic!(
                "truck {} finished a timed countdown while queued; only its station may start the unload",
                self.id
            ),
            TruckState::Unloading => {
                self.station_id = None;
                self.deliveries += 1;
            }
            TruckState::Loading | TruckState::SiteToStation | TruckState::StationToSite => {}
        }

        let next = self.state.next();
        log::trace!("truck {}: {} -> {}", self.id, self.state, next);
        self.state = next;
        self.elapsed = 0;
        self.required = next.entry_duration().resolve(rng);
    }
}

impl fmt::Display for Truck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Truck {}: {} {}/{}",
            self.id, self.state, self.elapsed, self.required
        )
    }
}
