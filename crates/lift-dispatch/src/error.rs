use lift_core::{ElevatorId, Floor, LiftError, ListenerId, TravelDirection};
use lift_route::RouteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    // ── Configuration ─────────────────────────────────────────────────────
    #[error(transparent)]
    Config(#[from] LiftError),

    #[error("invalid elevator range: min floor {min_floor} (must be >= 1), {floor_count} floors (must be >= 2)")]
    InvalidRange {
        min_floor:   Floor,
        floor_count: u32,
    },

    #[error("listener ids exhausted after {0} registrations")]
    TooManyListeners(usize),

    #[error("start floor {start} is outside [{min}, {max}]")]
    StartOutOfRange {
        start: Floor,
        min:   Floor,
        max:   Floor,
    },

    // ── Invalid requests ──────────────────────────────────────────────────
    #[error("no elevators registered")]
    NoElevators,

    #[error("cannot travel {direction} from floor {floor}")]
    ImpossibleDirection {
        floor:     Floor,
        direction: TravelDirection,
    },

    #[error("no elevator serves floor {floor}")]
    NoCapableElevator {
        floor: Floor,
    },

    #[error("unknown elevator {0}")]
    UnknownElevator(ElevatorId),

    #[error("{listener} is not waiting where {elevator} stands")]
    NotWaiting {
        listener: ListenerId,
        elevator: ElevatorId,
    },

    #[error("{listener} is not aboard {elevator}")]
    NotAboard {
        listener: ListenerId,
        elevator: ElevatorId,
    },

    #[error("route error: {0}")]
    Route(#[from] RouteError),

    // ── Driver ────────────────────────────────────────────────────────────
    #[error("system is not running; call ready() first")]
    NotReady,

    #[error("system is already running")]
    AlreadyRunning,

    #[error("work still pending after {0} ticks")]
    StepLimit(u64),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
