//! Readiness and liveness probes for the user records service.
//!
//! The process moves through three phases: `Starting` until the listener is
//! bound with a table adapter in place, `Serving` while it accepts user record
//! traffic, and `Draining` once the server has stopped. Readiness holds only
//! while serving; liveness fails only once draining.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use tracing::info;

/// Lifecycle phase reported by the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServicePhase {
    /// Table adapter or listener not ready yet.
    Starting,
    /// Accepting user record requests.
    Serving,
    /// Server stopped; the process is about to exit.
    Draining,
}

impl ServicePhase {
    const fn as_u8(self) -> u8 {
        match self {
            Self::Starting => 0,
            Self::Serving => 1,
            Self::Draining => 2,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Shared lifecycle phase read by the probe handlers.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(ServicePhase::Starting.as_u8()),
        }
    }
}

impl HealthState {
    /// Create a state in the `Starting` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> ServicePhase {
        ServicePhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Enter `Serving`. Has no effect once draining.
    pub fn mark_serving(&self) {
        let swapped = self.phase.compare_exchange(
            ServicePhase::Starting.as_u8(),
            ServicePhase::Serving.as_u8(),
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        if swapped.is_ok() {
            info!("user records service ready");
        }
    }

    /// Enter `Draining`; terminal.
    pub fn mark_draining(&self) {
        self.phase
            .store(ServicePhase::Draining.as_u8(), Ordering::Release);
        info!("user records service draining");
    }
}

#[derive(Serialize)]
struct ProbeBody {
    phase: ServicePhase,
}

fn probe_response(ok: bool, phase: ServicePhase) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ProbeBody { phase })
}

/// 200 while serving user record traffic, 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving user record requests"),
        (status = 503, description = "Starting or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    probe_response(phase == ServicePhase::Serving, phase)
}

/// 200 until the server starts draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is up"),
        (status = 503, description = "Draining")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let phase = state.phase();
    probe_response(phase != ServicePhase::Draining, phase)
}
