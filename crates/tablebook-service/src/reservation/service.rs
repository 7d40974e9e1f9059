//! Reservation admission orchestrator.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tablebook_core::config::BookingConfig;
use tablebook_core::error::AppError;
use tablebook_core::result::AppResult;
use tablebook_core::traits::{Clock, Repository};
use tablebook_core::types::{BookingDate, ReservationId};
use tablebook_database::ReservationStore;
use tablebook_entity::{NewReservation, Reservation, ReservationPatch};

use crate::admission::{AdmissionLocks, CapacityAccountant, DateValidator};

/// Lock entries kept before idle ones are pruned.
const LOCK_PRUNE_THRESHOLD: usize = 64;

/// Request to book a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    /// Customer name.
    pub customer: String,
    /// Requested date as `DD/MM/YYYY`.
    pub date: String,
    /// Number of people.
    pub party_size: u32,
}

/// Request to change a booking. `None` keeps the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReservationRequest {
    /// New customer name.
    pub customer: Option<String>,
    /// New date as `DD/MM/YYYY`.
    pub date: Option<String>,
    /// New number of people.
    pub party_size: Option<u32>,
}

/// Seats still free on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// The date asked about.
    pub date: BookingDate,
    /// Daily capacity minus current occupancy.
    pub available_slots: u32,
}

/// Admits, amends, and cancels reservations.
///
/// A create holds the admission lock of its date from the occupancy read
/// until the store write. An update holds the locks of both the stored
/// and the requested date, so it is serialized against creates on either
/// day and against other updates of the same reservation.
#[derive(Clone)]
pub struct ReservationService {
    /// Persistence collaborator.
    store: Arc<dyn ReservationStore>,
    /// Admission rules.
    config: Arc<BookingConfig>,
    /// Business-day rules.
    validator: DateValidator,
    /// Occupancy per date.
    capacity: CapacityAccountant,
    /// Per-date serialization.
    locks: AdmissionLocks,
}

impl std::fmt::Debug for ReservationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReservationService")
            .field("config", &self.config)
            .field("locked_dates", &self.locks.len())
            .finish_non_exhaustive()
    }
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        store: Arc<dyn ReservationStore>,
        config: BookingConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let config = Arc::new(config);
        let validator = DateValidator::new(Arc::clone(&config), clock);
        let capacity = CapacityAccountant::new(Arc::clone(&store), config.daily_capacity);
        Self {
            store,
            config,
            validator,
            capacity,
            locks: AdmissionLocks::new(),
        }
    }

    /// The admission rules in force.
    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Books a new reservation.
    pub async fn create(&self, req: CreateReservationRequest) -> AppResult<Reservation> {
        self.admit(req).await.inspect_err(|e| {
            warn!(kind = %e.kind, error = %e.message, "Reservation rejected");
        })
    }

    /// Fetches a reservation without re-validating it.
    pub async fn get(&self, id: &ReservationId) -> AppResult<Reservation> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists every reservation. Requires the administrative code.
    pub async fn list(&self, admin_code: &str) -> AppResult<Vec<Reservation>> {
        if admin_code != self.config.admin_code {
            warn!("Reservation listing refused: wrong admin code");
            return Err(AppError::unauthorized("Unauthorized access."));
        }
        self.store.find_all().await
    }

    /// Cancels a reservation.
    pub async fn delete(&self, id: &ReservationId) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        warn!(reservation_id = %id, "Reservation cancelled");
        Ok(())
    }

    /// Changes customer, date, and/or party size of a reservation.
    ///
    /// The reservation's own seats never count against the requested
    /// date, whether or not it moves.
    pub async fn update(
        &self,
        id: &ReservationId,
        req: UpdateReservationRequest,
    ) -> AppResult<Reservation> {
        self.amend(id, req).await.inspect_err(|e| {
            warn!(reservation_id = %id, kind = %e.kind, error = %e.message, "Reservation change rejected");
        })
    }

    /// Seats still free on a date, using the same date rules as booking.
    pub async fn availability(&self, raw_date: &str) -> AppResult<Availability> {
        let date = self.validator.validate(raw_date)?;
        let occupancy = self.capacity.occupancy_for_date(date).await?;
        Ok(Availability {
            date,
            available_slots: self.capacity.remaining(occupancy),
        })
    }

    async fn admit(&self, req: CreateReservationRequest) -> AppResult<Reservation> {
        self.check_party_size(req.party_size)?;
        check_customer(&req.customer)?;
        let date = self.validator.validate(&req.date)?;

        let guard = self.locks.acquire(date.as_naive()).await;
        let occupancy = self.capacity.occupancy_for_date(date).await?;
        if !self.capacity.fits(occupancy, req.party_size) {
            return Err(AppError::daily_capacity_exceeded(
                self.capacity.remaining(occupancy),
            ));
        }

        let reservation = Reservation::admit(
            ReservationId::generate(self.config.id_length),
            NewReservation {
                customer: req.customer,
                date,
                party_size: req.party_size,
            },
        );
        let reservation = self.store.create(&reservation).await?;
        drop(guard);

        info!(
            reservation_id = %reservation.id,
            customer = %reservation.customer,
            date = %reservation.date,
            party_size = reservation.party_size,
            remaining = self.capacity.remaining(occupancy + reservation.party_size),
            "Reservation created"
        );

        self.prune_locks();
        Ok(reservation)
    }

    async fn amend(
        &self,
        id: &ReservationId,
        req: UpdateReservationRequest,
    ) -> AppResult<Reservation> {
        let existing = self.get(id).await?;

        self.check_party_size(req.party_size.unwrap_or(existing.party_size))?;
        if let Some(customer) = req.customer.as_deref() {
            check_customer(customer)?;
        }
        let date = match req.date.as_deref() {
            Some(raw) => self.validator.validate(raw)?,
            None => {
                self.validator.check(existing.date)?;
                existing.date
            }
        };

        let guards = self
            .locks
            .acquire_all([existing.date.as_naive(), date.as_naive()])
            .await;

        // The stored date picked the locks; if another update moved the
        // reservation meanwhile, this request no longer holds its day.
        let mut current = self.get(id).await?;
        if current.date != existing.date {
            return Err(AppError::conflict(
                "Reservation was changed by another request, please retry",
            ));
        }
        let party_size = req.party_size.unwrap_or(current.party_size);
        self.check_party_size(party_size)?;

        let occupancy = self
            .capacity
            .occupancy_excluding(date, Some(&current.id))
            .await?;
        if !self.capacity.fits(occupancy, party_size) {
            return Err(AppError::daily_capacity_exceeded(
                self.capacity.remaining(occupancy),
            ));
        }

        current.apply(ReservationPatch {
            customer: req.customer,
            date: Some(date),
            party_size: Some(party_size),
        });
        let updated = self.store.update(&current).await?;
        drop(guards);

        info!(
            reservation_id = %updated.id,
            customer = %updated.customer,
            date = %updated.date,
            party_size = updated.party_size,
            remaining = self.capacity.remaining(occupancy + party_size),
            "Reservation updated"
        );

        self.prune_locks();
        Ok(updated)
    }

    fn check_party_size(&self, party_size: u32) -> AppResult<()> {
        if party_size == 0 {
            return Err(AppError::validation("Party size must be at least 1"));
        }
        if party_size > self.config.max_party_size {
            return Err(AppError::party_size_too_large(self.config.max_party_size));
        }
        Ok(())
    }

    fn prune_locks(&self) {
        if self.locks.len() > LOCK_PRUNE_THRESHOLD {
            self.locks.prune_idle();
        }
    }
}

/// Rejects names that are empty once whitespace is ignored. Accepted names
/// are stored as sent.
fn check_customer(raw: &str) -> AppResult<()> {
    if raw.trim().is_empty() {
        return Err(AppError::validation("Customer name is required"));
    }
    Ok(())
}

fn not_found(id: &ReservationId) -> AppError {
    AppError::not_found(format!("Reservation {id} not found"))
}
