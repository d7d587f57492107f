//! The backend contract the rest of the workspace depends on.

use std::thread;

use foodshare_model::{
    ComunaCoordinates, ComunaImageCount, DayCount, Event, EventPage, EventSubmission,
    FoodTypeCount, MonthDaypartCounts, ReferenceData, RegionsAndComunas, SubmissionOutcome,
};
use tracing::info;

use crate::error::Result;

/// Operations offered by the event backend.
///
/// [`crate::HttpApi`] is the production implementation; tests provide
/// in-memory ones.
pub trait EventApi: Sync {
    fn regions_and_comunas(&self) -> Result<RegionsAndComunas>;

    fn food_types(&self) -> Result<Vec<String>>;

    fn social_networks(&self) -> Result<Vec<String>>;

    /// A page of events, newest first, plus the total count.
    fn events(&self, limit: Option<u64>, offset: u64) -> Result<EventPage>;

    /// A single event, `None` when the id is unknown.
    fn event(&self, id: u64) -> Result<Option<Event>>;

    fn image_count_per_comuna(&self) -> Result<Vec<ComunaImageCount>>;

    fn events_of_comuna(&self, comuna: &str) -> Result<Vec<Event>>;

    fn events_per_day(&self) -> Result<Vec<DayCount>>;

    fn events_per_food_type(&self) -> Result<Vec<FoodTypeCount>>;

    fn events_by_month_and_daypart(&self) -> Result<MonthDaypartCounts>;

    /// Coordinates of every comuna, used to place map markers.
    fn comuna_coordinates(&self) -> Result<Vec<ComunaCoordinates>>;

    /// Send a submission to the registration endpoint.
    fn register(&self, submission: &EventSubmission) -> Result<SubmissionOutcome>;
}

/// Fetch the three reference lists together and combine them.
///
/// The requests run on scoped threads; the first failure is returned.
pub fn fetch_reference_data<A>(api: &A) -> Result<ReferenceData>
where
    A: EventApi + ?Sized,
{
    let (locations, food_types, social_networks) = thread::scope(|scope| {
        let locations = scope.spawn(|| api.regions_and_comunas());
        let food_types = scope.spawn(|| api.food_types());
        let social_networks = api.social_networks();
        (join_scoped(locations), join_scoped(food_types), social_networks)
    });
    let reference = ReferenceData::new(locations?, food_types?, social_networks?);
    info!(
        regions = reference.regions.len(),
        food_types = reference.food_types.len(),
        social_networks = reference.social_networks.len(),
        "reference data loaded"
    );
    Ok(reference)
}

/// Wait for a scoped fetch, re-raising its panic on the calling thread.
pub fn join_scoped<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}
