use crate::shared::list_controller::ListController;
use crate::shared::record_store::RecordStore;
use contracts::domain::a101_transport_trip::{Trip, TripStatus, WITHOUT_NOTE, WITH_NOTE};
use contracts::shared::config::ListSettings;
use contracts::shared::error::RecordSourceError;
use contracts::shared::list_query::{compare_text, condition_options, Filter, SortState};

pub type TripListState = ListController<Trip>;

/// Список рейсов открывается без выбранной колонки: свежие рейсы сверху
pub fn create_state(store: RecordStore<Trip>, settings: &ListSettings) -> TripListState {
    ListController::new(store, settings, SortState::unsorted())
}

pub fn status_options() -> Vec<Filter<TripStatus>> {
    std::iter::once(Filter::All)
        .chain(TripStatus::all().into_iter().map(Filter::EqualTo))
        .collect()
}

pub fn driver_options(state: &TripListState) -> Vec<Filter<String>> {
    state.column_options(|t| Some(t.driver.clone()), |a, b| compare_text(a, b))
}

pub fn vehicle_options(state: &TripListState) -> Vec<Filter<String>> {
    state.column_options(|t| Some(t.vehicle_plate.clone()), |a, b| compare_text(a, b))
}

pub fn note_options() -> Vec<Filter<Option<String>>> {
    condition_options(&[WITH_NOTE, WITHOUT_NOTE])
}

impl RecordStore<Trip> {
    /// Сохранить порядок объезда из панели маршрута
    pub fn save_route_order(&self, id: i64, stops: Vec<String>) -> Result<(), RecordSourceError> {
        self.update(&id, |trip| trip.save_route_order(stops))
    }

    pub fn set_trip_status(&self, id: i64, status: TripStatus) -> Result<(), RecordSourceError> {
        self.update(&id, |trip| trip.set_status(status))
    }
}
