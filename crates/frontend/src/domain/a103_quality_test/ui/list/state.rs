use crate::shared::list_controller::ListController;
use crate::shared::record_store::RecordStore;
use contracts::domain::a103_quality_test::{FuelType, QualityTest, TestResult};
use contracts::shared::config::ListSettings;
use contracts::shared::error::RecordSourceError;
use contracts::shared::list_query::{compare_text, Filter, SortState};

pub type QualityListState = ListController<QualityTest>;

pub fn create_state(store: RecordStore<QualityTest>, settings: &ListSettings) -> QualityListState {
    ListController::new(store, settings, SortState::unsorted())
}

pub fn station_options(state: &QualityListState) -> Vec<Filter<String>> {
    state.column_options(|t| Some(t.station.clone()), |a, b| compare_text(a, b))
}

pub fn fuel_type_options() -> Vec<Filter<FuelType>> {
    std::iter::once(Filter::All)
        .chain(FuelType::all().into_iter().map(Filter::EqualTo))
        .collect()
}

pub fn result_options() -> Vec<Filter<TestResult>> {
    std::iter::once(Filter::All)
        .chain(TestResult::all().into_iter().map(Filter::EqualTo))
        .collect()
}

impl RecordStore<QualityTest> {
    pub fn record_result(
        &self,
        id: i64,
        result: TestResult,
        density: Option<f64>,
        tested_at: &str,
    ) -> Result<(), RecordSourceError> {
        self.update(&id, |test| test.record_result(result, density, tested_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a103_quality_test::QualityColumns;
    use contracts::shared::list_query::DateRange;
    use leptos::prelude::*;

    fn pending(id: i64, station: &str) -> QualityTest {
        QualityTest {
            id,
            station: station.into(),
            fuel_type: FuelType::Gasohol95,
            result: TestResult::Pending,
            density: None,
            tested_at: None,
            inspector: "นิดา".into(),
        }
    }

    #[test]
    fn test_recorded_result_enters_period_and_result_filter() {
        let owner = Owner::new();
        owner.set();

        let store = RecordStore::new(vec![pending(1, "สาขาบางนา"), pending(2, "สาขาขอนแก่น")]);
        let state = create_state(store, &ListSettings::default());
        state.set_date_range(DateRange::parse("2024-01-01", "2024-01-31"));
        state.update_columns(|cols: &mut QualityColumns| cols.result = Filter::EqualTo(TestResult::Passed));
        assert_eq!(state.row_count(), 0);

        state
            .store()
            .record_result(1, TestResult::Passed, Some(0.74), "2024-01-12T09:15:00")
            .unwrap();
        state.with_rows(|rows| assert_eq!(rows.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]));

        assert!(state
            .store()
            .record_result(2, TestResult::Failed, Some(2.0), "2024-01-12")
            .is_err());
        assert_eq!(state.store().find(&2), Some(pending(2, "สาขาขอนแก่น")));
    }

    #[test]
    fn test_options() {
        let owner = Owner::new();
        owner.set();

        let store = RecordStore::new(vec![pending(1, "สาขาบางนา"), pending(2, "สาขาบางนา")]);
        let state = create_state(store, &ListSettings::default());
        assert_eq!(station_options(&state).len(), 2);
        assert_eq!(fuel_type_options().len(), 6);
        assert_eq!(result_options()[0], Filter::All);
    }
}
