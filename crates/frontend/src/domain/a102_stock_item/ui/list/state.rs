use crate::shared::list_controller::ListController;
use crate::shared::record_store::RecordStore;
use chrono::{NaiveDateTime, Utc};
use contracts::domain::a102_stock_item::{StockItem, IN_STOCK, OUT_OF_STOCK};
use contracts::shared::config::ListSettings;
use contracts::shared::error::RecordSourceError;
use contracts::shared::list_query::{compare_text, condition_options, Filter, SortState};

pub type StockListState = ListController<StockItem>;

pub fn create_state(store: RecordStore<StockItem>, settings: &ListSettings) -> StockListState {
    ListController::new(store, settings, SortState::unsorted())
}

pub fn warehouse_options(state: &StockListState) -> Vec<Filter<String>> {
    state.column_options(|s| Some(s.warehouse.clone()), |a, b| compare_text(a, b))
}

pub fn unit_options(state: &StockListState) -> Vec<Filter<String>> {
    state.column_options(|s| Some(s.unit.clone()), |a, b| compare_text(a, b))
}

pub fn quantity_options() -> Vec<Filter<f64>> {
    condition_options(&[IN_STOCK, OUT_OF_STOCK])
}

impl RecordStore<StockItem> {
    /// Приход (delta > 0) или списание (delta < 0)
    pub fn adjust_quantity(&self, id: i64, delta: f64) -> Result<(), RecordSourceError> {
        self.adjust_quantity_at(id, delta, Utc::now().naive_utc())
    }

    pub fn adjust_quantity_at(
        &self,
        id: i64,
        delta: f64,
        at: NaiveDateTime,
    ) -> Result<(), RecordSourceError> {
        self.update(&id, |item| item.adjust_quantity(delta, at))
    }
}
