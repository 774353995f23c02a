use crate::shared::list_controller::ListController;
use crate::shared::record_store::RecordStore;
use chrono::{NaiveDate, Utc};
use contracts::domain::a104_purchase_book::{
    PurchaseEntry, VatType, HAS_AMOUNT, NO_AMOUNT, WITHOUT_NOTE, WITH_NOTE,
};
use contracts::shared::config::ListSettings;
use contracts::shared::date_utils::month_bounds;
use contracts::shared::error::RecordSourceError;
use contracts::shared::list_query::{
    compare_text, condition_options, DateRange, Filter, FilterState, SortState,
};

pub type PurchaseListState = ListController<PurchaseEntry>;

/// Книга покупок открывается на текущем месяце
pub fn create_state(store: RecordStore<PurchaseEntry>, settings: &ListSettings) -> PurchaseListState {
    create_state_for(store, settings, Utc::now().date_naive())
}

pub fn create_state_for(
    store: RecordStore<PurchaseEntry>,
    settings: &ListSettings,
    today: NaiveDate,
) -> PurchaseListState {
    let (from, to) = month_bounds(today);
    let filter = FilterState {
        date_range: DateRange::new(Some(from), Some(to)),
        ..Default::default()
    };
    ListController::with_filter(store, settings, filter, SortState::unsorted())
}

pub fn supplier_options(state: &PurchaseListState) -> Vec<Filter<String>> {
    state.column_options(|e| Some(e.supplier.clone()), |a, b| compare_text(a, b))
}

pub fn vat_type_options() -> Vec<Filter<VatType>> {
    std::iter::once(Filter::All)
        .chain(VatType::all().into_iter().map(Filter::EqualTo))
        .collect()
}

pub fn amount_options() -> Vec<Filter<f64>> {
    condition_options(&[HAS_AMOUNT, NO_AMOUNT])
}

pub fn note_options() -> Vec<Filter<Option<String>>> {
    condition_options(&[WITH_NOTE, WITHOUT_NOTE])
}

impl RecordStore<PurchaseEntry> {
    pub fn set_note(&self, id: i64, note: &str) -> Result<(), RecordSourceError> {
        self.update(&id, |entry| entry.set_note(note))
    }
}
