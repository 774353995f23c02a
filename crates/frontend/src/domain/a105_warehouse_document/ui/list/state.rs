use crate::shared::list_controller::ListController;
use crate::shared::record_store::RecordStore;
use chrono::{NaiveDateTime, Utc};
use contracts::domain::a105_warehouse_document::{
    DocumentKind, DocumentStatus, WarehouseDocument,
};
use contracts::shared::config::ListSettings;
use contracts::shared::error::RecordSourceError;
use contracts::shared::list_query::{compare_text, Filter, SortState};
use uuid::Uuid;

pub type DocumentListState = ListController<WarehouseDocument>;

pub fn create_state(
    store: RecordStore<WarehouseDocument>,
    settings: &ListSettings,
) -> DocumentListState {
    ListController::new(store, settings, SortState::unsorted())
}

pub fn branch_options(state: &DocumentListState) -> Vec<Filter<String>> {
    state.column_options(|d| Some(d.branch.clone()), |a, b| compare_text(a, b))
}

pub fn kind_options() -> Vec<Filter<DocumentKind>> {
    std::iter::once(Filter::All)
        .chain(DocumentKind::all().into_iter().map(Filter::EqualTo))
        .collect()
}

pub fn status_options() -> Vec<Filter<DocumentStatus>> {
    std::iter::once(Filter::All)
        .chain(DocumentStatus::all().into_iter().map(Filter::EqualTo))
        .collect()
}

impl RecordStore<WarehouseDocument> {
    pub fn confirm_document(&self, id: Uuid, by: &str) -> Result<(), RecordSourceError> {
        self.confirm_document_at(id, by, Utc::now().naive_utc())
    }

    pub fn confirm_document_at(
        &self,
        id: Uuid,
        by: &str,
        at: NaiveDateTime,
    ) -> Result<(), RecordSourceError> {
        self.update(&id, |doc| doc.confirm(by, at))
    }
}
