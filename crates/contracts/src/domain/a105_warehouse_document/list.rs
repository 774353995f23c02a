use super::aggregate::{DocumentKind, DocumentStatus, WarehouseDocument};
use crate::shared::list_query::{
    compare_dates, compare_text, Filter, Filterable, Searchable, Sortable, UndatedPolicy,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSortKey {
    DocNo,
    Branch,
    Kind,
    Status,
    ItemCount,
    CreatedAt,
}

impl DocumentSortKey {
    pub fn all() -> &'static [DocumentSortKey] {
        &[
            DocumentSortKey::DocNo,
            DocumentSortKey::Branch,
            DocumentSortKey::Kind,
            DocumentSortKey::Status,
            DocumentSortKey::ItemCount,
            DocumentSortKey::CreatedAt,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentSortKey::DocNo => "เลขที่เอกสาร",
            DocumentSortKey::Branch => "สาขา",
            DocumentSortKey::Kind => "ประเภท",
            DocumentSortKey::Status => "สถานะ",
            DocumentSortKey::ItemCount => "จำนวนรายการ",
            DocumentSortKey::CreatedAt => "วันที่สร้าง",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentColumns {
    pub branch: Filter<String>,
    pub kind: Filter<DocumentKind>,
    pub status: Filter<DocumentStatus>,
}

impl Searchable for WarehouseDocument {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.doc_no,
            &self.branch,
            self.confirmed_by.as_deref().unwrap_or(""),
        ]
    }
}

impl Filterable for WarehouseDocument {
    type Columns = DocumentColumns;

    const UNDATED: UndatedPolicy = UndatedPolicy::Include;

    fn matches_columns(&self, columns: &DocumentColumns) -> bool {
        columns.branch.matches(&self.branch)
            && columns.kind.matches(&self.kind)
            && columns.status.matches(&self.status)
    }

    fn list_date(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Sortable for WarehouseDocument {
    type SortKey = DocumentSortKey;

    fn compare_by_field(&self, other: &Self, key: DocumentSortKey) -> Ordering {
        match key {
            DocumentSortKey::DocNo => compare_text(&self.doc_no, &other.doc_no),
            DocumentSortKey::Branch => compare_text(&self.branch, &other.branch),
            DocumentSortKey::Kind => {
                compare_text(self.kind.display_name(), other.kind.display_name())
            }
            DocumentSortKey::Status => {
                (self.status == DocumentStatus::Confirmed).cmp(&(other.status == DocumentStatus::Confirmed))
            }
            DocumentSortKey::ItemCount => self.item_count.cmp(&other.item_count),
            DocumentSortKey::CreatedAt => {
                compare_dates(self.created_at.as_deref(), other.created_at.as_deref())
            }
        }
    }

    /// Сначала неподтверждённые, затем по номеру
    fn default_order(&self, other: &Self) -> Ordering {
        self.compare_by_field(other, DocumentSortKey::Status)
            .then_with(|| compare_text(&self.doc_no, &other.doc_no))
    }
}
