use super::aggregate::{PurchaseEntry, VatType};
use crate::shared::list_query::{
    compare_dates, compare_number, compare_opt_text, compare_text, has_text, Condition, Filter,
    Filterable, Searchable, Sortable,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseSortKey {
    DocNo,
    DocDate,
    Supplier,
    Amount,
    VatAmount,
    Note,
}

impl PurchaseSortKey {
    pub fn all() -> &'static [PurchaseSortKey] {
        &[
            PurchaseSortKey::DocNo,
            PurchaseSortKey::DocDate,
            PurchaseSortKey::Supplier,
            PurchaseSortKey::Amount,
            PurchaseSortKey::VatAmount,
            PurchaseSortKey::Note,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseSortKey::DocNo => "เลขที่เอกสาร",
            PurchaseSortKey::DocDate => "วันที่",
            PurchaseSortKey::Supplier => "ผู้จำหน่าย",
            PurchaseSortKey::Amount => "มูลค่า",
            PurchaseSortKey::VatAmount => "ภาษีมูลค่าเพิ่ม",
            PurchaseSortKey::Note => "หมายเหตุ",
        }
    }
}

fn has_amount(amount: &f64) -> bool {
    *amount > 0.0
}

fn no_amount(amount: &f64) -> bool {
    *amount <= 0.0
}

fn entry_has_note(note: &Option<String>) -> bool {
    has_text(note)
}

fn entry_without_note(note: &Option<String>) -> bool {
    !has_text(note)
}

pub const HAS_AMOUNT: Condition<f64> = Condition::new("มียอด", has_amount);
pub const NO_AMOUNT: Condition<f64> = Condition::new("ไม่มียอด", no_amount);
pub const WITH_NOTE: Condition<Option<String>> = Condition::new("มีหมายเหตุ", entry_has_note);
pub const WITHOUT_NOTE: Condition<Option<String>> =
    Condition::new("ไม่มีหมายเหตุ", entry_without_note);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseColumns {
    pub supplier: Filter<String>,
    pub vat_type: Filter<VatType>,
    pub amount: Filter<f64>,
    pub note: Filter<Option<String>>,
}

impl Searchable for PurchaseEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.doc_no,
            &self.supplier,
            &self.tax_id,
            self.note.as_deref().unwrap_or(""),
        ]
    }
}

impl Filterable for PurchaseEntry {
    type Columns = PurchaseColumns;

    fn matches_columns(&self, columns: &PurchaseColumns) -> bool {
        columns.supplier.matches(&self.supplier)
            && columns.vat_type.matches(&self.vat_type)
            && columns.amount.matches(&self.amount)
            && columns.note.matches(&self.note)
    }

    fn list_date(&self) -> Option<&str> {
        self.doc_date.as_deref()
    }
}

impl Sortable for PurchaseEntry {
    type SortKey = PurchaseSortKey;

    fn compare_by_field(&self, other: &Self, key: PurchaseSortKey) -> Ordering {
        match key {
            PurchaseSortKey::DocNo => compare_text(&self.doc_no, &other.doc_no),
            PurchaseSortKey::DocDate => {
                compare_dates(self.doc_date.as_deref(), other.doc_date.as_deref())
            }
            PurchaseSortKey::Supplier => compare_text(&self.supplier, &other.supplier),
            PurchaseSortKey::Amount => compare_number(self.amount, other.amount),
            PurchaseSortKey::VatAmount => compare_number(self.vat_amount, other.vat_amount),
            PurchaseSortKey::Note => compare_opt_text(self.note.as_deref(), other.note.as_deref()),
        }
    }

    /// Хронологический порядок книги
    fn default_order(&self, other: &Self) -> Ordering {
        compare_dates(self.doc_date.as_deref(), other.doc_date.as_deref())
            .then_with(|| compare_text(&self.doc_no, &other.doc_no))
    }
}
