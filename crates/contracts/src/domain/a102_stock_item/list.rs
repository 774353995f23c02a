use super::aggregate::StockItem;
use crate::shared::list_query::{
    compare_dates, compare_number, compare_text, Condition, Filter, Filterable, Searchable,
    Sortable, UndatedPolicy,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockSortKey {
    ProductCode,
    ProductName,
    Warehouse,
    Quantity,
    UpdatedAt,
}

impl StockSortKey {
    pub fn all() -> &'static [StockSortKey] {
        &[
            StockSortKey::ProductCode,
            StockSortKey::ProductName,
            StockSortKey::Warehouse,
            StockSortKey::Quantity,
            StockSortKey::UpdatedAt,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockSortKey::ProductCode => "รหัสสินค้า",
            StockSortKey::ProductName => "ชื่อสินค้า",
            StockSortKey::Warehouse => "คลัง",
            StockSortKey::Quantity => "คงเหลือ",
            StockSortKey::UpdatedAt => "ปรับปรุงล่าสุด",
        }
    }
}

fn positive_quantity(quantity: &f64) -> bool {
    *quantity > 0.0
}

fn empty_quantity(quantity: &f64) -> bool {
    *quantity <= 0.0
}

pub const IN_STOCK: Condition<f64> = Condition::new("มีสินค้า", positive_quantity);
pub const OUT_OF_STOCK: Condition<f64> = Condition::new("สินค้าหมด", empty_quantity);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockColumns {
    pub warehouse: Filter<String>,
    pub unit: Filter<String>,
    pub quantity: Filter<f64>,
}

impl Searchable for StockItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.product_code, &self.product_name, &self.warehouse]
    }
}

impl Filterable for StockItem {
    type Columns = StockColumns;

    // Строки первичной загрузки без даты изменения остаются в списке при фильтре по периоду
    const UNDATED: UndatedPolicy = UndatedPolicy::Include;

    fn matches_columns(&self, columns: &StockColumns) -> bool {
        columns.warehouse.matches(&self.warehouse)
            && columns.unit.matches(&self.unit)
            && columns.quantity.matches(&self.quantity)
    }

    fn list_date(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }
}

impl Sortable for StockItem {
    type SortKey = StockSortKey;

    fn compare_by_field(&self, other: &Self, key: StockSortKey) -> Ordering {
        match key {
            StockSortKey::ProductCode => compare_text(&self.product_code, &other.product_code),
            StockSortKey::ProductName => compare_text(&self.product_name, &other.product_name),
            StockSortKey::Warehouse => compare_text(&self.warehouse, &other.warehouse),
            StockSortKey::Quantity => compare_number(self.quantity, other.quantity),
            StockSortKey::UpdatedAt => {
                compare_dates(self.updated_at.as_deref(), other.updated_at.as_deref())
            }
        }
    }

    /// Склад, затем наименование
    fn default_order(&self, other: &Self) -> Ordering {
        compare_text(&self.warehouse, &other.warehouse)
            .then_with(|| compare_text(&self.product_name, &other.product_name))
    }
}
