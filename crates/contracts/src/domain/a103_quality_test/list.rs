use super::aggregate::{FuelType, QualityTest, TestResult};
use crate::shared::list_query::{
    compare_dates, compare_number, compare_text, Filter, Filterable, Searchable, Sortable,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualitySortKey {
    Station,
    FuelType,
    Result,
    Density,
    TestedAt,
    Inspector,
}

impl QualitySortKey {
    pub fn all() -> &'static [QualitySortKey] {
        &[
            QualitySortKey::Station,
            QualitySortKey::FuelType,
            QualitySortKey::Result,
            QualitySortKey::Density,
            QualitySortKey::TestedAt,
            QualitySortKey::Inspector,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualitySortKey::Station => "สาขา",
            QualitySortKey::FuelType => "ชนิดน้ำมัน",
            QualitySortKey::Result => "ผลการทดสอบ",
            QualitySortKey::Density => "ความหนาแน่น",
            QualitySortKey::TestedAt => "วันที่ทดสอบ",
            QualitySortKey::Inspector => "ผู้ตรวจสอบ",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityColumns {
    pub station: Filter<String>,
    pub fuel_type: Filter<FuelType>,
    pub result: Filter<TestResult>,
}

impl Searchable for QualityTest {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.station, self.fuel_type.display_name(), &self.inspector]
    }
}

impl Filterable for QualityTest {
    type Columns = QualityColumns;

    fn matches_columns(&self, columns: &QualityColumns) -> bool {
        columns.station.matches(&self.station)
            && columns.fuel_type.matches(&self.fuel_type)
            && columns.result.matches(&self.result)
    }

    fn list_date(&self) -> Option<&str> {
        self.tested_at.as_deref()
    }
}

impl Sortable for QualityTest {
    type SortKey = QualitySortKey;

    fn compare_by_field(&self, other: &Self, key: QualitySortKey) -> Ordering {
        match key {
            QualitySortKey::Station => compare_text(&self.station, &other.station),
            QualitySortKey::FuelType => {
                compare_text(self.fuel_type.display_name(), other.fuel_type.display_name())
            }
            QualitySortKey::Result => self.result.rank().cmp(&other.result.rank()),
            // без замера в начале
            QualitySortKey::Density => match (self.density, other.density) {
                (Some(a), Some(b)) => compare_number(a, b),
                (a, b) => a.is_some().cmp(&b.is_some()),
            },
            QualitySortKey::TestedAt => {
                compare_dates(self.tested_at.as_deref(), other.tested_at.as_deref())
            }
            QualitySortKey::Inspector => compare_text(&self.inspector, &other.inspector),
        }
    }

    /// Станция, затем последние проверки
    fn default_order(&self, other: &Self) -> Ordering {
        compare_text(&self.station, &other.station)
            .then_with(|| compare_dates(other.tested_at.as_deref(), self.tested_at.as_deref()))
    }
}
