//! Состояние сортировки и компараторы
use super::record::Sortable;
use crate::shared::date_utils::parse_timestamp;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Направление сортировки с тремя состояниями
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Следующее состояние при повторном клике: нет → ▲ → ▼ → нет
    pub fn next(self) -> Self {
        match self {
            SortDirection::Unsorted => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
        }
    }
}

/// Активная колонка сортировки и направление
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K> Default for SortState<K> {
    fn default() -> Self {
        Self {
            key: None,
            direction: SortDirection::Unsorted,
        }
    }
}

impl<K: Copy + Eq> SortState<K> {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn ascending(key: K) -> Self {
        Self {
            key: Some(key),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: K) -> Self {
        Self {
            key: Some(key),
            direction: SortDirection::Descending,
        }
    }

    /// Колонка, по которой реально идёт сортировка
    pub fn active_key(&self) -> Option<K> {
        match self.direction {
            SortDirection::Unsorted => None,
            _ => self.key,
        }
    }

    /// Направление для указанной колонки (для индикатора в заголовке)
    pub fn direction_for(&self, key: K) -> SortDirection {
        if self.active_key() == Some(key) {
            self.direction
        } else {
            SortDirection::Unsorted
        }
    }

    /// Клик по заголовку колонки.
    ///
    /// Та же колонка проходит цикл нет → ▲ → ▼ → нет,
    /// другая колонка всегда начинает с ▲.
    pub fn toggle(&mut self, key: K) {
        if self.key == Some(key) {
            self.direction = self.direction.next();
        } else {
            self.key = Some(key);
            self.direction = SortDirection::Ascending;
        }
        if self.direction == SortDirection::Unsorted {
            self.key = None;
        }
    }

    pub fn toggled(mut self, key: K) -> Self {
        self.toggle(key);
        self
    }
}

/// Сравнение двух записей по состоянию сортировки
pub fn compare_records<T: Sortable>(a: &T, b: &T, sort: &SortState<T::SortKey>) -> Ordering {
    match (sort.key, sort.direction) {
        (Some(key), SortDirection::Ascending) => a.compare_by_field(b, key),
        (Some(key), SortDirection::Descending) => a.compare_by_field(b, key).reverse(),
        _ => a.default_order(b),
    }
}

/// Сортирует список по состоянию сортировки.
///
/// Сортировка устойчивая в обоих направлениях: равные записи
/// сохраняют исходный взаимный порядок.
pub fn sort_records<T: Sortable>(items: &mut [T], sort: &SortState<T::SortKey>) {
    items.sort_by(|a, b| compare_records(a, b, sort));
}

/// Числовое сравнение: -0.0 и 0.0 равны, NaN не ломает сортировку
pub fn compare_number(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Хронологическое сравнение ISO-дат как отметок времени.
///
/// Смещения часового пояса учитываются. Отсутствующие и
/// нераспознанные даты идут первыми.
pub fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.and_then(parse_timestamp);
    let b = b.and_then(parse_timestamp);
    a.cmp(&b)
}
