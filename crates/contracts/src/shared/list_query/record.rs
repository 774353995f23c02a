//! Трейты записей, которые умеет показывать страница списка
use super::filter::UndatedPolicy;
use super::text::{contains_term, normalize_term};
use crate::domain::common::Identified;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым работает свободный поиск.
    /// Отсутствующие значения передаются пустой строкой или пропускаются.
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches_normalized(&normalize_term(filter))
    }

    /// То же, что `matches_filter`, для уже нормализованного запроса
    fn matches_normalized(&self, term_lower: &str) -> bool {
        term_lower.is_empty()
            || self
                .search_fields()
                .into_iter()
                .any(|field| contains_term(field, term_lower))
    }
}

/// Записи с фильтрами колонок и датой для фильтра по периоду
pub trait Filterable: Searchable {
    /// Набор фильтров колонок; `Default` означает все фильтры «ทั้งหมด»
    type Columns: Clone + Default + PartialEq + Debug + Send + Sync + 'static;

    /// Попадают ли записи без даты в активный диапазон дат
    const UNDATED: UndatedPolicy = UndatedPolicy::Exclude;

    fn matches_columns(&self, columns: &Self::Columns) -> bool;

    /// Дата записи, по которой работает фильтр периода
    fn list_date(&self) -> Option<&str>;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Закрытый перечень колонок сортировки
    type SortKey: Copy + Eq + Debug + Send + Sync + 'static;

    /// Сравнивает два объекта по указанному полю (по возрастанию)
    fn compare_by_field(&self, other: &Self, key: Self::SortKey) -> Ordering;

    /// Порядок по умолчанию, когда сортировка не выбрана
    fn default_order(&self, other: &Self) -> Ordering;
}

/// Запись, пригодная для страницы списка
pub trait Listable: Identified + Filterable + Sortable + Clone {}

impl<T: Identified + Filterable + Sortable + Clone> Listable for T {}
