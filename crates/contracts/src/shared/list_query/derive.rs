//! Вывод отображаемого списка: источник → фильтр → сортировка
use super::filter::FilterState;
use super::record::{Filterable, Sortable};
use super::sort::{sort_records, SortState};
use super::text::normalize_term;

/// Должна ли запись попасть в отображаемый список.
///
/// Запись проходит, если выполнены все условия сразу: поиск,
/// каждый фильтр колонки и диапазон дат.
pub fn includes<T: Filterable>(record: &T, filter: &FilterState<T::Columns>) -> bool {
    includes_normalized(record, &normalize_term(&filter.search), filter)
}

fn includes_normalized<T: Filterable>(
    record: &T,
    term_lower: &str,
    filter: &FilterState<T::Columns>,
) -> bool {
    record.matches_normalized(term_lower)
        && record.matches_columns(&filter.columns)
        && filter.date_range.contains(record.list_date(), T::UNDATED)
}

/// Фильтрует список, не изменяя исходные записи
pub fn filter_records<T: Filterable + Clone>(records: &[T], filter: &FilterState<T::Columns>) -> Vec<T> {
    let term_lower = normalize_term(&filter.search);
    records
        .iter()
        .filter(|record| includes_normalized(*record, &term_lower, filter))
        .cloned()
        .collect()
}

/// Отфильтрованный и отсортированный список для отображения.
///
/// Чистая функция: одинаковые входные данные дают тот же результат
/// в том же порядке, `records` не изменяется.
pub fn derive_rows<T>(records: &[T], filter: &FilterState<T::Columns>, sort: &SortState<T::SortKey>) -> Vec<T>
where
    T: Filterable + Sortable + Clone,
{
    let mut rows = filter_records(records, filter);
    sort_records(&mut rows, sort);
    log::debug!(
        "derived {} of {} rows (sort: {:?} {:?})",
        rows.len(),
        records.len(),
        sort.key,
        sort.direction
    );
    rows
}
