//! Пункты выпадающих фильтров колонок
use super::filter::{Condition, Filter};
use std::cmp::Ordering;

/// Варианты фильтра колонки: «все», затем различные значения поля.
///
/// Строится по неотфильтрованному источнику, чтобы выбор в одной колонке
/// не сужал варианты остальных. Отсутствующие значения не попадают в список.
pub fn column_options<T, V, F, C>(records: &[T], field: F, cmp: C) -> Vec<Filter<V>>
where
    V: PartialEq,
    F: Fn(&T) -> Option<V>,
    C: Fn(&V, &V) -> Ordering,
{
    let mut values: Vec<V> = records.iter().filter_map(field).collect();
    values.sort_by(&cmp);
    values.dedup();

    std::iter::once(Filter::All)
        .chain(values.into_iter().map(Filter::EqualTo))
        .collect()
}

/// Варианты для колонки с производными условиями
/// (например, «есть примечание» / «нет примечания»)
pub fn condition_options<V>(conditions: &[Condition<V>]) -> Vec<Filter<V>> {
    std::iter::once(Filter::All)
        .chain(conditions.iter().copied().map(Filter::Predicate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::text::compare_text;

    fn is_empty(value: &String) -> bool {
        value.is_empty()
    }

    #[test]
    fn test_distinct_sorted_values() {
        let records = vec![
            ("b", Some("Station B")),
            ("a", Some("Station A")),
            ("c", None),
            ("d", Some("Station B")),
        ];
        let options = column_options(
            &records,
            |(_, station)| station.map(str::to_string),
            |a, b| compare_text(a, b),
        );

        assert_eq!(
            options,
            vec![
                Filter::All,
                Filter::EqualTo("Station A".to_string()),
                Filter::EqualTo("Station B".to_string()),
            ]
        );
    }

    #[test]
    fn test_condition_options() {
        let conditions = [Condition::new("empty", is_empty)];
        let options = condition_options(&conditions);
        assert_eq!(options.len(), 2);
        assert!(options[0].is_all());
        assert_eq!(options[1].label_with("all", |v: &String| v.clone()), "empty");
    }
}
