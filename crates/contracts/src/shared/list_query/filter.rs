//! Состояние фильтров списка: поиск, фильтры колонок, диапазон дат
use crate::shared::date_utils::{end_of_day, format_date, parse_date, parse_datetime, start_of_day};
use chrono::NaiveDate;
use std::fmt;

/// Именованное производное условие над значением поля
/// (например, «есть примечание» / «нет примечания», «сумма > 0»).
///
/// Условия сравниваются по метке: в пределах одной колонки метки уникальны.
pub struct Condition<V> {
    label: &'static str,
    test: fn(&V) -> bool,
}

impl<V> Condition<V> {
    pub const fn new(label: &'static str, test: fn(&V) -> bool) -> Self {
        Self { label, test }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn test(&self, value: &V) -> bool {
        (self.test)(value)
    }
}

impl<V> Clone for Condition<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Condition<V> {}

impl<V> PartialEq for Condition<V> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl<V> Eq for Condition<V> {}

impl<V> fmt::Debug for Condition<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.label).finish()
    }
}

/// Фильтр одной колонки
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<V> {
    /// Без ограничения (в интерфейсе «ทั้งหมด»)
    All,
    /// Точное совпадение значения
    EqualTo(V),
    /// Производное условие
    Predicate(Condition<V>),
}

impl<V> Default for Filter<V> {
    fn default() -> Self {
        Filter::All
    }
}

impl<V> Filter<V> {
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Текст пункта выпадающего списка
    pub fn label_with(&self, all_label: &str, format_value: impl Fn(&V) -> String) -> String {
        match self {
            Filter::All => all_label.to_string(),
            Filter::EqualTo(value) => format_value(value),
            Filter::Predicate(condition) => condition.label().to_string(),
        }
    }
}

impl<V: PartialEq> Filter<V> {
    pub fn matches(&self, value: &V) -> bool {
        match self {
            Filter::All => true,
            Filter::EqualTo(expected) => value == expected,
            Filter::Predicate(condition) => condition.test(value),
        }
    }
}

/// Непустое значение необязательного текстового поля
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// Как учитывать записи без даты при активном диапазоне
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndatedPolicy {
    Exclude,
    Include,
}

/// Граница диапазона дат
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateBound {
    #[default]
    Unset,
    On(NaiveDate),
    /// Введённое значение не распознано; такой диапазон не пропускает ни одной записи
    Invalid(String),
}

impl DateBound {
    /// Пустой ввод означает отсутствие границы
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return DateBound::Unset;
        }
        match parse_date(input) {
            Some(date) => DateBound::On(date),
            None => {
                log::warn!("Unrecognized date bound: '{}'", input);
                DateBound::Invalid(input.to_string())
            }
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, DateBound::Unset)
    }
}

impl From<Option<NaiveDate>> for DateBound {
    fn from(date: Option<NaiveDate>) -> Self {
        date.map(DateBound::On).unwrap_or_default()
    }
}

/// Включительный диапазон дат `[from, to]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRange {
    pub from: DateBound,
    pub to: DateBound,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Диапазон из строк полей ввода (YYYY-MM-DD или DD.MM.YYYY)
    pub fn parse(from: &str, to: &str) -> Self {
        Self {
            from: DateBound::parse(from),
            to: DateBound::parse(to),
        }
    }

    pub fn is_set(&self) -> bool {
        self.from.is_set() || self.to.is_set()
    }

    /// Попадает ли дата записи в диапазон.
    ///
    /// `from` сравнивается с началом дня, `to` с концом дня.
    /// Нераспознанная дата записи в диапазон не попадает.
    pub fn contains(&self, record_date: Option<&str>, undated: UndatedPolicy) -> bool {
        if !self.is_set() {
            return true;
        }
        if matches!(self.from, DateBound::Invalid(_)) || matches!(self.to, DateBound::Invalid(_)) {
            return false;
        }

        let raw = record_date.map(str::trim).filter(|s| !s.is_empty());
        let Some(raw) = raw else {
            return undated == UndatedPolicy::Include;
        };
        let Some(timestamp) = parse_datetime(raw) else {
            return false;
        };

        if let DateBound::On(from) = self.from {
            if timestamp < start_of_day(from) {
                return false;
            }
        }
        if let DateBound::On(to) = self.to {
            if timestamp > end_of_day(to) {
                return false;
            }
        }
        true
    }

    /// Текст активного диапазона для панели фильтров
    pub fn display_text(&self) -> String {
        let show = |bound: &DateBound| match bound {
            DateBound::On(date) => Some(format_date(&date.format("%Y-%m-%d").to_string())),
            DateBound::Invalid(raw) => Some(raw.clone()),
            DateBound::Unset => None,
        };
        match (show(&self.from), show(&self.to)) {
            (Some(f), Some(t)) => format!("{} — {}", f, t),
            (Some(f), None) => format!("≥ {}", f),
            (None, Some(t)) => format!("≤ {}", t),
            (None, None) => String::new(),
        }
    }
}

/// Полное состояние фильтров страницы списка.
///
/// `C` это набор фильтров колонок конкретного типа записей.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState<C> {
    pub search: String,
    pub columns: C,
    pub date_range: DateRange,
}

impl<C: Default + PartialEq> FilterState<C> {
    /// Ни одно условие не ограничивает выборку
    pub fn is_unrestricted(&self) -> bool {
        self.search.trim().is_empty() && self.columns == C::default() && !self.date_range.is_set()
    }
}
