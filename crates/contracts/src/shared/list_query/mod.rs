//! Универсальный конвейер страниц списков: поиск, фильтры колонок,
//! диапазон дат, сортировка с тремя состояниями, пагинация.
//!
//! ```text
//! источник записей → includes() → sort_records() → paginate() → таблица
//! ```

pub mod derive;
pub mod filter;
pub mod options;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod text;

pub use derive::{derive_rows, filter_records, includes};
pub use filter::{has_text, Condition, DateBound, DateRange, Filter, FilterState, UndatedPolicy};
pub use options::{column_options, condition_options};
pub use pagination::{paginate, Page};
pub use record::{Filterable, Listable, Searchable, Sortable};
pub use sort::{compare_dates, compare_number, compare_records, sort_records, SortDirection, SortState};
pub use text::{compare_opt_text, compare_text};
