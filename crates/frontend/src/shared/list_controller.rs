//! Реактивное состояние страницы списка
//!
//! Фильтры, сортировка, страница и выбранная запись хранятся в сигналах.
//! Отображаемый список хранится в мемо над источником, фильтрами и сортировкой и
//! пересчитывается только при изменении одного из них.
use super::record_store::RecordStore;
use contracts::shared::config::ListSettings;
use contracts::shared::list_query::{
    column_options, derive_rows, paginate, DateRange, Filter, FilterState, Listable, Page,
    SortState,
};
use leptos::prelude::*;
use std::cmp::Ordering;

/// Запись, которую можно держать в реактивном состоянии списка
pub trait ListRecord: Listable + PartialEq + Send + Sync + 'static {}

impl<T: Listable + PartialEq + Send + Sync + 'static> ListRecord for T {}

pub struct ListController<T: ListRecord> {
    filter: RwSignal<FilterState<T::Columns>>,
    sort: RwSignal<SortState<T::SortKey>>,
    page: RwSignal<usize>,
    page_size: RwSignal<usize>,
    selected_id: RwSignal<Option<T::Id>>,
    rows: Memo<Vec<T>>,
    store: RecordStore<T>,
    search_min_chars: usize,
    all_label: StoredValue<String>,
    page_size_options: StoredValue<Vec<usize>>,
    derivations: StoredValue<usize>,
}

impl<T: ListRecord> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListRecord> Copy for ListController<T> {}

impl<T: ListRecord> ListController<T> {
    pub fn new(store: RecordStore<T>, settings: &ListSettings, default_sort: SortState<T::SortKey>) -> Self {
        Self::with_filter(store, settings, FilterState::default(), default_sort)
    }

    /// Контроллер со стартовыми фильтрами (например, период «текущий месяц»)
    pub fn with_filter(
        store: RecordStore<T>,
        settings: &ListSettings,
        filter: FilterState<T::Columns>,
        sort: SortState<T::SortKey>,
    ) -> Self {
        let filter = RwSignal::new(filter);
        let sort = RwSignal::new(sort);
        let derivations = StoredValue::new(0usize);

        let rows = Memo::new(move |_| {
            derivations.update_value(|n| *n += 1);
            store.with(|records| filter.with(|f| sort.with(|s| derive_rows(records, f, s))))
        });

        Self {
            filter,
            sort,
            page: RwSignal::new(0),
            page_size: RwSignal::new(settings.list.page_size.max(1)),
            selected_id: RwSignal::new(None),
            rows,
            store,
            search_min_chars: settings.search.min_chars,
            all_label: StoredValue::new(settings.list.all_label.clone()),
            page_size_options: StoredValue::new(settings.list.page_size_options.clone()),
            derivations,
        }
    }

    /// Отфильтрованный и отсортированный список
    pub fn rows(&self) -> Memo<Vec<T>> {
        self.rows
    }

    pub fn with_rows<R>(&self, f: impl FnOnce(&Vec<T>) -> R) -> R {
        self.rows.with(f)
    }

    pub fn row_count(&self) -> usize {
        self.rows.with(|rows| rows.len())
    }

    pub fn current_page(&self) -> Page<T> {
        let page = self.page.get();
        let page_size = self.page_size.get();
        self.rows.with(|rows| paginate(rows, page, page_size))
    }

    pub fn store(&self) -> RecordStore<T> {
        self.store
    }

    pub fn filter_state(&self) -> ReadSignal<FilterState<T::Columns>> {
        self.filter.read_only()
    }

    pub fn sort_state(&self) -> ReadSignal<SortState<T::SortKey>> {
        self.sort.read_only()
    }

    pub fn page(&self) -> ReadSignal<usize> {
        self.page.read_only()
    }

    pub fn page_size(&self) -> ReadSignal<usize> {
        self.page_size.read_only()
    }

    /// Размеры страницы для переключателя
    pub fn page_size_options(&self) -> Vec<usize> {
        self.page_size_options.get_value()
    }

    pub fn all_label(&self) -> String {
        self.all_label.get_value()
    }

    /// Текст пункта выпадающего фильтра с настроенной подписью «все»
    pub fn filter_label<V>(
        &self,
        filter: &Filter<V>,
        format_value: impl Fn(&V) -> String,
    ) -> String {
        self.all_label
            .with_value(|all_label| filter.label_with(all_label, format_value))
    }

    /// Сколько раз пересчитывался отображаемый список
    pub fn derivation_count(&self) -> usize {
        self.derivations.get_value()
    }

    fn replace_filter(&self, next: FilterState<T::Columns>) {
        if self.filter.with_untracked(|current| *current == next) {
            return;
        }
        self.filter.set(next);
        self.page.set(0);
    }

    /// Поисковая строка; короче `min_chars` символов считается пустой
    pub fn set_search(&self, term: &str) {
        let term = term.trim();
        let term = if term.chars().count() < self.search_min_chars {
            ""
        } else {
            term
        };
        let mut next = self.filter.get_untracked();
        next.search = term.to_string();
        self.replace_filter(next);
    }

    pub fn update_columns(&self, f: impl FnOnce(&mut T::Columns)) {
        let mut next = self.filter.get_untracked();
        f(&mut next.columns);
        self.replace_filter(next);
    }

    pub fn set_filter(&self, filter: FilterState<T::Columns>) {
        self.replace_filter(filter);
    }

    pub fn set_date_range(&self, range: DateRange) {
        let mut next = self.filter.get_untracked();
        next.date_range = range;
        self.replace_filter(next);
    }

    pub fn reset_filters(&self) {
        self.replace_filter(FilterState::default());
    }

    /// Клик по заголовку колонки
    pub fn toggle_sort(&self, key: T::SortKey) {
        self.sort.update(|s| s.toggle(key));
        self.page.set(0);
    }

    pub fn set_sort(&self, sort: SortState<T::SortKey>) {
        if self.sort.get_untracked() == sort {
            return;
        }
        self.sort.set(sort);
        self.page.set(0);
    }

    pub fn set_page(&self, page: usize) {
        self.page.set(page);
    }

    /// Размер страницы из `page_size_options`; другие значения игнорируются
    pub fn set_page_size(&self, page_size: usize) -> bool {
        let allowed = self.page_size_options.with_value(|options| {
            if options.is_empty() {
                page_size > 0
            } else {
                options.contains(&page_size)
            }
        });
        if !allowed {
            log::warn!("Page size {} is not one of the configured options", page_size);
            return false;
        }
        self.page_size.set(page_size);
        self.page.set(0);
        true
    }

    pub fn select(&self, id: T::Id) {
        self.selected_id.set(Some(id));
    }

    pub fn clear_selection(&self) {
        self.selected_id.set(None);
    }

    pub fn selected_id(&self) -> Option<T::Id> {
        self.selected_id.get()
    }

    /// Выбранная запись из источника; видна, даже если текущие фильтры её скрывают
    pub fn selected(&self) -> Option<T> {
        self.selected_id.get().and_then(|id| self.store.find(&id))
    }

    /// Варианты выпадающего фильтра колонки по всему источнику
    pub fn column_options<V, F, C>(&self, field: F, cmp: C) -> Vec<Filter<V>>
    where
        V: PartialEq,
        F: Fn(&T) -> Option<V>,
        C: Fn(&V, &V) -> Ordering,
    {
        self.store.with(|records| column_options(records, field, cmp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a101_transport_trip::{Trip, TripColumns, TripSortKey, TripStatus, WITH_NOTE};
    use contracts::shared::list_query::SortDirection;

    fn trip(id: i64, driver: &str, date: Option<&str>, note: Option<&str>) -> Trip {
        Trip {
            id,
            job_no: format!("JOB-{:04}", id),
            driver: driver.into(),
            vehicle_plate: format!("70-{:04}", id),
            origin: "คลังลำลูกกา".into(),
            destination: format!("สาขา {}", id),
            status: TripStatus::Planned,
            distance_km: id as f64,
            departure_date: date.map(str::to_string),
            route_stops: vec![],
            note: note.map(str::to_string),
        }
    }

    fn trips() -> Vec<Trip> {
        vec![
            trip(1, "สมชาย", Some("2024-01-03"), None),
            trip(2, "วิชัย", Some("2024-01-09"), Some("ยางแบน")),
            trip(3, "สมชาย", None, None),
            trip(4, "อนันต์", Some("2024-01-07"), Some("รอคิว")),
        ]
    }

    fn controller_with(settings: &ListSettings) -> ListController<Trip> {
        ListController::new(RecordStore::new(trips()), settings, SortState::unsorted())
    }

    fn controller() -> ListController<Trip> {
        controller_with(&ListSettings::default())
    }

    fn ids(c: &ListController<Trip>) -> Vec<i64> {
        c.with_rows(|rows| rows.iter().map(|t| t.id).collect())
    }

    #[test]
    fn test_rows_follow_filter_and_sort() {
        let owner = Owner::new();
        owner.set();

        let c = controller();
        assert_eq!(ids(&c), vec![2, 4, 1, 3]);

        c.update_columns(|cols: &mut TripColumns| cols.driver = Filter::EqualTo("สมชาย".into()));
        assert_eq!(ids(&c), vec![1, 3]);

        c.toggle_sort(TripSortKey::DistanceKm);
        c.toggle_sort(TripSortKey::DistanceKm);
        assert_eq!(c.sort_state().get_untracked().direction, SortDirection::Descending);
        assert_eq!(ids(&c), vec![3, 1]);

        c.toggle_sort(TripSortKey::DistanceKm);
        assert_eq!(c.sort_state().get_untracked(), SortState::unsorted());
        assert_eq!(ids(&c), vec![1, 3]);
    }

    #[test]
    fn test_unrelated_changes_do_not_rederive() {
        let owner = Owner::new();
        owner.set();

        let c = controller();
        assert_eq!(ids(&c).len(), 4);
        let after_first = c.derivation_count();

        c.set_page(3);
        assert!(c.set_page_size(25));
        c.select(2);
        c.clear_selection();
        assert_eq!(ids(&c).len(), 4);
        assert_eq!(c.derivation_count(), after_first);

        // то же значение поиска не меняет состояние
        c.set_search("  ");
        assert_eq!(ids(&c).len(), 4);
        assert_eq!(c.derivation_count(), after_first);

        c.set_search("ยาง");
        assert_eq!(ids(&c), vec![2]);
        assert_eq!(c.derivation_count(), after_first + 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let owner = Owner::new();
        owner.set();

        let mut settings = ListSettings::default();
        settings.list.page_size_options = vec![1, 50];
        let c = controller_with(&settings);
        assert!(c.set_page_size(1));
        c.set_page(2);
        assert_eq!(c.current_page().rows[0].id, 1);

        c.update_columns(|cols: &mut TripColumns| cols.note = Filter::Predicate(WITH_NOTE));
        assert_eq!(c.page().get_untracked(), 0);
        let page = c.current_page();
        assert_eq!(page.total_count, 2);
        assert_eq!(page.rows[0].id, 2);

        c.set_page(10);
        assert_eq!(c.current_page().page, 1);
        c.toggle_sort(TripSortKey::JobNo);
        assert_eq!(c.page().get_untracked(), 0);
    }

    #[test]
    fn test_selection_survives_filtering_and_sees_mutations() {
        let owner = Owner::new();
        owner.set();

        let c = controller();
        c.select(3);
        c.set_search("ยาง");
        assert_eq!(ids(&c), vec![2]);
        assert_eq!(c.selected().map(|t| t.id), Some(3));

        c.store()
            .update(&3, |t| t.save_route_order(vec!["สาขา 9".into()]))
            .unwrap();
        assert_eq!(
            c.selected().map(|t| t.route_stops),
            Some(vec!["สาขา 9".to_string()])
        );

        c.store().remove(&3).unwrap();
        assert_eq!(c.selected(), None);
        assert_eq!(c.selected_id(), Some(3));
    }

    #[test]
    fn test_mutation_rederives_rows() {
        let owner = Owner::new();
        owner.set();

        let c = controller();
        c.update_columns(|cols: &mut TripColumns| cols.note = Filter::Predicate(WITH_NOTE));
        assert_eq!(ids(&c), vec![2, 4]);

        c.store()
            .update(&1, |t| {
                t.note = Some("เติมน้ำมันเพิ่ม".into());
                Ok(())
            })
            .unwrap();
        assert_eq!(ids(&c), vec![2, 4, 1]);
    }

    #[test]
    fn test_min_chars_and_invalid_range() {
        let owner = Owner::new();
        owner.set();

        let mut settings = ListSettings::default();
        settings.search.min_chars = 3;
        let store = RecordStore::new(vec![trip(1, "สมชาย", Some("2024-01-03"), None)]);
        let c = ListController::new(store, &settings, SortState::unsorted());

        c.set_search("สม");
        assert_eq!(c.filter_state().get_untracked().search, "");
        assert_eq!(c.row_count(), 1);

        c.set_date_range(DateRange::parse("2024-13-45", ""));
        assert_eq!(c.row_count(), 0);

        c.reset_filters();
        assert_eq!(c.row_count(), 1);
    }

    #[test]
    fn test_column_options_use_whole_source() {
        let owner = Owner::new();
        owner.set();

        let c = controller();
        c.set_search("ยาง");
        let options = c.column_options(|t| Some(t.driver.clone()), |a, b| {
            contracts::shared::list_query::compare_text(a, b)
        });
        assert_eq!(options.len(), 4);
        assert!(options[0].is_all());
    }

    #[test]
    fn test_page_size_limited_to_options() {
        let owner = Owner::new();
        owner.set();

        let c = controller();
        assert_eq!(c.page_size_options(), vec![25, 50, 100, 200]);
        assert_eq!(c.page_size().get_untracked(), 50);

        c.set_page(1);
        assert!(!c.set_page_size(7));
        assert!(!c.set_page_size(0));
        assert_eq!(c.page_size().get_untracked(), 50);
        assert_eq!(c.page().get_untracked(), 1);

        assert!(c.set_page_size(100));
        assert_eq!(c.page_size().get_untracked(), 100);
        assert_eq!(c.page().get_untracked(), 0);
    }

    #[test]
    fn test_filter_labels_use_configured_all_label() {
        let owner = Owner::new();
        owner.set();

        let mut settings = ListSettings::default();
        settings.list.all_label = "ทุกคน".into();
        let c = controller_with(&settings);

        let labels: Vec<String> = c
            .column_options(|t| Some(t.driver.clone()), |a, b| {
                contracts::shared::list_query::compare_text(a, b)
            })
            .iter()
            .map(|f| c.filter_label(f, |driver| driver.clone()))
            .collect();
        assert_eq!(labels[0], "ทุกคน");
        assert_eq!(labels.len(), 4);
        assert_eq!(c.all_label(), "ทุกคน");
        assert_eq!(
            c.filter_label(&Filter::Predicate(WITH_NOTE), |_| String::new()),
            WITH_NOTE.label()
        );
    }

    #[test]
    fn test_reload_rederives_rows() {
        let owner = Owner::new();
        owner.set();

        let c = controller();
        c.update_columns(|cols: &mut TripColumns| cols.note = Filter::Predicate(WITH_NOTE));
        c.select(4);
        assert_eq!(ids(&c), vec![2, 4]);
        let before = c.derivation_count();

        let mut reloaded = trips();
        reloaded.retain(|t| t.id != 2);
        reloaded.push(trip(5, "ประยุทธ", Some("2024-01-11"), Some("ส่งด่วน")));
        c.store().replace_all(reloaded);

        assert_eq!(ids(&c), vec![5, 4]);
        assert_eq!(c.derivation_count(), before + 1);
        assert_eq!(c.filter_state().get_untracked().columns.note, Filter::Predicate(WITH_NOTE));
        assert_eq!(c.selected().map(|t| t.id), Some(4));

        c.store().replace_all(Vec::new());
        assert_eq!(c.row_count(), 0);
        assert_eq!(c.selected(), None);
    }
}
