//! Источник записей страницы списка
//!
//! Единственное место, где живут записи. Изменения адресуются по id;
//! отображаемый список пересчитывается из источника, а не правится напрямую.
use contracts::domain::common::{Identified, RecordId};
use contracts::shared::error::RecordSourceError;
use leptos::prelude::*;

pub struct RecordStore<T: Send + Sync + 'static> {
    records: RwSignal<Vec<T>>,
}

impl<T: Send + Sync + 'static> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RecordStore<T> {}

impl<T> RecordStore<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwSignal::new(records),
        }
    }

    /// Доступ к записям с отслеживанием зависимостей
    pub fn with<R>(&self, f: impl FnOnce(&Vec<T>) -> R) -> R {
        self.records.with(f)
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.records.get_untracked()
    }

    pub fn len(&self) -> usize {
        self.records.with_untracked(|records| records.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Найти запись по id (реактивно)
    pub fn find(&self, id: &T::Id) -> Option<T> {
        self.records
            .with(|records| records.iter().find(|r| r.id() == id).cloned())
    }

    fn find_untracked(&self, id: &T::Id) -> Option<T> {
        self.records
            .with_untracked(|records| records.iter().find(|r| r.id() == id).cloned())
    }

    pub fn insert(&self, record: T) -> Result<(), RecordSourceError> {
        let id = *record.id();
        if self.find_untracked(&id).is_some() {
            log::warn!("Insert rejected, duplicate id {}", id.as_string());
            return Err(RecordSourceError::DuplicateId(id.as_string()));
        }
        self.records.update(|records| records.push(record));
        log::info!("Record {} inserted", id.as_string());
        Ok(())
    }

    /// Применить изменение к записи с указанным id.
    ///
    /// Изменение выполняется над копией; при ошибке источник не меняется
    /// и подписчики не уведомляются.
    pub fn update<F>(&self, id: &T::Id, f: F) -> Result<(), RecordSourceError>
    where
        F: FnOnce(&mut T) -> Result<(), String>,
    {
        let Some(mut record) = self.find_untracked(id) else {
            log::warn!("Update skipped, unknown id {}", id.as_string());
            return Err(RecordSourceError::NotFound(id.as_string()));
        };

        if let Err(reason) = f(&mut record) {
            log::warn!("Update of {} rejected: {}", id.as_string(), reason);
            return Err(RecordSourceError::Rejected {
                id: id.as_string(),
                reason,
            });
        }

        self.records.update(|records| {
            if let Some(slot) = records.iter_mut().find(|r| r.id() == id) {
                *slot = record;
            }
        });
        log::info!("Record {} updated", id.as_string());
        Ok(())
    }

    pub fn remove(&self, id: &T::Id) -> Result<T, RecordSourceError> {
        let position = self
            .records
            .with_untracked(|records| records.iter().position(|r| r.id() == id));
        let Some(position) = position else {
            log::warn!("Remove skipped, unknown id {}", id.as_string());
            return Err(RecordSourceError::NotFound(id.as_string()));
        };

        let mut removed = None;
        self.records.update(|records| removed = Some(records.remove(position)));
        log::info!("Record {} removed", id.as_string());
        removed.ok_or_else(|| RecordSourceError::NotFound(id.as_string()))
    }

    /// Заменить все записи (например, после повторной загрузки)
    pub fn replace_all(&self, records: Vec<T>) {
        log::info!("Record source reloaded: {} records", records.len());
        self.records.set(records);
    }
}

/// Положить источник записей в контекст страницы
pub fn provide_record_store<T>(records: Vec<T>) -> RecordStore<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    let store = RecordStore::new(records);
    provide_context(store);
    store
}

pub fn use_record_store<T>() -> Option<RecordStore<T>>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    use_context::<RecordStore<T>>()
}
