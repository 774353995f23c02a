use thiserror::Error;

/// Ошибки операций над источником записей (поиск по id, вставка, изменение)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordSourceError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    DuplicateId(String),

    #[error("Update of record {id} rejected: {reason}")]
    Rejected { id: String, reason: String },
}
