use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Трейт для типов идентификаторов записей списков
pub trait RecordId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + Debug + Send + Sync + 'static
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;
}

/// Запись с устойчивым идентификатором.
///
/// Изменения источника записей адресуются только по этому id,
/// никогда по позиции в отфильтрованном представлении.
pub trait Identified {
    type Id: RecordId;

    fn id(&self) -> &Self::Id;
}

impl RecordId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}

impl RecordId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }
}
