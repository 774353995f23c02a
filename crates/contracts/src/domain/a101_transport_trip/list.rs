use super::aggregate::{Trip, TripStatus};
use crate::shared::list_query::{
    compare_dates, compare_number, compare_text, has_text, Condition, Filter, Filterable,
    Searchable, Sortable,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Колонки сортировки списка рейсов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripSortKey {
    JobNo,
    Driver,
    VehiclePlate,
    Status,
    DistanceKm,
    DepartureDate,
}

impl TripSortKey {
    pub fn all() -> &'static [TripSortKey] {
        &[
            TripSortKey::JobNo,
            TripSortKey::Driver,
            TripSortKey::VehiclePlate,
            TripSortKey::Status,
            TripSortKey::DistanceKm,
            TripSortKey::DepartureDate,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TripSortKey::JobNo => "เลขที่งาน",
            TripSortKey::Driver => "พนักงานขับรถ",
            TripSortKey::VehiclePlate => "ทะเบียนรถ",
            TripSortKey::Status => "สถานะ",
            TripSortKey::DistanceKm => "ระยะทาง (กม.)",
            TripSortKey::DepartureDate => "วันที่ออกเดินทาง",
        }
    }
}

fn trip_has_note(note: &Option<String>) -> bool {
    has_text(note)
}

fn trip_without_note(note: &Option<String>) -> bool {
    !has_text(note)
}

pub const WITH_NOTE: Condition<Option<String>> = Condition::new("มีหมายเหตุ", trip_has_note);
pub const WITHOUT_NOTE: Condition<Option<String>> = Condition::new("ไม่มีหมายเหตุ", trip_without_note);

/// Фильтры колонок списка рейсов
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripColumns {
    pub status: Filter<TripStatus>,
    pub driver: Filter<String>,
    pub vehicle_plate: Filter<String>,
    pub note: Filter<Option<String>>,
}

impl Searchable for Trip {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.job_no,
            &self.driver,
            &self.vehicle_plate,
            &self.origin,
            &self.destination,
            self.note.as_deref().unwrap_or(""),
        ]
    }
}

impl Filterable for Trip {
    type Columns = TripColumns;

    fn matches_columns(&self, columns: &TripColumns) -> bool {
        columns.status.matches(&self.status)
            && columns.driver.matches(&self.driver)
            && columns.vehicle_plate.matches(&self.vehicle_plate)
            && columns.note.matches(&self.note)
    }

    fn list_date(&self) -> Option<&str> {
        self.departure_date.as_deref()
    }
}

impl Sortable for Trip {
    type SortKey = TripSortKey;

    fn compare_by_field(&self, other: &Self, key: TripSortKey) -> Ordering {
        match key {
            TripSortKey::JobNo => compare_text(&self.job_no, &other.job_no),
            TripSortKey::Driver => compare_text(&self.driver, &other.driver),
            TripSortKey::VehiclePlate => compare_text(&self.vehicle_plate, &other.vehicle_plate),
            TripSortKey::Status => self.status.rank().cmp(&other.status.rank()),
            TripSortKey::DistanceKm => compare_number(self.distance_km, other.distance_km),
            TripSortKey::DepartureDate => {
                compare_dates(self.departure_date.as_deref(), other.departure_date.as_deref())
            }
        }
    }

    /// Самые свежие рейсы сверху
    fn default_order(&self, other: &Self) -> Ordering {
        compare_dates(other.departure_date.as_deref(), self.departure_date.as_deref())
    }
}
