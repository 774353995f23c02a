use crate::domain::common::Identified;
use serde::{Deserialize, Serialize};

/// Статус рейса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InTransit,
    Delivered,
    Cancelled,
}

impl TripStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::InTransit => "in_transit",
            TripStatus::Delivered => "delivered",
            TripStatus::Cancelled => "cancelled",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            TripStatus::Planned => "รอออกเดินทาง",
            TripStatus::InTransit => "กำลังขนส่ง",
            TripStatus::Delivered => "ส่งสำเร็จ",
            TripStatus::Cancelled => "ยกเลิก",
        }
    }

    pub fn all() -> Vec<TripStatus> {
        vec![
            TripStatus::Planned,
            TripStatus::InTransit,
            TripStatus::Delivered,
            TripStatus::Cancelled,
        ]
    }

    /// Порядок в колонке статуса (по ходу рейса)
    pub fn rank(&self) -> u8 {
        match self {
            TripStatus::Planned => 0,
            TripStatus::InTransit => 1,
            TripStatus::Delivered => 2,
            TripStatus::Cancelled => 3,
        }
    }

    /// Рейс ещё можно менять (маршрут, статус)
    pub fn is_open(&self) -> bool {
        matches!(self, TripStatus::Planned | TripStatus::InTransit)
    }
}

/// Рейс доставки топлива (страницы ManageTrips / TransportTracking)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,

    /// Номер задания, напр. "JOB-2024-0001"
    pub job_no: String,

    pub driver: String,

    /// Госномер тягача
    pub vehicle_plate: String,

    pub origin: String,
    pub destination: String,
    pub status: TripStatus,
    pub distance_km: f64,

    /// Дата выезда (ISO), может отсутствовать у запланированных рейсов
    pub departure_date: Option<String>,

    /// Порядок объезда станций
    #[serde(default)]
    pub route_stops: Vec<String>,

    pub note: Option<String>,
}

impl Trip {
    /// Сохранить порядок маршрута
    pub fn save_route_order(&mut self, stops: Vec<String>) -> Result<(), String> {
        if !self.status.is_open() {
            return Err(format!(
                "Маршрут рейса {} уже нельзя изменить ({})",
                self.job_no,
                self.status.code()
            ));
        }

        let stops: Vec<String> = stops.into_iter().map(|s| s.trim().to_string()).collect();
        if stops.is_empty() {
            return Err("Маршрут должен содержать хотя бы одну точку".into());
        }
        if stops.iter().any(|s| s.is_empty()) {
            return Err("Пустая точка маршрута".into());
        }
        for (i, stop) in stops.iter().enumerate() {
            if stops[..i].contains(stop) {
                return Err(format!("Точка маршрута повторяется: {}", stop));
            }
        }

        self.route_stops = stops;
        Ok(())
    }

    /// Перевести рейс в новый статус
    pub fn set_status(&mut self, status: TripStatus) -> Result<(), String> {
        let allowed = matches!(
            (self.status, status),
            (TripStatus::Planned, TripStatus::InTransit)
                | (TripStatus::Planned, TripStatus::Cancelled)
                | (TripStatus::InTransit, TripStatus::Delivered)
                | (TripStatus::InTransit, TripStatus::Cancelled)
        );
        if !allowed {
            return Err(format!(
                "Недопустимый переход статуса: {} → {}",
                self.status.code(),
                status.code()
            ));
        }
        self.status = status;
        Ok(())
    }
}

impl Identified for Trip {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(status: TripStatus) -> Trip {
        Trip {
            id: 1,
            job_no: "JOB-2024-0001".into(),
            driver: "สมชาย ใจดี".into(),
            vehicle_plate: "70-1234".into(),
            origin: "คลังลำลูกกา".into(),
            destination: "สาขาบางนา".into(),
            status,
            distance_km: 42.5,
            departure_date: Some("2024-01-05".into()),
            route_stops: vec![],
            note: None,
        }
    }

    #[test]
    fn test_save_route_order() {
        let mut t = trip(TripStatus::Planned);
        t.save_route_order(vec![" สาขาบางนา ".into(), "สาขาพระราม 2".into()])
            .unwrap();
        assert_eq!(t.route_stops, vec!["สาขาบางนา", "สาขาพระราม 2"]);
    }

    #[test]
    fn test_route_order_rejects_duplicates_and_blanks() {
        let mut t = trip(TripStatus::InTransit);
        assert!(t.save_route_order(vec!["A".into(), "A".into()]).is_err());
        assert!(t.save_route_order(vec!["A".into(), " ".into()]).is_err());
        assert!(t.save_route_order(vec![]).is_err());
        assert!(t.route_stops.is_empty());
    }

    #[test]
    fn test_closed_trip_keeps_route() {
        let mut t = trip(TripStatus::Delivered);
        assert!(t.save_route_order(vec!["A".into()]).is_err());
    }

    #[test]
    fn test_status_transitions() {
        let mut t = trip(TripStatus::Planned);
        assert!(t.set_status(TripStatus::Delivered).is_err());
        t.set_status(TripStatus::InTransit).unwrap();
        t.set_status(TripStatus::Delivered).unwrap();
        assert!(t.set_status(TripStatus::Cancelled).is_err());
        assert_eq!(t.status, TripStatus::Delivered);
    }
}
