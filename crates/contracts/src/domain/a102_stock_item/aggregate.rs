use crate::domain::common::Identified;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Остаток товара на складе станции (страница UpdateStock)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: i64,

    /// Артикул, напр. "OIL-15W40-1L"
    pub product_code: String,
    pub product_name: String,
    pub warehouse: String,

    /// Единица измерения ("ลิตร", "ขวด", "ถัง")
    pub unit: String,

    pub quantity: f64,

    /// Последнее изменение остатка (ISO); у записей из первичной загрузки отсутствует
    pub updated_at: Option<String>,
}

impl StockItem {
    /// Изменить остаток на `delta`; остаток не может стать отрицательным
    pub fn adjust_quantity(&mut self, delta: f64, at: NaiveDateTime) -> Result<(), String> {
        if !delta.is_finite() {
            return Err("Некорректное изменение остатка".into());
        }
        let quantity = self.quantity + delta;
        if quantity < 0.0 {
            return Err(format!(
                "Недостаточно остатка {}: {} {}, списание {}",
                self.product_code, self.quantity, self.unit, -delta
            ));
        }
        self.quantity = quantity;
        self.updated_at = Some(at.format("%Y-%m-%dT%H:%M:%S").to_string());
        Ok(())
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0.0
    }
}

impl Identified for StockItem {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}
