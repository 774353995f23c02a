use crate::domain::common::Identified;
use crate::shared::date_utils::parse_datetime;
use serde::{Deserialize, Serialize};

/// Вид топлива
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasohol91,
    Gasohol95,
    E20,
    Diesel,
    DieselB7,
}

impl FuelType {
    pub fn code(&self) -> &'static str {
        match self {
            FuelType::Gasohol91 => "gasohol_91",
            FuelType::Gasohol95 => "gasohol_95",
            FuelType::E20 => "e20",
            FuelType::Diesel => "diesel",
            FuelType::DieselB7 => "diesel_b7",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FuelType::Gasohol91 => "แก๊สโซฮอล์ 91",
            FuelType::Gasohol95 => "แก๊สโซฮอล์ 95",
            FuelType::E20 => "แก๊สโซฮอล์ E20",
            FuelType::Diesel => "ดีเซล",
            FuelType::DieselB7 => "ดีเซล B7",
        }
    }

    pub fn all() -> Vec<FuelType> {
        vec![
            FuelType::Gasohol91,
            FuelType::Gasohol95,
            FuelType::E20,
            FuelType::Diesel,
            FuelType::DieselB7,
        ]
    }
}

/// Результат проверки качества
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestResult {
    Pending,
    Passed,
    Failed,
}

impl TestResult {
    pub fn display_name(&self) -> &'static str {
        match self {
            TestResult::Pending => "รอผล",
            TestResult::Passed => "ผ่าน",
            TestResult::Failed => "ไม่ผ่าน",
        }
    }

    pub fn all() -> Vec<TestResult> {
        vec![TestResult::Pending, TestResult::Passed, TestResult::Failed]
    }

    pub fn rank(&self) -> u8 {
        match self {
            TestResult::Pending => 0,
            TestResult::Passed => 1,
            TestResult::Failed => 2,
        }
    }
}

/// Допустимая плотность топлива, кг/л
pub const DENSITY_RANGE: std::ops::RangeInclusive<f64> = 0.5..=1.0;

/// Проверка качества топлива на станции (страница QualityTestReport)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityTest {
    pub id: i64,
    pub station: String,
    pub fuel_type: FuelType,
    pub result: TestResult,

    /// Плотность при 15 °C; заполняется вместе с результатом
    pub density: Option<f64>,

    pub tested_at: Option<String>,
    pub inspector: String,
}

impl QualityTest {
    /// Зафиксировать результат проверки
    pub fn record_result(
        &mut self,
        result: TestResult,
        density: Option<f64>,
        tested_at: &str,
    ) -> Result<(), String> {
        if self.result != TestResult::Pending {
            return Err(format!(
                "Результат проверки {} уже зафиксирован",
                self.id
            ));
        }
        if result == TestResult::Pending {
            return Err("Укажите результат проверки".into());
        }
        if let Some(value) = density {
            if !DENSITY_RANGE.contains(&value) {
                return Err(format!("Плотность вне допустимого диапазона: {}", value));
            }
        }
        if tested_at.trim().is_empty() {
            return Err("Не указана дата проверки".into());
        }
        if parse_datetime(tested_at).is_none() {
            return Err(format!("Некорректная дата проверки: {}", tested_at.trim()));
        }

        self.result = result;
        self.density = density;
        self.tested_at = Some(tested_at.trim().to_string());
        Ok(())
    }
}

impl Identified for QualityTest {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}
