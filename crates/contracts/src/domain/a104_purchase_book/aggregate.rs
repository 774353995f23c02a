use crate::domain::common::Identified;
use serde::{Deserialize, Serialize};

/// Режим НДС документа поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatType {
    Included,
    Excluded,
    Exempt,
}

impl VatType {
    pub fn display_name(&self) -> &'static str {
        match self {
            VatType::Included => "รวม VAT",
            VatType::Excluded => "แยก VAT",
            VatType::Exempt => "ยกเว้น VAT",
        }
    }

    pub fn all() -> Vec<VatType> {
        vec![VatType::Included, VatType::Excluded, VatType::Exempt]
    }
}

/// Строка книги покупок (страница PurchaseBook)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseEntry {
    pub id: i64,

    /// Номер налогового счёта поставщика
    pub doc_no: String,

    pub supplier: String,

    /// ИНН поставщика (13 цифр)
    pub tax_id: String,

    pub amount: f64,
    pub vat_amount: f64,
    pub vat_type: VatType,

    /// Дата документа (ISO)
    pub doc_date: Option<String>,

    pub note: Option<String>,
}

impl PurchaseEntry {
    /// Сумма с НДС
    pub fn total(&self) -> f64 {
        match self.vat_type {
            VatType::Excluded => self.amount + self.vat_amount,
            VatType::Included | VatType::Exempt => self.amount,
        }
    }

    /// Изменить примечание; пустая строка очищает его
    pub fn set_note(&mut self, note: &str) -> Result<(), String> {
        let note = note.trim();
        if note.chars().count() > 500 {
            return Err("Примечание длиннее 500 символов".into());
        }
        self.note = if note.is_empty() {
            None
        } else {
            Some(note.to_string())
        };
        Ok(())
    }
}

impl Identified for PurchaseEntry {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}
