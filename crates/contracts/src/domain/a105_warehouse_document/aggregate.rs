use crate::domain::common::Identified;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Вид складского документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Receipt,
    Issue,
    Transfer,
}

impl DocumentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Receipt => "รับเข้า",
            DocumentKind::Issue => "เบิกจ่าย",
            DocumentKind::Transfer => "โอนย้าย",
        }
    }

    pub fn all() -> Vec<DocumentKind> {
        vec![DocumentKind::Receipt, DocumentKind::Issue, DocumentKind::Transfer]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Confirmed,
}

impl DocumentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "รอยืนยัน",
            DocumentStatus::Confirmed => "ยืนยันแล้ว",
        }
    }

    pub fn all() -> Vec<DocumentStatus> {
        vec![DocumentStatus::Pending, DocumentStatus::Confirmed]
    }
}

/// Складской документ филиала (страница WarehouseDocuments)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseDocument {
    pub id: Uuid,
    pub doc_no: String,
    pub branch: String,
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub item_count: u32,

    /// Дата создания (ISO); у документов, перенесённых из бумажного журнала, отсутствует
    pub created_at: Option<String>,

    pub confirmed_by: Option<String>,
    pub confirmed_at: Option<String>,
}

impl WarehouseDocument {
    pub fn new_pending(doc_no: String, branch: String, kind: DocumentKind, created_at: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            doc_no,
            branch,
            kind,
            status: DocumentStatus::Pending,
            item_count: 0,
            created_at,
            confirmed_by: None,
            confirmed_at: None,
        }
    }

    /// Подтвердить документ
    pub fn confirm(&mut self, by: &str, at: NaiveDateTime) -> Result<(), String> {
        if self.status != DocumentStatus::Pending {
            return Err(format!("Документ {} уже подтверждён", self.doc_no));
        }
        let by = by.trim();
        if by.is_empty() {
            return Err("Не указан сотрудник, подтверждающий документ".into());
        }

        self.status = DocumentStatus::Confirmed;
        self.confirmed_by = Some(by.to_string());
        self.confirmed_at = Some(at.format("%Y-%m-%dT%H:%M:%S").to_string());
        Ok(())
    }
}

impl Identified for WarehouseDocument {
    type Id = Uuid;

    fn id(&self) -> &Uuid {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap()
    }

    fn doc() -> WarehouseDocument {
        WarehouseDocument::new_pending(
            "WH-0001".into(),
            "สาขาบางนา".into(),
            DocumentKind::Receipt,
            Some("2024-01-31".into()),
        )
    }

    #[test]
    fn test_confirm() {
        let mut d = doc();
        d.confirm(" สมศรี ", at()).unwrap();
        assert_eq!(d.status, DocumentStatus::Confirmed);
        assert_eq!(d.confirmed_by.as_deref(), Some("สมศรี"));
        assert_eq!(d.confirmed_at.as_deref(), Some("2024-02-01T14:05:00"));
    }

    #[test]
    fn test_confirm_only_once() {
        let mut d = doc();
        d.confirm("สมศรี", at()).unwrap();
        assert!(d.confirm("วิชัย", at()).is_err());
        assert_eq!(d.confirmed_by.as_deref(), Some("สมศรี"));
    }

    #[test]
    fn test_confirm_requires_name() {
        let mut d = doc();
        assert!(d.confirm("  ", at()).is_err());
        assert_eq!(d.status, DocumentStatus::Pending);
    }
}
