//! Клиентская пагинация отображаемого списка
use serde::Serialize;

/// Страница списка (номер страницы с 0)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    /// Подпись для панели пагинации: "2 / 5 (230)"
    pub fn info(&self) -> String {
        format!(
            "{} / {} ({})",
            self.page + 1,
            self.total_pages.max(1),
            self.total_count
        )
    }
}

/// Вырезает страницу из уже отфильтрованного и отсортированного списка.
///
/// Номер страницы за пределами списка прижимается к последней странице,
/// нулевой размер страницы считается равным 1.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_count = rows.len();
    let total_pages = total_count.div_ceil(page_size);
    let page = page.min(total_pages.saturating_sub(1));
    let start = page * page_size;
    let end = (start + page_size).min(total_count);

    Page {
        rows: rows[start..end].to_vec(),
        page,
        page_size,
        total_count,
        total_pages,
    }
}
