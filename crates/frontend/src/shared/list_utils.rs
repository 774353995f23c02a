/// Утилиты заголовков и ячеек таблиц списков (индикатор сортировки, подсветка поиска)
use contracts::shared::list_query::{SortDirection, SortState};

/// Индикатор сортировки для заголовка колонки
pub fn get_sort_indicator<K: Copy + Eq>(sort: &SortState<K>, key: K) -> &'static str {
    match sort.direction_for(key) {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
        SortDirection::Unsorted => " ⇅",
    }
}

/// CSS-класс заголовка: активная колонка выделяется
pub fn get_sort_class<K: Copy + Eq>(sort: &SortState<K>, key: K) -> &'static str {
    if sort.active_key() == Some(key) {
        "table__sortable-header table__sortable-header--active"
    } else {
        "table__sortable-header"
    }
}

/// Делит текст на фрагменты `(текст, совпадение)` для подсветки поиска.
///
/// Совпадения ищутся без учёта регистра; границы фрагментов всегда
/// приходятся на границы символов исходного текста.
pub fn highlight_segments(text: &str, term: &str) -> Vec<(String, bool)> {
    let term: Vec<char> = term.trim().chars().flat_map(char::to_lowercase).collect();
    if term.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // Смещение каждого символа и его форма в нижнем регистре
    let chars: Vec<(usize, String)> = text
        .char_indices()
        .map(|(i, c)| (i, c.to_lowercase().collect()))
        .collect();

    let matches_at = |start: usize| -> Option<usize> {
        let mut pending = term.as_slice();
        let mut pos = start;
        while !pending.is_empty() {
            let (_, lower) = chars.get(pos)?;
            for c in lower.chars() {
                match pending.split_first() {
                    Some((&expected, rest)) if expected == c => pending = rest,
                    _ => return None,
                }
            }
            pos += 1;
        }
        Some(pos)
    };

    let offset = |pos: usize| chars.get(pos).map(|(i, _)| *i).unwrap_or(text.len());

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < chars.len() {
        match matches_at(pos) {
            Some(end) => {
                if pos > plain_start {
                    segments.push((text[offset(plain_start)..offset(pos)].to_string(), false));
                }
                segments.push((text[offset(pos)..offset(end)].to_string(), true));
                pos = end;
                plain_start = end;
            }
            None => pos += 1,
        }
    }
    if plain_start < chars.len() {
        segments.push((text[offset(plain_start)..].to_string(), false));
    }
    segments
}
