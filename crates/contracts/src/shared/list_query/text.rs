//! Поиск и сравнение текстовых полей
//!
//! Строки сравниваются без учёта регистра. Для тайского текста применяется
//! словарный порядок: предшествующая гласная (เ แ โ ใ ไ) сортируется после
//! согласной, за которой стоит, а тональные знаки учитываются только при
//! равенстве основного ключа.
use std::cmp::Ordering;

/// Нормализует поисковый запрос: обрезает пробелы и приводит к нижнему регистру
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Проверяет вхождение уже нормализованного запроса в поле (case-insensitive)
pub fn contains_term(field: &str, term_lower: &str) -> bool {
    term_lower.is_empty() || field.to_lowercase().contains(term_lower)
}

fn is_thai_leading_vowel(c: char) -> bool {
    ('\u{0E40}'..='\u{0E44}').contains(&c)
}

fn is_thai_consonant(c: char) -> bool {
    ('\u{0E01}'..='\u{0E2E}').contains(&c)
}

fn is_thai_tone_mark(c: char) -> bool {
    ('\u{0E47}'..='\u{0E4E}').contains(&c)
}

fn primary_key(s: &str) -> Vec<char> {
    let chars: Vec<char> = s.chars().flat_map(char::to_lowercase).collect();
    let mut key = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_thai_leading_vowel(c) {
            if let Some(&next) = chars.get(i + 1) {
                if is_thai_consonant(next) {
                    key.push(next);
                    key.push(c);
                    i += 2;
                    continue;
                }
            }
        }
        if !is_thai_tone_mark(c) {
            key.push(c);
        }
        i += 1;
    }
    key
}

/// Сравнивает две строки для сортировки списков.
///
/// Равенство возвращается только для идентичных строк.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Сравнение необязательных строк: отсутствующее значение считается пустой строкой
pub fn compare_opt_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    compare_text(a.unwrap_or(""), b.unwrap_or(""))
}
