// ============================================================================
// PAGINACIÓN - Ventana skip/limit derivada del número de página
// ============================================================================

/// Ventana de paginación que entiende el backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

/// `skip = (page - 1) * page_size`, `limit = page_size`, para `page >= 1`
pub fn to_offset(page: u32, page_size: u64) -> PageWindow {
    let page = u64::from(page.max(1));
    PageWindow {
        skip: (page - 1) * page_size,
        limit: page_size,
    }
}

/// Número total de páginas (mínimo 1, aunque no haya datos)
pub fn total_pages(count: u64, page_size: u64) -> u32 {
    if page_size == 0 {
        return 1;
    }
    (count.div_ceil(page_size).max(1)).min(u64::from(u32::MAX)) as u32
}

/// Página actual desde el query string de la URL (`?page=N`).
/// Valores ausentes, no numéricos o cero caen a la página 1: el núcleo
/// sólo ve números ya validados.
pub fn page_from_search(search: &str) -> u32 {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_for_first_and_third_page() {
        assert_eq!(to_offset(1, 5), PageWindow { skip: 0, limit: 5 });
        assert_eq!(to_offset(3, 5), PageWindow { skip: 10, limit: 5 });
    }

    #[test]
    fn page_zero_is_clamped() {
        assert_eq!(to_offset(0, 5), PageWindow { skip: 0, limit: 5 });
    }

    #[test]
    fn parses_page_from_query_string() {
        assert_eq!(page_from_search("?page=3"), 3);
        assert_eq!(page_from_search("page=2&foo=bar"), 2);
        assert_eq!(page_from_search("?foo=bar&page=7"), 7);
    }

    #[test]
    fn defaults_to_first_page() {
        assert_eq!(page_from_search(""), 1);
        assert_eq!(page_from_search("?page="), 1);
        assert_eq!(page_from_search("?page=abc"), 1);
        assert_eq!(page_from_search("?page=0"), 1);
        assert_eq!(page_from_search("?other=9"), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }
}
