//! Keyword normalization into URL-slug form.
//!
//! `"Điện Biên"` becomes `"dien-bien"`, which is how the same words tend to
//! appear in result URL paths.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Normalize a raw keyword.
///
/// In order: canonical decomposition, combining marks removed, `đ`/`Đ`
/// mapped to `d`/`D` (they have no decomposition), whitespace runs collapsed
/// to a single `-`, lowercased. Idempotent.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect();

    let mut slug = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_vietnamese_diacritics() {
        assert_eq!(normalize("Điện Biên"), "dien-bien");
        assert_eq!(normalize("Hà Nội"), "ha-noi");
        assert_eq!(normalize("Thành phố Hồ Chí Minh"), "thanh-pho-ho-chi-minh");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("hanoi \t  hotels"), "hanoi-hotels");
        assert_eq!(normalize(" padded "), "-padded-");
    }

    #[test]
    fn keeps_existing_hyphens_and_ascii() {
        assert_eq!(normalize("ha-noi"), "ha-noi");
        assert_eq!(normalize("Travel 2024"), "travel-2024");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn is_idempotent_on_samples() {
        for raw in ["Điện Biên", "Hà Nội", "  Ñandú  Café ", "ĐÀ LẠT", "crème brûlée"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
