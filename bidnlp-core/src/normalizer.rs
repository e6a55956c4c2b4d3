//! # Normalização de Texto Persa
//!
//! Antes de qualquer remoção de sufixo, a palavra passa por uma normalização
//! que elimina as variações de escrita que fragmentariam os casamentos de sufixo.
//!
//! ## Etapas (nesta ordem)
//!
//! 1. Remove caracteres invisíveis de junção (ZWNJ, ZWSP, ZWJ). O ZWNJ é
//!    muito comum em compostos persas: "کتاب‌ها" vira "کتابها".
//! 2. Remove diacríticos árabes (faixa U+064B–U+065F e U+0670).
//! 3. Converte variantes árabes para a forma persa (ي → ی, ك → ک, ة → ه...).
//! 4. Remove espaços nas bordas.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use bidnlp_core::normalizer::normalize;
//!
//! assert_eq!(normalize("كتاب\u{200C}ها"), "کتابها");
//! assert_eq!(normalize(""), "");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Zero-width non-joiner
pub const ZWNJ: char = '\u{200C}';
/// Zero-width space
pub const ZWSP: char = '\u{200B}';
/// Zero-width joiner
pub const ZWJ: char = '\u{200D}';

/// Diacríticos árabes (tashkeel) e o alef sobrescrito
static DIACRITICS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{064B}-\x{065F}\x{0670}]").expect("regex de diacríticos válida"));

/// Tabela de substituição árabe → persa (um para um)
pub static ARABIC_TO_PERSIAN: &[(char, char)] = &[
    ('ي', 'ی'),
    ('ك', 'ک'),
    ('ؤ', 'و'),
    ('إ', 'ا'),
    ('أ', 'ا'),
    ('ٱ', 'ا'),
    ('ة', 'ه'),
];

/// Espaço em branco: `char::is_whitespace` mais os separadores de informação
/// U+001C–U+001F, que o texto de entrada também usa como fronteira.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Normaliza uma palavra (ou texto) persa.
///
/// Função pura e total: nunca falha, e texto vazio produz texto vazio.
pub fn normalize(word: &str) -> String {
    let visible: String = word
        .chars()
        .filter(|&c| !matches!(c, ZWNJ | ZWSP | ZWJ))
        .collect();

    let stripped = DIACRITICS.replace_all(&visible, "");

    let mapped: String = stripped.chars().map(to_persian).collect();

    mapped.trim_matches(is_separator).to_string()
}

/// Converte um caractere árabe para o equivalente persa (ou o devolve intacto)
fn to_persian(c: char) -> char {
    ARABIC_TO_PERSIAN
        .iter()
        .find(|(arabic, _)| *arabic == c)
        .map(|&(_, persian)| persian)
        .unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_zero_width_characters() {
        assert_eq!(normalize("کتاب\u{200C}ها"), "کتابها");
        assert_eq!(normalize("کتاب\u{200B}ها\u{200D}"), "کتابها");
    }

    #[test]
    fn test_strips_diacritics() {
        // kasra, fatha, shadda, alef sobrescrito
        assert_eq!(normalize("كِتَاب"), "کتاب");
        assert_eq!(normalize("محمّد"), "محمد");
        assert_eq!(normalize("رحمٰن"), "رحمن");
    }

    #[test]
    fn test_maps_arabic_letters() {
        assert_eq!(normalize("كتابي"), "کتابی");
        assert_eq!(normalize("مؤمن"), "مومن");
        assert_eq!(normalize("إسلام"), "اسلام");
        assert_eq!(normalize("أحمد"), "احمد");
        assert_eq!(normalize("ٱلله"), "الله");
        assert_eq!(normalize("مدرسة"), "مدرسه");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  كتابي  "), "کتابی");
        assert_eq!(normalize("\tخانه\n"), "خانه");
    }

    #[test]
    fn test_trims_information_separators() {
        assert_eq!(normalize("\u{1C}کتابها"), "کتابها");
        assert_eq!(normalize("\u{1F}کتاب\u{1D} "), "کتاب");
        assert!(is_separator('\u{1E}'));
        assert!(is_separator('\u{2029}'));
        assert!(!is_separator('\u{1B}'));
        assert!(!is_separator(ZWNJ));
    }

    #[test]
    fn test_empty_and_non_persian() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("ab"), "ab");
    }

    #[test]
    fn test_madda_alef_is_kept() {
        // آ não faz parte da tabela de substituição
        assert_eq!(normalize("آب"), "آب");
    }
}
