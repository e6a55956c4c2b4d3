//! # Tabelas de Sufixos
//!
//! Cada passo do stemmer consulta uma tabela ordenada. A ordem é parte da
//! semântica: a primeira entrada que casa vence (não o casamento mais longo),
//! por isso entradas mais longas ou mais específicas vêm antes das curtas.
//!
//! As tabelas são dados estáticos, não fluxo de controle, para que a ordem
//! possa ser auditada e testada isoladamente.

/// Comprimento mínimo (em caracteres) que um radical deve manter após uma remoção
pub const MIN_STEM_LENGTH: usize = 2;

/// Plurais árabes "quebrados": (padrão, substituição).
///
/// `یجات` precisa vir antes de `جات`, que é sufixo dele.
pub static BROKEN_PLURALS: &[(&str, &str)] = &[
    ("یجات", "ی"), // سبزیجات -> سبزی
    ("جات", ""),   // میوه‌جات -> میوه
];

/// Sufixos compostos (plural + possessivo), removidos de uma só vez
pub static COMPOUND_SUFFIXES: &[&str] = &[
    "هایمان", "هایتان", "هایشان", "هایم", "هایت", "هایش", "انمان", "انتان", "انشان",
];

/// Sufixos de plural
pub static PLURAL_SUFFIXES: &[&str] = &["های", "ها", "یان", "ان", "ات", "ین", "ون"];

/// Pronomes possessivos (tabela completa, inclui o `م` isolado)
pub static POSSESSIVE_SUFFIXES: &[&str] = &[
    "مان", "تان", "شان", "ایم", "اید", "اند", "یم", "ید", "ند", "ام", "ات", "اش", "م", "ت", "ش",
];

/// Possessivos sem o `م` isolado, que é ambíguo com a desinência verbal de 1ª pessoa.
///
/// Mesma ordem de [`POSSESSIVE_SUFFIXES`].
pub static POSSESSIVE_SUFFIXES_NO_MEEM: &[&str] = &[
    "مان", "تان", "شان", "ایم", "اید", "اند", "یم", "ید", "ند", "ام", "ات", "اش", "ت", "ش",
];

/// Comparativo e superlativo
pub static COMPARATIVE_SUFFIXES: &[&str] = &["ترین", "تری", "تر"];

/// Sufixos verbais (tempo/pessoa), mais longos primeiro.
///
/// Algumas entradas repetem-se (`ید`, `ند`, `نده`); como a primeira vence,
/// as repetições nunca são alcançadas, mas a ordem é preservada como está.
pub static VERB_SUFFIXES: &[&str] = &[
    "یدیم", "یدید", "یدند", "ندگان", "اندگان", "یده", "نده", "انده", "یدم", "یدی", "ید", "ندم",
    "ندی", "ند", "یم", "ید", "ند", "ده", "نده",
];

/// Desinências pessoais curtas, removidas com cautela
pub static PERSONAL_ENDINGS: &[&str] = &["م", "ی", "ند"];

/// Sufixos adverbiais e adjetivais
pub static ADVERB_SUFFIXES: &[&str] = &["انه", "وار", "ناک", "گانه"];

/// Segunda chance para plurais árabes
pub static ARABIC_PLURALS: &[&str] = &["ین", "ون", "ات"];

/// Possessivos que, colados logo após um `ه`, autorizam a limpeza final do `ه`
pub static HEH_POSSESSIVES: &[&str] = &["ام", "ات", "اش", "م", "ت", "ش"];

/// Terminações da palavra normalizada que indicam que o `ه` pertence à raiz
pub static HEH_KEEPING_ENDINGS: &[&str] = &["هها", "های"];
