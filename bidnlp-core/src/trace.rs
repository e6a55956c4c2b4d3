//! # Rastro dos Passos do Stemmer
//!
//! O stemmer aplica onze passos em ordem fixa. Para depuração (e para a
//! interface web) é útil ver quais passos realmente alteraram a palavra,
//! quais foram bloqueados por uma guarda, e quais marcadores de derivação
//! foram calculados no caminho.
//!
//! O rastro é produzido pela mesma função que calcula o radical
//! ([`crate::stemmer::PersianStemmer::stem_with_trace`]), então nunca diverge
//! do resultado de `stem`.

use serde::{Deserialize, Serialize};

/// Os passos do pipeline, na ordem em que são aplicados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    /// **1**: Plurais quebrados (سبزیجات → سبزی, میوه‌جات → میوه).
    BrokenPlural,
    /// **2**: Sufixos compostos plural + possessivo (هایمان, انشان...).
    CompoundSuffix,
    /// **3**: Possessivos, exceto o `م` isolado.
    Possessive,
    /// **4**: Plurais regulares (ها, ان, ات...).
    Plural,
    /// **5**: Possessivos de novo, para o que ficou exposto após o plural.
    PossessiveAfterPlural,
    /// **6**: Comparativo e superlativo (تر, ترین).
    Comparative,
    /// **7**: Sufixos verbais de tempo/pessoa.
    VerbSuffix,
    /// **8**: Desinências pessoais curtas (م, ی, ند). Tem guarda.
    PersonalEnding,
    /// **9**: Sufixos adverbiais e adjetivais (انه, وار, ناک).
    AdverbSuffix,
    /// **10**: Segunda chance para plurais árabes (ین, ون, ات).
    ArabicPlural,
    /// **11**: Limpeza do `ه` final exposto por um possessivo.
    TrailingHeh,
}

impl Pass {
    /// Todos os passos, na ordem do pipeline.
    pub const ALL: [Pass; 11] = [
        Pass::BrokenPlural,
        Pass::CompoundSuffix,
        Pass::Possessive,
        Pass::Plural,
        Pass::PossessiveAfterPlural,
        Pass::Comparative,
        Pass::VerbSuffix,
        Pass::PersonalEnding,
        Pass::AdverbSuffix,
        Pass::ArabicPlural,
        Pass::TrailingHeh,
    ];
}

/// Marcadores transitórios calculados no passo de plural quebrado.
///
/// Existem apenas durante uma chamada de `stem`; não há estado entre chamadas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationFlags {
    /// A palavra mudou e o resultado termina em ی (caso سبزیجات → سبزی).
    /// Bloqueia o passo de desinências pessoais.
    pub broken_plural_applied: bool,
    /// A palavra mudou, terminava em جات e o resultado não termina em ی
    /// (caso میوه‌جات → میوه). Preserva o `ه` final.
    pub has_jaat_pattern: bool,
}

/// Um passo que alterou a forma de trabalho.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStep {
    pub pass: Pass,
    pub before: String,
    pub after: String,
}

/// Resultado completo de uma chamada de stemming com rastro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemTrace {
    /// A palavra como foi recebida.
    pub input: String,
    /// A palavra após [`crate::normalizer::normalize`].
    pub normalized: String,
    /// O radical final.
    pub stem: String,
    pub flags: DerivationFlags,
    /// Somente os passos que mudaram a palavra, em ordem.
    pub steps: Vec<PassStep>,
    /// Passos cuja guarda impediu a execução.
    pub skipped: Vec<Pass>,
}

impl StemTrace {
    /// Indica se o passo alterou a palavra.
    pub fn changed_by(&self, pass: Pass) -> bool {
        self.steps.iter().any(|s| s.pass == pass)
    }

    /// Indica se o passo foi bloqueado por sua guarda.
    pub fn was_skipped(&self, pass: Pass) -> bool {
        self.skipped.contains(&pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_serializes_snake_case() {
        let json = serde_json::to_string(&Pass::PossessiveAfterPlural).unwrap();
        assert_eq!(json, "\"possessive_after_plural\"");
        let back: Pass = serde_json::from_str("\"trailing_heh\"").unwrap();
        assert_eq!(back, Pass::TrailingHeh);
    }

    #[test]
    fn test_trace_queries() {
        let trace = StemTrace {
            input: "کتاب‌ها".to_string(),
            normalized: "کتابها".to_string(),
            stem: "کتاب".to_string(),
            flags: DerivationFlags::default(),
            steps: vec![PassStep {
                pass: Pass::Plural,
                before: "کتابها".to_string(),
                after: "کتاب".to_string(),
            }],
            skipped: vec![],
        };
        assert!(trace.changed_by(Pass::Plural));
        assert!(!trace.changed_by(Pass::Possessive));
        assert!(!trace.was_skipped(Pass::PersonalEnding));
    }
}
