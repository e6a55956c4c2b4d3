//! # Stemmer Persa Baseado em Regras
//!
//! Reduz uma forma de superfície a um radical aproximado removendo sufixos
//! flexionais e derivacionais em uma sequência fixa de passos.
//!
//! ## Pipeline
//!
//! A palavra é normalizada ([`normalize`]) e depois atravessa os passos
//! listados em [`Pass`], sempre nesta ordem. Cada passo remove **no máximo um**
//! sufixo da sua tabela ([`crate::suffixes`]), e a primeira entrada que casa
//! vence. Nenhuma remoção pode deixar o radical com menos de
//! [`MIN_STEM_LENGTH`] caracteres.
//!
//! O passo de plural quebrado calcula [`DerivationFlags`], que depois
//! controlam o passo de desinências pessoais e a limpeza do `ه` final.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use bidnlp_core::stemmer::{stem, stem_sentence};
//!
//! assert_eq!(stem("کتاب\u{200C}ها"), "کتاب");
//! assert_eq!(stem("سبزیجات"), "سبزی");
//! assert_eq!(stem_sentence("کتاب\u{200C}ها خانه\u{200C}ام"), vec!["کتاب", "خان"]);
//! ```

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::normalizer::{is_separator, normalize};
use crate::suffixes::{
    ADVERB_SUFFIXES, ARABIC_PLURALS, BROKEN_PLURALS, COMPARATIVE_SUFFIXES, COMPOUND_SUFFIXES,
    HEH_KEEPING_ENDINGS, HEH_POSSESSIVES, MIN_STEM_LENGTH, PERSONAL_ENDINGS, PLURAL_SUFFIXES,
    POSSESSIVE_SUFFIXES_NO_MEEM, VERB_SUFFIXES,
};
use crate::trace::{DerivationFlags, Pass, PassStep, StemTrace};

const HEH: char = 'ه';
const YEH: char = 'ی';

/// Interface comum de stemmers: `stem(token) -> token`.
///
/// Permite compor o stemmer persa com outros (ex: um stemmer inglês) atrás
/// da mesma abstração.
pub trait Stemmer: Send + Sync {
    /// Reduz uma palavra ao seu radical.
    fn stem(&self, word: &str) -> String;

    /// Nome do stemmer, para logs.
    fn name(&self) -> &'static str;
}

/// Stemmer que devolve a palavra intacta.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// O stemmer persa.
///
/// Não tem estado: todas as tabelas são estáticas, então uma mesma instância
/// pode ser usada por várias threads sem sincronização.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersianStemmer;

impl PersianStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Reduz uma palavra ao radical. Função total: entrada vazia devolve vazio.
    pub fn stem(&self, word: &str) -> String {
        self.stem_with_trace(word).stem
    }

    /// Divide a frase por espaços (ver [`is_separator`]) e reduz cada token,
    /// preservando a ordem.
    ///
    /// Pontuação colada às palavras não é removida aqui.
    pub fn stem_sentence(&self, sentence: &str) -> Vec<String> {
        sentence
            .split(is_separator)
            .filter(|w| !w.is_empty())
            .map(|w| self.stem(w))
            .collect()
    }

    /// Reduz um lote de palavras em paralelo (Rayon). A ordem é preservada.
    pub fn stem_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words.par_iter().map(|w| self.stem(w.as_ref())).collect()
    }

    /// Executa o pipeline completo e devolve o radical junto com o rastro.
    pub fn stem_with_trace(&self, word: &str) -> StemTrace {
        let normalized = normalize(word);
        let mut recorder = Recorder::default();

        if normalized.is_empty() {
            return recorder.finish(word, normalized, String::new(), DerivationFlags::default());
        }

        let original = normalized.as_str();

        // === Passo 1: plural quebrado + marcadores ===
        let mut current = recorder.apply(Pass::BrokenPlural, original.to_string(), |w| {
            remove_broken_plural(w, BROKEN_PLURALS)
        });
        let changed = current != original;
        let flags = DerivationFlags {
            broken_plural_applied: changed && current.ends_with(YEH),
            has_jaat_pattern: changed && original.ends_with("جات") && !current.ends_with(YEH),
        };

        // === Passos 2 a 7 ===
        current = recorder.apply(Pass::CompoundSuffix, current, |w| {
            remove_suffix(w, COMPOUND_SUFFIXES)
        });
        current = recorder.apply(Pass::Possessive, current, |w| {
            remove_suffix(w, POSSESSIVE_SUFFIXES_NO_MEEM)
        });
        current = recorder.apply(Pass::Plural, current, |w| remove_suffix(w, PLURAL_SUFFIXES));
        current = recorder.apply(Pass::PossessiveAfterPlural, current, |w| {
            remove_suffix(w, POSSESSIVE_SUFFIXES_NO_MEEM)
        });
        current = recorder.apply(Pass::Comparative, current, |w| {
            remove_suffix(w, COMPARATIVE_SUFFIXES)
        });
        current = recorder.apply(Pass::VerbSuffix, current, |w| remove_suffix(w, VERB_SUFFIXES));

        // === Passo 8: desinências pessoais, com guarda ===
        if !flags.broken_plural_applied && char_len(&current) >= 3 {
            current = recorder.apply(Pass::PersonalEnding, current, |w| {
                remove_suffix(w, PERSONAL_ENDINGS)
            });
        } else {
            debug!(word = %current, ?flags, "desinências pessoais bloqueadas pela guarda");
            recorder.skipped.push(Pass::PersonalEnding);
        }

        // === Passos 9 a 11 ===
        current = recorder.apply(Pass::AdverbSuffix, current, |w| {
            remove_suffix(w, ADVERB_SUFFIXES)
        });
        current = recorder.apply(Pass::ArabicPlural, current, |w| remove_suffix(w, ARABIC_PLURALS));
        current = recorder.apply(Pass::TrailingHeh, current, |w| {
            remove_trailing_heh(w, original, &flags)
        });

        let stem = if current.is_empty() {
            original.to_string()
        } else {
            current
        };
        recorder.finish(word, normalized, stem, flags)
    }
}

impl Stemmer for PersianStemmer {
    fn stem(&self, word: &str) -> String {
        self.stem_with_trace(word).stem
    }

    fn name(&self) -> &'static str {
        "persian"
    }
}

/// Acumula os passos que alteraram a palavra
#[derive(Default)]
struct Recorder {
    steps: Vec<PassStep>,
    skipped: Vec<Pass>,
}

impl Recorder {
    fn apply(&mut self, pass: Pass, word: String, rule: impl FnOnce(&str) -> String) -> String {
        let next = rule(&word);
        if next != word {
            trace!(?pass, before = %word, after = %next, "passo aplicado");
            self.steps.push(PassStep {
                pass,
                before: word,
                after: next.clone(),
            });
        }
        next
    }

    fn finish(
        self,
        input: &str,
        normalized: String,
        stem: String,
        flags: DerivationFlags,
    ) -> StemTrace {
        StemTrace {
            input: input.to_string(),
            normalized,
            stem,
            flags,
            steps: self.steps,
            skipped: self.skipped,
        }
    }
}

/// Comprimento em caracteres (não em bytes)
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Remove o primeiro sufixo da tabela que casa e mantém o radical com pelo
/// menos [`MIN_STEM_LENGTH`] caracteres. Sem casamento válido, devolve a palavra.
pub fn remove_suffix(word: &str, suffixes: &[&str]) -> String {
    let len = char_len(word);
    for suffix in suffixes {
        if let Some(stem) = word.strip_suffix(*suffix) {
            if len - char_len(suffix) >= MIN_STEM_LENGTH {
                return stem.to_string();
            }
        }
    }
    word.to_string()
}

/// Substitui o primeiro padrão de plural quebrado que casa pela sua
/// substituição, desde que o resultado mantenha [`MIN_STEM_LENGTH`] caracteres.
///
/// Se o padrão casa mas o resultado fica curto demais, os padrões seguintes
/// ainda são tentados.
pub fn remove_broken_plural(word: &str, patterns: &[(&str, &str)]) -> String {
    for (pattern, replacement) in patterns {
        if let Some(stem) = word.strip_suffix(*pattern) {
            if char_len(stem) + char_len(replacement) >= MIN_STEM_LENGTH {
                return format!("{}{}", stem, replacement);
            }
        }
    }
    word.to_string()
}

/// Limpeza final: remove o `ه` que ficou exposto quando um possessivo estava
/// colado diretamente nele (خانه‌ام → خانه → خان).
fn remove_trailing_heh(word: &str, original: &str, flags: &DerivationFlags) -> String {
    let keeps_heh = flags.has_jaat_pattern
        || HEH_KEEPING_ENDINGS.iter().any(|e| original.ends_with(*e));

    if word == original || !word.ends_with(HEH) || char_len(word) <= 2 || keeps_heh {
        return word.to_string();
    }

    let had_possessive = HEH_POSSESSIVES.iter().any(|s| {
        original
            .strip_suffix(*s)
            .map(|rest| rest.ends_with(HEH))
            .unwrap_or(false)
    });
    if !had_possessive {
        return word.to_string();
    }

    let trimmed = &word[..word.len() - HEH.len_utf8()];
    if char_len(trimmed) >= MIN_STEM_LENGTH {
        trimmed.to_string()
    } else {
        word.to_string()
    }
}

/// Reduz uma palavra com o [`PersianStemmer`].
pub fn stem(word: &str) -> String {
    PersianStemmer.stem(word)
}

/// Reduz cada palavra de uma frase separada por espaços.
pub fn stem_sentence(sentence: &str) -> Vec<String> {
    PersianStemmer.stem_sentence(sentence)
}

/// Reduz uma palavra e devolve o rastro dos passos.
pub fn stem_with_trace(word: &str) -> StemTrace {
    PersianStemmer.stem_with_trace(word)
}

/// Reduz um lote de palavras em paralelo.
pub fn stem_batch<S: AsRef<str> + Sync>(words: &[S]) -> Vec<String> {
    PersianStemmer.stem_batch(words)
}
