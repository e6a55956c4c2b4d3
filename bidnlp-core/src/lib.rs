//! # bidnlp-core — Stemmer Morfológico para o Persa (Farsi)
//!
//! Este crate implementa um stemmer baseado em regras: dada uma forma de
//! superfície, remove sufixos flexionais e derivacionais em uma sequência
//! ordenada de passos até chegar a um radical aproximado.
//!
//! Não há modelo estatístico nem garantia de correção linguística: é uma
//! heurística, determinística e sem estado.
//!
//! ## Arquitetura do Sistema
//!
//! 1.  **Entrada**: Texto bruto (String).
//! 2.  **Tokenização** ([`tokenizer`]): Divide o texto em tokens com offsets.
//! 3.  **Normalização** ([`normalizer`]): Remove ZWNJ e diacríticos, converte letras árabes.
//! 4.  **Stemming** ([`stemmer`]): Onze passos sobre as tabelas de [`suffixes`].
//! 5.  **Saída**: Radicais, opcionalmente com o rastro dos passos ([`trace`]).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use bidnlp_core::{stem, stem_sentence, stem_with_trace, Pass};
//!
//! assert_eq!(stem("کتاب‌ها"), "کتاب");
//! assert_eq!(stem_sentence("کتاب‌ها خانه‌ام"), vec!["کتاب", "خان"]);
//!
//! // O rastro mostra quais passos mudaram a palavra
//! let trace = stem_with_trace("سبزیجات");
//! assert_eq!(trace.stem, "سبزی");
//! assert!(trace.was_skipped(Pass::PersonalEnding));
//! ```

pub mod normalizer;
pub mod stemmer;
pub mod suffixes;
pub mod tokenizer;
pub mod trace;

pub use normalizer::normalize;
pub use stemmer::{
    stem, stem_batch, stem_sentence, stem_with_trace, IdentityStemmer, PersianStemmer, Stemmer,
};
pub use suffixes::MIN_STEM_LENGTH;
pub use tokenizer::{stem_tokens, tokenize, tokenize_with_mode, StemmedToken, Token, TokenizerMode};
pub use trace::{DerivationFlags, Pass, PassStep, StemTrace};
