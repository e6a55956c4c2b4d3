//! # Tokenizador para Persa
//!
//! Divide o texto bruto em tokens antes do stemming. Cada token preserva sua
//! posição original no texto (offset em bytes), de modo que o radical possa
//! ser exibido ao lado da palavra original sem alterar a formatação.
//!
//! ## Esquema de Tokenização
//!
//! - **Whitespace**: sequências máximas de caracteres que não são espaço.
//!   Mesma segmentação de [`crate::stemmer::stem_sentence`]; pontuação colada
//!   permanece no token.
//! - **Words**: segmentação de palavras UAX #29 (`unicode-segmentation`),
//!   que descarta pontuação. O ZWNJ continua dentro da palavra
//!   ("کتاب‌ها" é um único token).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use bidnlp_core::tokenizer::{tokenize_with_mode, TokenizerMode};
//!
//! let text = "کتاب‌ها، خانه‌ام!";
//!
//! // Whitespace: "کتاب‌ها،", "خانه‌ام!"
//! let tokens = tokenize_with_mode(text, TokenizerMode::Whitespace);
//! assert_eq!(tokens.len(), 2);
//!
//! // Words: "کتاب‌ها", "خانه‌ام"
//! let words = tokenize_with_mode(text, TokenizerMode::Words);
//! assert_eq!(words[0].text, "کتاب\u{200C}ها");
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::normalizer::is_separator;
use crate::stemmer::{PersianStemmer, Stemmer};

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token, sem normalização.
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Estratégias de tokenização disponíveis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerMode {
    /// **Padrão**: separa apenas por espaços (ver [`is_separator`]).
    #[default]
    Whitespace,
    /// **Palavras**: fronteiras de palavra Unicode, sem pontuação.
    Words,
}

/// Um token acompanhado do seu radical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StemmedToken {
    #[serde(flatten)]
    pub token: Token,
    pub stem: String,
}

/// Tokeniza um texto no modo padrão ([`TokenizerMode::Whitespace`]).
pub fn tokenize(text: &str) -> Vec<Token> {
    tokenize_with_mode(text, TokenizerMode::Whitespace)
}

/// Tokeniza um texto com o modo especificado.
pub fn tokenize_with_mode(text: &str, mode: TokenizerMode) -> Vec<Token> {
    let mut tokens = match mode {
        TokenizerMode::Whitespace => tokenize_whitespace(text),
        TokenizerMode::Words => tokenize_words(text),
    };

    // Re-indexa os tokens
    for (i, token) in tokens.iter_mut().enumerate() {
        token.index = i;
    }
    tokens
}

/// Tokeniza e reduz cada token com o [`PersianStemmer`].
pub fn stem_tokens(text: &str, mode: TokenizerMode) -> Vec<StemmedToken> {
    stem_tokens_with(text, mode, &PersianStemmer)
}

/// Tokeniza e reduz cada token com um stemmer qualquer.
pub fn stem_tokens_with(
    text: &str,
    mode: TokenizerMode,
    stemmer: &dyn Stemmer,
) -> Vec<StemmedToken> {
    tokenize_with_mode(text, mode)
        .into_iter()
        .map(|token| {
            let stem = stemmer.stem(&token.text);
            StemmedToken { token, stem }
        })
        .collect()
}

fn tokenize_whitespace(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current_start: Option<usize> = None;

    for (byte_pos, ch) in text.char_indices() {
        match (is_separator(ch), current_start) {
            (true, Some(start)) => {
                push_token(&mut tokens, text, start, byte_pos);
                current_start = None;
            }
            (false, None) => current_start = Some(byte_pos),
            _ => {}
        }
    }

    if let Some(start) = current_start {
        push_token(&mut tokens, text, start, text.len());
    }

    tokens
}

fn tokenize_words(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (start, word) in text.unicode_word_indices() {
        push_token(&mut tokens, text, start, start + word.len());
    }
    tokens
}

/// Adiciona o token `text[start..end]`
fn push_token(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    tokens.push(Token {
        text: text[start..end].to_string(),
        start,
        end,
        index: 0, // será atribuído depois
    });
}
