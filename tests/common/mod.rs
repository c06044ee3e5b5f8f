//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use skos_analysis::analysis::thesaurus::ThesaurusEngine;
use skos_analysis::analysis::token::{Token, TokenStream};
use skos_analysis::error::{Result, SkosError};

/// A thesaurus answering from fixed tables and recording every call.
///
/// Calls are logged as `"method(argument)"`. A single `(method, argument)`
/// pair can be configured to fail.
#[derive(Default)]
pub struct MockThesaurus {
    answers: HashMap<(&'static str, String), Vec<String>>,
    fail_on: Option<(&'static str, String)>,
    calls: Mutex<Vec<String>>,
}

impl MockThesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, method: &'static str, argument: &str, values: &[&str]) -> Self {
        self.answers.insert(
            (method, argument.to_string()),
            values.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn fail_on(mut self, method: &'static str, argument: &str) -> Self {
        self.fail_on = Some((method, argument.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls to `method`, by argument, in call order.
    pub fn calls_to(&self, method: &str) -> Vec<String> {
        let prefix = format!("{method}(");
        self.calls()
            .into_iter()
            .filter_map(|call| {
                call.strip_prefix(&prefix)
                    .and_then(|rest| rest.strip_suffix(')'))
                    .map(str::to_string)
            })
            .collect()
    }

    fn lookup(&self, method: &'static str, argument: &str) -> Result<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{method}({argument})"));

        if let Some((fail_method, fail_argument)) = &self.fail_on {
            if *fail_method == method && fail_argument == argument {
                return Err(SkosError::thesaurus(format!(
                    "{method} failed for '{argument}'"
                )));
            }
        }

        Ok(self
            .answers
            .get(&(method, argument.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

impl ThesaurusEngine for MockThesaurus {
    fn find_concepts(&self, label: &str) -> Result<Vec<String>> {
        self.lookup("find_concepts", label)
    }

    fn pref_labels(&self, uri: &str) -> Result<Vec<String>> {
        self.lookup("pref_labels", uri)
    }

    fn alt_labels(&self, uri: &str) -> Result<Vec<String>> {
        self.lookup("alt_labels", uri)
    }

    fn hidden_labels(&self, uri: &str) -> Result<Vec<String>> {
        self.lookup("hidden_labels", uri)
    }

    fn broader_concepts(&self, uri: &str) -> Result<Vec<String>> {
        self.lookup("broader_concepts", uri)
    }

    fn broader_transitive_concepts(&self, uri: &str) -> Result<Vec<String>> {
        self.lookup("broader_transitive_concepts", uri)
    }

    fn narrower_concepts(&self, uri: &str) -> Result<Vec<String>> {
        self.lookup("narrower_concepts", uri)
    }

    fn narrower_transitive_concepts(&self, uri: &str) -> Result<Vec<String>> {
        self.lookup("narrower_transitive_concepts", uri)
    }
}

/// Tokens for space-separated words, with character offsets.
pub fn words(words: &[&str]) -> Vec<Token> {
    let mut offset = 0;
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let len = word.chars().count();
            let token = Token::with_offsets(*word, i, offset, offset + len);
            offset += len + 1;
            token
        })
        .collect()
}

/// A stream yielding the given items verbatim, errors included.
pub fn stream_of(items: Vec<Result<Token>>) -> TokenStream {
    Box::new(items.into_iter())
}

pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
