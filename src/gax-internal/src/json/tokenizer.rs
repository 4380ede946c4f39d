// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A pull tokenizer for JSON documents.
//!
//! The tokenizer validates the structure of the document as it goes. String
//! and number tokens are decoded with `serde_json`.

use serde_json::Number;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    FieldName(String),
    String(String),
    Number(Number),
    Bool(bool),
    Null,
}

impl Token {
    /// A short description, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StartObject => "start of object",
            Self::EndObject => "end of object",
            Self::StartArray => "start of array",
            Self::EndArray => "end of array",
            Self::FieldName(_) => "field name",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TokenizerError {
    #[error("unexpected end of document")]
    UnexpectedEof,
    #[error("unexpected character {found:?} at offset {offset}")]
    Unexpected { found: char, offset: usize },
    #[error("trailing characters at offset {0}")]
    Trailing(usize),
    #[error("invalid string at offset {offset}: {source}")]
    InvalidString {
        offset: usize,
        source: serde_json::Error,
    },
    #[error("invalid number at offset {offset}: {source}")]
    InvalidNumber {
        offset: usize,
        source: serde_json::Error,
    },
}

type Result<T> = std::result::Result<T, TokenizerError>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    /// After `{`: a name or `}`.
    ObjectStart,
    /// After `,` in an object: a name.
    ObjectName,
    /// After `name:`: a value.
    ObjectValue,
    /// After a member value: `,` or `}`.
    ObjectNext,
    /// After `[`: a value or `]`.
    ArrayStart,
    /// After `,` in an array: a value.
    ArrayValue,
    /// After an element: `,` or `]`.
    ArrayNext,
}

#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    stack: Vec<State>,
    root_done: bool,
    peeked: Option<Option<Token>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            stack: Vec::new(),
            root_done: false,
            peeked: None,
        }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<&Token>> {
        if self.peeked.is_none() {
            let token = self.read()?;
            self.peeked = Some(token);
        }
        Ok(self.peeked.as_ref().and_then(Option::as_ref))
    }

    /// Returns the next token, `None` at the end of the document.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.read(),
        }
    }

    fn read(&mut self) -> Result<Option<Token>> {
        loop {
            self.skip_whitespace();
            let Some(state) = self.stack.last().copied() else {
                if self.pos >= self.input.len() {
                    return Ok(None);
                }
                if self.root_done {
                    return Err(TokenizerError::Trailing(self.pos));
                }
                return self.value().map(Some);
            };
            let c = self.current()?;
            match (state, c) {
                (State::ObjectStart, b'}') | (State::ObjectNext, b'}') => {
                    self.pos += 1;
                    self.close();
                    return Ok(Some(Token::EndObject));
                }
                (State::ArrayStart, b']') | (State::ArrayNext, b']') => {
                    self.pos += 1;
                    self.close();
                    return Ok(Some(Token::EndArray));
                }
                (State::ObjectNext, b',') => {
                    self.pos += 1;
                    self.set_state(State::ObjectName);
                }
                (State::ArrayNext, b',') => {
                    self.pos += 1;
                    self.set_state(State::ArrayValue);
                }
                (State::ObjectStart, b'"') | (State::ObjectName, b'"') => {
                    let name = self.string()?;
                    self.skip_whitespace();
                    match self.current()? {
                        b':' => self.pos += 1,
                        _ => return Err(self.unexpected()),
                    }
                    self.set_state(State::ObjectValue);
                    return Ok(Some(Token::FieldName(name)));
                }
                (State::ObjectValue, _) | (State::ArrayStart, _) | (State::ArrayValue, _) => {
                    return self.value().map(Some);
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn value(&mut self) -> Result<Token> {
        let token = match self.current()? {
            b'{' => {
                self.pos += 1;
                self.value_done();
                self.stack.push(State::ObjectStart);
                return Ok(Token::StartObject);
            }
            b'[' => {
                self.pos += 1;
                self.value_done();
                self.stack.push(State::ArrayStart);
                return Ok(Token::StartArray);
            }
            b'"' => Token::String(self.string()?),
            b't' => self.literal("true", Token::Bool(true))?,
            b'f' => self.literal("false", Token::Bool(false))?,
            b'n' => self.literal("null", Token::Null)?,
            b'-' | b'0'..=b'9' => Token::Number(self.number()?),
            _ => return Err(self.unexpected()),
        };
        self.value_done();
        Ok(token)
    }

    fn string(&mut self) -> Result<String> {
        let start = self.pos;
        let mut end = start + 1;
        loop {
            match self.input.get(end) {
                None => return Err(TokenizerError::UnexpectedEof),
                Some(b'\\') => end += 2,
                Some(b'"') => break,
                Some(_) => end += 1,
            }
        }
        self.pos = end + 1;
        serde_json::from_slice(&self.input[start..self.pos])
            .map_err(|source| TokenizerError::InvalidString {
                offset: start,
                source,
            })
    }

    fn number(&mut self) -> Result<Number> {
        let start = self.pos;
        while let Some(c) = self.input.get(self.pos) {
            match c {
                b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E' => self.pos += 1,
                _ => break,
            }
        }
        serde_json::from_slice(&self.input[start..self.pos])
            .map_err(|source| TokenizerError::InvalidNumber {
                offset: start,
                source,
            })
    }

    fn literal(&mut self, text: &'static str, token: Token) -> Result<Token> {
        let rest = &self.input[self.pos..];
        if rest.starts_with(text.as_bytes()) {
            self.pos += text.len();
            return Ok(token);
        }
        if text.as_bytes().starts_with(rest) {
            return Err(TokenizerError::UnexpectedEof);
        }
        Err(self.unexpected())
    }

    /// Marks the value in the enclosing container (or the root) as complete.
    fn value_done(&mut self) {
        match self.stack.last_mut() {
            None => self.root_done = true,
            Some(s) => {
                *s = match s {
                    State::ArrayStart | State::ArrayValue | State::ArrayNext => State::ArrayNext,
                    _ => State::ObjectNext,
                }
            }
        }
    }

    fn close(&mut self) {
        self.stack.pop();
    }

    fn set_state(&mut self, state: State) {
        if let Some(s) = self.stack.last_mut() {
            *s = state;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.input.get(self.pos) {
            self.pos += 1;
        }
    }

    fn current(&self) -> Result<u8> {
        self.input
            .get(self.pos)
            .copied()
            .ok_or(TokenizerError::UnexpectedEof)
    }

    fn unexpected(&self) -> TokenizerError {
        let found = std::str::from_utf8(&self.input[self.pos..])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::from(self.input[self.pos]));
        TokenizerError::Unexpected {
            found,
            offset: self.pos,
        }
    }
}
