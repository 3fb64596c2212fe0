//! Shared test infrastructure for light bar integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use lightbar_animator::{Transport, TransportError};

/// Transport that records every call for inspection
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub opened: Vec<String>,
    pub sent: Vec<String>,
    pub closes: usize,
    pub fail_open: bool,
    pub fail_send: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_send() -> Self {
        Self {
            fail_send: true,
            ..Self::default()
        }
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.sent.last().map(String::as_str)
    }
}

impl Transport for RecordingTransport {
    fn open(&mut self, address: &str) -> Result<(), TransportError> {
        self.opened.push(address.to_string());
        if self.fail_open {
            return Err(TransportError::ConnectFailed);
        }
        Ok(())
    }

    fn send(&mut self, message: &str) -> Result<(), TransportError> {
        if self.fail_send {
            return Err(TransportError::SendFailed);
        }
        self.sent.push(message.to_string());
        Ok(())
    }

    fn close(&mut self) {
        self.closes += 1;
    }
}

/// Extract the `strip` payload of a wire message as numbers
pub fn strip_values(message: &str) -> Vec<u16> {
    let start = message.find("\"strip\":\"").expect("strip field") + "\"strip\":\"".len();
    let end = message[start..].find('"').expect("strip end") + start;
    message[start..end]
        .split('-')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().expect("numeric value"))
        .collect()
}
