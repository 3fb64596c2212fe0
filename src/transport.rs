//! Outbound command channel
//!
//! Every frame is sent to the light bar as one JSON command:
//!
//! ```text
//! {"event":"cmd","type":"led","action":"set strip","strip":"0-0-0-4095-...-0-"}
//! ```
//!
//! `strip` lists the 19 channel values in wire order, each followed by `-`.

use core::fmt::{self, Write as _};

use heapless::String;
use serde::Serialize;

use crate::frame::{STRIP_LEN, StripFrame};

/// Longest `strip` payload: 19 four-digit values, each with a separator
pub const STRIP_TEXT_CAPACITY: usize = STRIP_LEN * 5;

/// Longest encoded command
pub const WIRE_CAPACITY: usize = 192;

const EVENT_CMD: &str = "cmd";
const TYPE_LED: &str = "led";
const ACTION_SET_STRIP: &str = "set strip";

/// Error reported by a [`Transport`] implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The channel could not be opened
    ConnectFailed,
    /// The channel is not open
    NotConnected,
    /// The message could not be handed to the channel
    SendFailed,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectFailed => f.write_str("failed to open command channel"),
            Self::NotConnected => f.write_str("command channel is not open"),
            Self::SendFailed => f.write_str("failed to send command"),
        }
    }
}

/// Error encoding a frame into a wire command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Encoded command does not fit [`WIRE_CAPACITY`]
    Overflow,
    /// Serializer produced invalid output
    Encoding,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "wire command exceeds {WIRE_CAPACITY} bytes"),
            Self::Encoding => f.write_str("wire command is not valid UTF-8"),
        }
    }
}

/// Abstract command channel to the light bar
///
/// Sends are fire-and-forget: implementations hand the message over and
/// return, delivery and back-pressure are their own concern.
pub trait Transport {
    /// Open the channel to `address`
    fn open(&mut self, address: &str) -> Result<(), TransportError>;

    /// Send one encoded command
    fn send(&mut self, message: &str) -> Result<(), TransportError>;

    /// Close the channel
    fn close(&mut self);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn open(&mut self, address: &str) -> Result<(), TransportError> {
        (**self).open(address)
    }

    fn send(&mut self, message: &str) -> Result<(), TransportError> {
        (**self).send(message)
    }

    fn close(&mut self) {
        (**self).close();
    }
}

#[derive(Serialize)]
struct LedCommand<'a> {
    event: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    action: &'a str,
    strip: &'a str,
}

/// Format the `strip` payload of a frame
pub fn strip_text(frame: &StripFrame) -> Result<String<STRIP_TEXT_CAPACITY>, WireError> {
    let mut text = String::new();
    for value in frame.values() {
        write!(text, "{value}-").map_err(|_| WireError::Overflow)?;
    }
    Ok(text)
}

/// Encode a frame into the `set strip` command
pub fn encode_frame(frame: &StripFrame) -> Result<String<WIRE_CAPACITY>, WireError> {
    let strip = strip_text(frame)?;
    let command = LedCommand {
        event: EVENT_CMD,
        kind: TYPE_LED,
        action: ACTION_SET_STRIP,
        strip: strip.as_str(),
    };

    let mut buffer = [0u8; WIRE_CAPACITY];
    let len = serde_json_core::to_slice(&command, &mut buffer).map_err(|_| WireError::Overflow)?;
    let json = core::str::from_utf8(&buffer[..len]).map_err(|_| WireError::Encoding)?;

    let mut message = String::new();
    message.push_str(json).map_err(|()| WireError::Overflow)?;
    Ok(message)
}
