//! Lifecycle commands and worker replies
//!
//! The controller drives the engine with [`Command`]s over an async channel and
//! gets one [`Reply`] per command back. [`Command::from_json`] decodes the
//! controller page messages, e.g.
//! `{"cmd":"start","msg":"30","animation":"Alexa Thinking"}` or
//! `{"cmd":"set frame rate","msg":12}`.

use core::fmt::{self, Write as _};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use heapless::String;
use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};

use crate::frame::{EndCap, FrameError, STRIP_LEN, StripFrame, WHITE_COUNT};
use crate::intensity::Intensity;
use crate::pattern::Family;

/// Longest channel address accepted by `init`
pub const ADDRESS_CAPACITY: usize = 128;

/// Longest command name echoed back in an unsupported-command reply
pub const COMMAND_NAME_CAPACITY: usize = 32;

/// Longest reply message
pub const REPLY_CAPACITY: usize = 64;

const CMD_INIT: &str = "init";
const CMD_START: &str = "start";
const CMD_STOP: &str = "stop";
const CMD_SET_FRAME_RATE: &str = "set frame rate";
const CMD_CLEAR_LED_STRIP: &str = "clear led strip";
const CMD_SET_LED_STRIP: &str = "set led strip";
const CMD_UNINIT: &str = "uninit";

pub type Address = String<ADDRESS_CAPACITY>;
pub type CommandName = String<COMMAND_NAME_CAPACITY>;

/// Commands the engine understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the outbound channel
    Init { address: Address },
    /// Start (or restart) an animation
    ///
    /// Without a frame rate the last stored rate is used; without a family the
    /// configured default family plays.
    Start {
        frame_rate: Option<i32>,
        family: Option<Family>,
    },
    /// Stop the animation, keep the channel open
    Stop,
    /// Change the frame rate, re-arming the timer if running
    SetFrameRate(i32),
    /// Send a dark frame
    ClearLedStrip,
    /// Send an explicit frame as-is, once its values are in range
    SetLedStrip(StripFrame),
    /// Tear the session down
    Uninit,
    /// Anything else; echoed back to the controller
    Unsupported(CommandName),
}

/// Error decoding a controller message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// Not a JSON command object
    Malformed,
    /// `init` without an address
    MissingAddress,
    /// Address longer than [`ADDRESS_CAPACITY`]
    AddressTooLong,
    /// `set frame rate` without a rate
    MissingFrameRate,
    /// `set led strip` without strip values
    MissingStrip,
    /// Strip values do not form a frame
    InvalidStrip(FrameError),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed command"),
            Self::MissingAddress => f.write_str("init requires a channel address"),
            Self::AddressTooLong => {
                write!(f, "channel address exceeds {ADDRESS_CAPACITY} bytes")
            }
            Self::MissingFrameRate => f.write_str("set frame rate requires a frame rate"),
            Self::MissingStrip => f.write_str("set led strip requires strip values"),
            Self::InvalidStrip(err) => write!(f, "invalid led strip: {err}"),
        }
    }
}

impl From<FrameError> for ProtocolError {
    fn from(err: FrameError) -> Self {
        Self::InvalidStrip(err)
    }
}

/// Longest animation name kept while decoding
const FAMILY_NAME_CAPACITY: usize = 32;

/// Scratch space for unescaping one JSON string
const UNESCAPE_CAPACITY: usize = 2 * ADDRESS_CAPACITY;

/// JSON string copied out of the message, cut at `N` bytes
#[derive(Debug, Default)]
struct RawText<const N: usize> {
    text: String<N>,
    truncated: bool,
}

struct RawTextVisitor<const N: usize>;

impl<const N: usize> Visitor<'_> for RawTextVisitor<N> {
    type Value = RawText<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        let mut raw = RawText::default();
        for ch in value.chars() {
            if raw.text.push(ch).is_err() {
                raw.truncated = true;
                break;
            }
        }
        Ok(raw)
    }
}

impl<'de, const N: usize> Deserialize<'de> for RawText<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(RawTextVisitor)
    }
}

/// `msg` payload, sent as text or as a bare number
trait RawMessage {
    fn text(&self) -> Option<&RawText<ADDRESS_CAPACITY>>;

    fn frame_rate(&self) -> i32;
}

impl RawMessage for RawText<ADDRESS_CAPACITY> {
    fn text(&self) -> Option<&RawText<ADDRESS_CAPACITY>> {
        Some(self)
    }

    fn frame_rate(&self) -> i32 {
        parse_frame_rate(&self.text)
    }
}

impl RawMessage for f64 {
    fn text(&self) -> Option<&RawText<ADDRESS_CAPACITY>> {
        None
    }

    #[allow(clippy::cast_possible_truncation)]
    fn frame_rate(&self) -> i32 {
        // Saturating cast, fraction dropped
        *self as i32
    }
}

#[derive(Clone, Copy, Deserialize)]
struct RawEndCap {
    red: Intensity,
    green: Intensity,
    blue: Intensity,
}

impl From<RawEndCap> for EndCap {
    fn from(raw: RawEndCap) -> Self {
        EndCap::new(raw.red, raw.green, raw.blue)
    }
}

#[derive(Deserialize)]
struct RawCommand<M> {
    cmd: RawText<COMMAND_NAME_CAPACITY>,
    #[serde(default)]
    msg: Option<M>,
    #[serde(default)]
    animation: Option<RawText<FAMILY_NAME_CAPACITY>>,
    #[serde(default)]
    leds: Option<[Intensity; STRIP_LEN]>,
    #[serde(default)]
    left: Option<RawEndCap>,
    #[serde(default)]
    whites: Option<[Intensity; WHITE_COUNT]>,
    #[serde(default)]
    right: Option<RawEndCap>,
}

impl<M: RawMessage> RawCommand<M> {
    fn into_command(self) -> Result<Command, ProtocolError> {
        match self.cmd.text.as_str() {
            CMD_INIT => {
                let address = self
                    .msg
                    .as_ref()
                    .and_then(RawMessage::text)
                    .ok_or(ProtocolError::MissingAddress)?;
                if address.truncated {
                    return Err(ProtocolError::AddressTooLong);
                }
                Command::init(&address.text)
            }
            CMD_START => Ok(Command::Start {
                frame_rate: self.msg.as_ref().map(RawMessage::frame_rate),
                family: self.family(),
            }),
            CMD_STOP => Ok(Command::Stop),
            CMD_SET_FRAME_RATE => self
                .msg
                .as_ref()
                .map(|msg| Command::SetFrameRate(msg.frame_rate()))
                .ok_or(ProtocolError::MissingFrameRate),
            CMD_CLEAR_LED_STRIP => Ok(Command::ClearLedStrip),
            CMD_SET_LED_STRIP => self.strip_frame().map(Command::SetLedStrip),
            CMD_UNINIT => Ok(Command::Uninit),
            other => Ok(Command::unsupported(other)),
        }
    }

    fn family(&self) -> Option<Family> {
        let name = self.animation.as_ref()?.text.as_str();
        let family = Family::parse_from_str(name);
        if family.is_none() {
            warn!("[Command.from_json] unknown animation: {}, playing default", name);
        }
        family
    }

    fn strip_frame(&self) -> Result<StripFrame, ProtocolError> {
        if let Some(leds) = self.leds {
            return Ok(StripFrame::from_values(&leds)?);
        }
        match (self.left, self.whites, self.right) {
            (Some(left), Some(whites), Some(right)) => {
                Ok(StripFrame::from_parts(left.into(), whites, right.into())?)
            }
            _ => Err(ProtocolError::MissingStrip),
        }
    }
}

impl Command {
    /// `init` command for `address`
    pub fn init(address: &str) -> Result<Self, ProtocolError> {
        let mut buffer = Address::new();
        buffer
            .push_str(address)
            .map_err(|()| ProtocolError::AddressTooLong)?;
        Ok(Self::Init { address: buffer })
    }

    /// Unsupported command named `name`, truncated to [`COMMAND_NAME_CAPACITY`]
    pub fn unsupported(name: &str) -> Self {
        let mut buffer = CommandName::new();
        for ch in name.chars() {
            if buffer.push(ch).is_err() {
                break;
            }
        }
        Self::Unsupported(buffer)
    }

    /// Protocol name of the command
    pub fn name(&self) -> &str {
        match self {
            Self::Init { .. } => CMD_INIT,
            Self::Start { .. } => CMD_START,
            Self::Stop => CMD_STOP,
            Self::SetFrameRate(_) => CMD_SET_FRAME_RATE,
            Self::ClearLedStrip => CMD_CLEAR_LED_STRIP,
            Self::SetLedStrip(_) => CMD_SET_LED_STRIP,
            Self::Uninit => CMD_UNINIT,
            Self::Unsupported(name) => name.as_str(),
        }
    }

    /// Decode a controller message
    ///
    /// String escapes are resolved. `msg` may be a string or a bare number.
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        let mut scratch = [0u8; UNESCAPE_CAPACITY];
        // The decoder cannot peek at a value's type, so a numeric `msg` takes a second pass
        match serde_json_core::from_str_escaped::<RawCommand<RawText<ADDRESS_CAPACITY>>>(
            json,
            &mut scratch,
        ) {
            Ok((raw, _)) => raw.into_command(),
            Err(_) => {
                let (raw, _) =
                    serde_json_core::from_str_escaped::<RawCommand<f64>>(json, &mut scratch)
                        .map_err(|_| ProtocolError::Malformed)?;
                raw.into_command()
            }
        }
    }
}

/// Parse a frame rate the way the controller page does
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit. Text without leading digits yields 0.
pub fn parse_frame_rate(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i32::from(digit - b'0'))
        });
    if negative { -value } else { value }
}

/// Replies posted back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Initialized,
    Started,
    Stopped,
    FrameRateSet,
    LedStripCleared,
    LedStripSet,
    Uninitialized,
    /// Command needs an opened channel
    NotInitialized,
    /// Frame rate outside `1..=max_frame_rate`
    InvalidFrameRate(i32),
    /// Explicit strip with values above the 12-bit range
    InvalidLedStrip,
    UnsupportedCommand(CommandName),
}

impl Reply {
    /// Reply text as posted to the controller
    pub fn to_message(&self) -> String<REPLY_CAPACITY> {
        let mut message = String::new();
        // Every reply fits REPLY_CAPACITY
        let _ = write!(message, "{self}");
        message
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initialized => f.write_str("WORKER INITIALIZED"),
            Self::Started => f.write_str("WORKER STARTED"),
            Self::Stopped => f.write_str("WORKER STOPPED"),
            Self::FrameRateSet => f.write_str("WORKER FRAME RATE SET"),
            Self::LedStripCleared => f.write_str("WORKER LED STRIP CLEARED"),
            Self::LedStripSet => f.write_str("WORKER LED STRIP SET"),
            Self::Uninitialized => f.write_str("WORKER UNINITIALIZED"),
            Self::NotInitialized => f.write_str("WORKER NOT INITIALIZED"),
            Self::InvalidFrameRate(rate) => write!(f, "WORKER INVALID FRAME RATE: {rate}"),
            Self::InvalidLedStrip => f.write_str("WORKER INVALID LED STRIP"),
            Self::UnsupportedCommand(name) => write!(f, "WORKER UNSUPPORTED COMMAND: {name}"),
        }
    }
}

/// Type alias for the command channel
pub type CommandChannel<const SIZE: usize> = Channel<CriticalSectionRawMutex, Command, SIZE>;

/// Type alias for command sender
pub type CommandSender<'a, const SIZE: usize> =
    Sender<'a, CriticalSectionRawMutex, Command, SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a, const SIZE: usize> =
    Receiver<'a, CriticalSectionRawMutex, Command, SIZE>;

/// Type alias for the reply channel
pub type ReplyChannel<const SIZE: usize> = Channel<CriticalSectionRawMutex, Reply, SIZE>;

/// Type alias for reply sender
pub type ReplySender<'a, const SIZE: usize> = Sender<'a, CriticalSectionRawMutex, Reply, SIZE>;

/// Type alias for reply receiver
pub type ReplyReceiver<'a, const SIZE: usize> = Receiver<'a, CriticalSectionRawMutex, Reply, SIZE>;
