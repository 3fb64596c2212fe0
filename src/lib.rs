#![no_std]

#[macro_use]
mod log;

pub mod command;
pub mod end_cap;
pub mod engine;
pub mod frame;
pub mod intensity;
pub mod pattern;
pub mod renderer;
pub mod sequence;
pub mod timer;
pub mod transport;

pub use command::{
    Command, CommandChannel, CommandReceiver, CommandSender, ProtocolError, Reply, ReplyChannel,
    ReplyReceiver, ReplySender,
};
pub use end_cap::{EndCapColor, UnsupportedColor};
pub use engine::{Engine, EngineConfig, EngineState, InvalidFrameRate};
pub use frame::{EndCap, FrameError, StripFrame, WhiteLeds};
pub use intensity::Intensity;
pub use pattern::{Family, Pattern, PatternSlot, render_pattern};
pub use renderer::FrameRenderer;
pub use sequence::SequenceTable;
pub use timer::PeriodicTimer;
pub use transport::{Transport, TransportError, WireError, encode_frame};

pub use embassy_time::{Duration, Instant};
