//! Animation engine - the session state machine
//!
//! One [`Engine`] owns everything a session touches: the transport, the
//! sequence cursors, the strip frame and the frame timer. Commands and ticks
//! are processed one at a time, either synchronously through
//! [`Engine::handle`] / [`Engine::poll`] or by [`Engine::run`] inside an
//! embassy task.

use core::fmt;

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};

use crate::command::{Command, CommandReceiver, Reply, ReplySender};
use crate::frame::StripFrame;
use crate::pattern::Family;
use crate::renderer::FrameRenderer;
use crate::sequence::SequenceTable;
use crate::timer::PeriodicTimer;
use crate::transport::{Transport, encode_frame};

/// Frame rate used until a command sets one
pub const DEFAULT_FRAME_RATE: u32 = 1;

/// Highest frame rate accepted by default
pub const MAX_FRAME_RATE: u32 = 1000;

/// Frame rate outside `1..=max_frame_rate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidFrameRate(pub i32);

impl fmt::Display for InvalidFrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid frame rate: {}", self.0)
    }
}

/// Configuration for the animation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Frame rate for a `start` without one
    pub frame_rate: u32,
    /// Upper bound for requested frame rates
    pub max_frame_rate: u32,
    /// Family played when `start` names none or an unknown one
    pub default_family: Family,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            max_frame_rate: MAX_FRAME_RATE,
            default_family: Family::default(),
        }
    }
}

impl EngineConfig {
    /// Check a requested frame rate against `1..=max_frame_rate`
    pub fn validate_frame_rate(&self, raw: i32) -> Result<u32, InvalidFrameRate> {
        u32::try_from(raw)
            .ok()
            .filter(|rate| (1..=self.max_frame_rate).contains(rate))
            .ok_or(InvalidFrameRate(raw))
    }
}

/// Timer period for a validated frame rate
pub fn frame_period(frame_rate: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(frame_rate.max(1)))
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Created, channel not opened yet
    #[default]
    Uninitialized,
    /// Channel open, no animation
    Ready,
    /// Animation playing
    Running(Family),
    /// Session torn down, commands are ignored
    Closed,
}

impl EngineState {
    /// True once the channel has been opened and until it is closed
    pub fn is_open(self) -> bool {
        matches!(self, Self::Ready | Self::Running(_))
    }
}

/// Animation engine - the main orchestrator
pub struct Engine<T: Transport> {
    // External dependencies and configuration
    transport: T,
    config: EngineConfig,

    // Session state
    state: EngineState,
    frame_rate: u32,
    frame_number: u32,
    timer: PeriodicTimer,

    // Internal dependencies
    sequences: SequenceTable,
    renderer: FrameRenderer,
}

impl<T: Transport> Engine<T> {
    pub fn new(transport: T, config: EngineConfig) -> Self {
        Self {
            transport,
            config,
            state: EngineState::Uninitialized,
            frame_rate: config.frame_rate,
            frame_number: 0,
            timer: PeriodicTimer::new(),
            sequences: SequenceTable::new(),
            renderer: FrameRenderer::new(),
        }
    }

    /// Process one command
    ///
    /// Returns the reply for the controller, or `None` once the session is
    /// closed.
    pub fn handle(&mut self, command: Command, now: Instant) -> Option<Reply> {
        if self.state == EngineState::Closed {
            info!("[Engine.handle] session closed, ignoring {}", command.name());
            return None;
        }

        let reply = match command {
            Command::Init { address } => self.init(&address),
            Command::Start { frame_rate, family } => self.start(frame_rate, family, now),
            Command::Stop => self.stop(),
            Command::SetFrameRate(frame_rate) => self.set_frame_rate(frame_rate, now),
            Command::ClearLedStrip => self.clear_led_strip(),
            Command::SetLedStrip(frame) => self.set_led_strip(&frame),
            Command::Uninit => self.uninit(),
            Command::Unsupported(name) => {
                warn!("[Engine.handle] unsupported command: {}", name);
                Reply::UnsupportedCommand(name)
            }
        };
        Some(reply)
    }

    /// Render and send a frame if one is due at `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        let EngineState::Running(family) = self.state else {
            return false;
        };
        if !self.timer.poll(now) {
            return false;
        }
        self.tick(family);
        true
    }

    /// Instant of the next frame while an animation is running
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            EngineState::Running(_) => self.timer.deadline(),
            _ => None,
        }
    }

    /// Serve commands and frames until the session is closed
    pub async fn run<const COMMANDS: usize, const REPLIES: usize>(
        &mut self,
        commands: CommandReceiver<'_, COMMANDS>,
        replies: ReplySender<'_, REPLIES>,
    ) {
        while self.state != EngineState::Closed {
            let event = match self.next_deadline() {
                Some(deadline) => select(commands.receive(), Timer::at(deadline)).await,
                None => Either::First(commands.receive().await),
            };

            match event {
                Either::First(command) => {
                    if let Some(reply) = self.handle(command, Instant::now()) {
                        replies.send(reply).await;
                    }
                }
                Either::Second(()) => {
                    self.poll(Instant::now());
                }
            }
        }
        info!("[Engine.run] session closed");
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frame rate used by the running or next animation
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Number of frames rendered so far
    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    /// The engine's current strip frame
    pub fn frame(&self) -> &StripFrame {
        self.renderer.frame()
    }

    /// Sequence position of `family`
    pub fn cursor(&self, family: Family) -> usize {
        self.sequences.cursor(family)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn init(&mut self, address: &str) -> Reply {
        self.timer.cancel();
        if self.state.is_open() {
            self.transport.close();
        }
        if let Err(err) = self.transport.open(address) {
            error!("[Engine.init] {}: {}", address, err);
        }
        self.state = EngineState::Ready;
        info!("[Engine.init] channel: {}", address);
        Reply::Initialized
    }

    fn start(&mut self, frame_rate: Option<i32>, family: Option<Family>, now: Instant) -> Reply {
        if !self.state.is_open() {
            warn!("[Engine.start] channel is not open");
            return Reply::NotInitialized;
        }
        let frame_rate = match frame_rate {
            Some(raw) => match self.config.validate_frame_rate(raw) {
                Ok(frame_rate) => frame_rate,
                Err(err) => {
                    warn!("[Engine.start] {}", err);
                    return Reply::InvalidFrameRate(raw);
                }
            },
            None => self.frame_rate,
        };
        let family = family.unwrap_or(self.config.default_family);

        self.frame_rate = frame_rate;
        self.timer.arm(frame_period(frame_rate), now);
        self.state = EngineState::Running(family);
        info!(
            "[Engine.start] {} at {} fps",
            family.as_str(),
            frame_rate
        );
        Reply::Started
    }

    fn stop(&mut self) -> Reply {
        self.timer.cancel();
        if let EngineState::Running(_) = self.state {
            self.state = EngineState::Ready;
        }
        Reply::Stopped
    }

    fn set_frame_rate(&mut self, raw: i32, now: Instant) -> Reply {
        let frame_rate = match self.config.validate_frame_rate(raw) {
            Ok(frame_rate) => frame_rate,
            Err(err) => {
                warn!("[Engine.set_frame_rate] {}", err);
                return Reply::InvalidFrameRate(raw);
            }
        };

        self.frame_rate = frame_rate;
        if let EngineState::Running(family) = self.state {
            self.timer.arm(frame_period(frame_rate), now);
            info!(
                "[Engine.set_frame_rate] {} at {} fps",
                family.as_str(),
                frame_rate
            );
        }
        Reply::FrameRateSet
    }

    fn clear_led_strip(&mut self) -> Reply {
        if !self.state.is_open() {
            return Reply::NotInitialized;
        }
        let frame = *self.renderer.clear();
        self.send_frame(&frame);
        Reply::LedStripCleared
    }

    fn set_led_strip(&mut self, frame: &StripFrame) -> Reply {
        if !self.state.is_open() {
            return Reply::NotInitialized;
        }
        if let Err(err) = frame.validate() {
            error!("[Engine.set_led_strip] {}", err);
            return Reply::InvalidLedStrip;
        }
        self.send_frame(frame);
        Reply::LedStripSet
    }

    fn uninit(&mut self) -> Reply {
        self.timer.cancel();
        if self.state.is_open() {
            self.transport.close();
        }
        self.state = EngineState::Closed;
        Reply::Uninitialized
    }

    fn tick(&mut self, family: Family) {
        let pattern = self.sequences.next_pattern(family);
        info!(
            "[Engine.tick] {} #{}: {}",
            family.as_str(),
            self.frame_number,
            pattern.as_str()
        );

        let frame = *self
            .renderer
            .compose_frame(family, pattern.render(), self.frame_number);
        self.frame_number = self.frame_number.wrapping_add(1);
        self.send_frame(&frame);
    }

    fn send_frame(&mut self, frame: &StripFrame) {
        let message = match encode_frame(frame) {
            Ok(message) => message,
            Err(err) => {
                error!("[Engine.send_frame] {}", err);
                return;
            }
        };
        if let Err(err) = self.transport.send(&message) {
            error!("[Engine.send_frame] {}", err);
        }
    }
}
