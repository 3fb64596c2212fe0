use crate::end_cap::{EndCapColor, IDLE_COLOR_CYCLE, UnsupportedColor};
use crate::frame::{StripFrame, WhiteLeds};
use crate::pattern::Family;

/// Frame renderer - composes the full strip state for one tick
///
/// Owns the current strip frame and the idle end-cap color cursor. Voice
/// families only replace the whites and keep whatever the end-caps show.
#[derive(Debug, Clone, Default)]
pub struct FrameRenderer {
    frame: StripFrame,
    color_cursor: usize,
}

impl FrameRenderer {
    pub const fn new() -> Self {
        Self {
            frame: StripFrame::dark(),
            color_cursor: 0,
        }
    }

    /// Compose the frame for `family` from freshly rendered whites
    ///
    /// For the idle family odd frames blank the end-caps and even frames show
    /// the next color of [`IDLE_COLOR_CYCLE`].
    pub fn compose_frame(
        &mut self,
        family: Family,
        whites: WhiteLeds,
        frame_number: u32,
    ) -> &StripFrame {
        if family == Family::Idle {
            let color = if frame_number % 2 == 1 {
                EndCapColor::Black
            } else {
                self.next_idle_color()
            };
            self.frame.set_end_caps(color.to_rgb());
        }

        self.frame.whites = whites;
        &self.frame
    }

    /// Set both end-caps to a color given by name
    ///
    /// Unknown names leave the end-caps unchanged.
    pub fn apply_color_name(&mut self, name: &str) -> Result<(), UnsupportedColor> {
        let Some(color) = EndCapColor::parse_from_str(name) else {
            error!("[FrameRenderer.apply_color_name] unsupported color: {}", name);
            return Err(UnsupportedColor);
        };
        self.frame.set_end_caps(color.to_rgb());
        Ok(())
    }

    /// Turn the whole frame off
    pub fn clear(&mut self) -> &StripFrame {
        self.frame.clear();
        &self.frame
    }

    /// The most recently composed frame
    pub fn frame(&self) -> &StripFrame {
        &self.frame
    }

    /// Position in [`IDLE_COLOR_CYCLE`] of the next even-frame color
    pub fn color_cursor(&self) -> usize {
        self.color_cursor
    }

    fn next_idle_color(&mut self) -> EndCapColor {
        let color = IDLE_COLOR_CYCLE[self.color_cursor];
        self.color_cursor = (self.color_cursor + 1) % IDLE_COLOR_CYCLE.len();
        color
    }
}
