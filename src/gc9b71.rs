// Copyright 2021 Google LLC
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

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::command_structs::{
    ColorComponentOrder, ColumnOrder, MemoryAccessControl, PixelFormat,
    RowColumnSwap, RowOrder};
use crate::commands::{Commands, InitCommand};
use crate::config::{ColorSpace, PanelConfig};
use crate::error::Error;
use crate::interface::{CommandTransport, ResetLine};
use crate::panel::Panel;

const RESET_PULSE_MS: u32 = 10;
// The datasheet asks for 5ms after SWRESET before the next command.
const SOFTWARE_RESET_MS: u32 = 20;

/// GC9B71 panel driver.
///
/// `T` is the [CommandTransport], `D` the delay and `R` the optional
/// [ResetLine]. Pass `&mut` references to keep ownership of them outside;
/// [release()](Self::release) gives them back otherwise.
///
/// The driver keeps write-through copies of the `MADCTL` and `COLMOD`
/// registers: every orientation change sends the new value at once, and the
/// copy is updated only when the transport accepts it.
pub struct Gc9b71<T, D, R> {
    cmds: Commands<T>,
    delay: D,
    reset: Option<R>,
    reset_active_high: bool,
    x_gap: u16,
    y_gap: u16,
    pixel_format: PixelFormat,
    madctl: MemoryAccessControl,
    init_commands: &'static [InitCommand],
}

type PanelError<T, R> =
    Error<<T as CommandTransport>::Error, <R as ResetLine>::Error>;
type Result<V, T, R> = core::result::Result<V, PanelError<T, R>>;

impl<T, D, R> Gc9b71<T, D, R>
        where T: CommandTransport, D: DelayNs, R: ResetLine {
    /// Creates the driver. No command is sent.
    ///
    /// If `reset` is given, it is configured as an output first, and released
    /// again when creation fails.
    pub fn new(transport: T, delay: D, mut reset: Option<R>,
               config: &PanelConfig) -> Result<Self, T, R> {
        if let Some(line) = reset.as_mut() {
            if let Err(e) = line.configure_output() {
                warn!("gc9b71 reset line unavailable");
                // Best effort; the acquisition error is what gets reported.
                let _ = line.release();
                return Err(Error::ResourceAcquisitionFailed(e));
            }
        }
        let (rgb_order, pixel_format) = match Self::check_config(config) {
            Ok(checked) => checked,
            Err(e) => {
                warn!("gc9b71 rejected: {:?} at {} bpp", config.color_space,
                      config.bits_per_pixel);
                if let Some(line) = reset.as_mut() {
                    let _ = line.release();
                }
                return Err(e);
            }
        };
        let mut madctl = MemoryAccessControl::default();
        madctl.set_rgb_order(rgb_order);
        info!("new gc9b71 panel: {:?}, {} bpp, {} reset",
              config.color_space, pixel_format.bits_per_pixel(),
              if reset.is_some() { "hardware" } else { "software" });
        Ok(Self{
            cmds: Commands::new(transport),
            delay,
            reset,
            reset_active_high: config.reset_active_high,
            x_gap: 0,
            y_gap: 0,
            pixel_format,
            madctl,
            init_commands: config.init_commands,
        })
    }

    fn check_config(config: &PanelConfig)
            -> Result<(ColorComponentOrder, PixelFormat), T, R> {
        let rgb_order = match config.color_space {
            ColorSpace::Rgb => ColorComponentOrder::RedGreenBlue,
            ColorSpace::Bgr => ColorComponentOrder::BlueGreenRed,
            ColorSpace::Monochrome => return Err(
                Error::UnsupportedConfiguration("unsupported color space")),
        };
        match PixelFormat::from_bits_per_pixel(config.bits_per_pixel) {
            Some(pixel_format) => Ok((rgb_order, pixel_format)),
            None => Err(Error::UnsupportedConfiguration("unsupported pixel width")),
        }
    }

    /// Releases the reset line and returns the transport and the delay.
    ///
    /// If the line fails to release, the error is returned and the transport
    /// and the delay are dropped with the driver. Pass them as `&mut` to keep
    /// them in that case.
    pub fn release(self) -> Result<(T, D), T, R> {
        let Self{cmds, delay, reset, ..} = self;
        if let Some(mut line) = reset {
            line.release().map_err(PanelError::<T, R>::ResetLine)?;
        }
        debug!("del gc9b71 panel");
        Ok((cmds.into_inner(), delay))
    }

    /// The value last sent to (or to be sent to, before
    /// [init()](Panel::init)) the `MADCTL` register.
    pub fn memory_access_control(&self) -> MemoryAccessControl { self.madctl }

    /// The value sent to the `COLMOD` register by [init()](Panel::init).
    pub fn pixel_format_control(&self) -> u8 { self.pixel_format.into() }

    pub fn pixel_format(&self) -> PixelFormat { self.pixel_format }

    /// The current `(x, y)` gap.
    pub fn gap(&self) -> (u16, u16) { (self.x_gap, self.y_gap) }

    fn write_madctl(&mut self) -> Result<(), T, R> {
        self.cmds.madctl(self.madctl).map_err(Error::Transport)
    }

    /// Sends `madctl`, and keeps it as the cached value once it's accepted.
    fn update_madctl(&mut self, madctl: MemoryAccessControl)
            -> Result<(), T, R> {
        self.cmds.madctl(madctl).map_err(PanelError::<T, R>::Transport)?;
        self.madctl = madctl;
        Ok(())
    }

    fn hardware_reset(&mut self) -> Result<(), T, R> {
        let active = self.reset_active_high;
        if let Some(line) = self.reset.as_mut() {
            line.set_level(active).map_err(PanelError::<T, R>::ResetLine)?;
            self.delay.delay_ms(RESET_PULSE_MS);
            line.set_level(!active).map_err(PanelError::<T, R>::ResetLine)?;
            self.delay.delay_ms(RESET_PULSE_MS);
        }
        Ok(())
    }

    /// Translates `[start, end)` by `gap` into an inclusive address window.
    /// `end` must be larger than `start`.
    fn window(start: u16, end: u16, gap: u16) -> Result<(u16, u16), T, R> {
        match (start.checked_add(gap), (end - 1).checked_add(gap)) {
            (Some(first), Some(last)) => Ok((first, last)),
            _ => Err(Error::InvalidArgument("window exceeds 16-bit address")),
        }
    }
}

impl<T, D, R> Panel for Gc9b71<T, D, R>
        where T: CommandTransport, D: DelayNs, R: ResetLine {
    type Error = PanelError<T, R>;

    fn reset(&mut self) -> Result<(), T, R> {
        if self.reset.is_some() {
            debug!("gc9b71 hardware reset");
            self.hardware_reset()
        } else {
            debug!("gc9b71 software reset");
            self.cmds.swreset().map_err(PanelError::<T, R>::Transport)?;
            self.delay.delay_ms(SOFTWARE_RESET_MS);
            Ok(())
        }
    }

    fn init(&mut self) -> Result<(), T, R> {
        for command in self.init_commands {
            self.cmds.raw(command.register(), command.payload())
                .map_err(PanelError::<T, R>::Transport)?;
            if command.requires_settle() {
                self.delay.delay_ms(InitCommand::SETTLE_MS);
            }
        }
        // The sequence may program its own MADCTL/COLMOD; restore ours.
        self.write_madctl()?;
        self.cmds.colmod(self.pixel_format)
            .map_err(PanelError::<T, R>::Transport)?;
        info!("gc9b71 panel initialized");
        self.delay.delay_ms(InitCommand::SETTLE_MS);
        Ok(())
    }

    fn draw_bitmap(&mut self, x_start: u16, y_start: u16, x_end: u16,
                   y_end: u16, pixels: &[u8]) -> Result<(), T, R> {
        assert!(x_start < x_end && y_start < y_end,
                "start position must be smaller than end position");
        let (x0, x1) = Self::window(x_start, x_end, self.x_gap)?;
        let (y0, y1) = Self::window(y_start, y_end, self.y_gap)?;
        let len = self.pixel_format.bytes_for(
            usize::from(x_end - x_start) * usize::from(y_end - y_start));
        let pixels = match pixels.get(..len) {
            Some(pixels) => pixels,
            None => return Err(
                Error::InvalidArgument("pixel buffer is too short")),
        };

        self.cmds.caset(x0, x1).map_err(PanelError::<T, R>::Transport)?;
        self.cmds.raset(y0, y1).map_err(PanelError::<T, R>::Transport)?;
        self.cmds.ramwr(pixels).map_err(Error::Transport)
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), T, R> {
        let r = if invert { self.cmds.invon() } else { self.cmds.invoff() };
        r.map_err(Error::Transport)
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), T, R> {
        let mut madctl = self.madctl;
        madctl.set_column_address_order(ColumnOrder::mirrored(mirror_x))
            .set_row_address_order(RowOrder::mirrored(mirror_y));
        self.update_madctl(madctl)
    }

    fn swap_axes(&mut self, swap: bool) -> Result<(), T, R> {
        let mut madctl = self.madctl;
        madctl.set_row_column_swap(RowColumnSwap::swapped(swap));
        self.update_madctl(madctl)
    }

    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), T, R> {
        debug!("gc9b71 gap set to ({}, {})", x_gap, y_gap);
        self.x_gap = x_gap;
        self.y_gap = y_gap;
        Ok(())
    }

    fn display_on_off(&mut self, on: bool) -> Result<(), T, R> {
        let r = if on { self.cmds.dispon() } else { self.cmds.dispoff() };
        r.map_err(Error::Transport)
    }

    fn sleep(&mut self, sleep: bool) -> Result<(), T, R> {
        let r = if sleep { self.cmds.slpin() } else { self.cmds.slpout() };
        r.map_err(PanelError::<T, R>::Transport)?;
        self.delay.delay_ms(InitCommand::SETTLE_MS);
        Ok(())
    }

    fn destroy(self) -> Result<(), T, R> {
        self.release().map(|_| ())
    }
}

// mod tests
