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

use crate::commands::{InitCommand, VENDOR_INIT_COMMANDS};

/// Color element order of the panel, as wired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorSpace {
    Rgb,
    Bgr,
    /// Not supported by the GC9B71; rejected when the driver is created.
    Monochrome,
}

/// Device configuration consumed by [Gc9b71::new()](crate::Gc9b71::new).
///
/// # Example
///
/// ```
/// # use gc9b71_panel::*;
/// let config = PanelConfig::default()
///     .with_color_space(ColorSpace::Bgr)
///     .with_bits_per_pixel(18)
///     .with_reset_active_high(true);
/// assert_eq!(config.bits_per_pixel, 18);
/// assert_eq!(config.init_commands.len(), VENDOR_INIT_COMMANDS.len());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PanelConfig {
    pub color_space: ColorSpace,
    /// 16 or 18; anything else is rejected.
    pub bits_per_pixel: u32,
    /// Level that holds the controller in reset. Ignored with software
    /// reset.
    pub reset_active_high: bool,
    /// Sequence sent by [Panel::init()](crate::Panel::init).
    pub init_commands: &'static [InitCommand],
}

impl PanelConfig {
    pub const fn new() -> Self {
        Self{
            color_space: ColorSpace::Rgb,
            bits_per_pixel: 16,
            reset_active_high: false,
            init_commands: VENDOR_INIT_COMMANDS,
        }
    }

    pub const fn with_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    pub const fn with_bits_per_pixel(mut self, bits_per_pixel: u32) -> Self {
        self.bits_per_pixel = bits_per_pixel;
        self
    }

    pub const fn with_reset_active_high(mut self, active_high: bool) -> Self {
        self.reset_active_high = active_high;
        self
    }

    /// Replaces the vendor initialization sequence, eg., with the one shipped
    /// by the supplier of a different glass on the same controller.
    pub const fn with_init_commands(mut self, commands: &'static [InitCommand])
            -> Self {
        self.init_commands = commands;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self { Self::new() }
}
