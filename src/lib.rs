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

//! A blocking driver for the GC9B71 LCD controller.
//!
//! The driver ([Gc9b71]) turns the generic [Panel] operations (reset,
//! initialize, draw a rectangle, orientation, inversion and power) into the
//! controller's command stream. It does not move bytes itself: the user
//! implements [CommandTransport](interface::CommandTransport) for whatever
//! bus the panel sits on (4-wire SPI, QSPI, ...), and optionally provides a
//! [ResetLine](interface::ResetLine) for hardware reset. Any
//! `embedded_hal::digital::OutputPin` can be used as a reset line through
//! [OutputPinReset](adapters::OutputPinReset).
//!
//! ```ignore
//! use gc9b71_panel::{Gc9b71, Panel, PanelConfig, ColorSpace};
//! use gc9b71_panel::adapters::OutputPinReset;
//!
//! let config = PanelConfig::default().with_color_space(ColorSpace::Bgr);
//! let mut panel = Gc9b71::new(
//!     &mut transport, delay, Some(OutputPinReset::new(rst)), &config)?;
//! panel.reset()?;
//! panel.init()?;
//! panel.set_gap(0, 0)?;
//! panel.draw_bitmap(0, 0, 320, 386, &frame)?;
//! ```
//!
//! Everything is synchronous: an operation returns after its transmissions,
//! or after the fixed settle time the controller needs.

#![cfg_attr(not(test), no_std)]

pub mod adapters;
mod command_structs;
pub use command_structs::{
    ColorComponentOrder, ColumnOrder, MemoryAccessControl, PixelFormat,
    RowColumnSwap, RowOrder};
pub mod commands;
pub use commands::{InitCommand, VENDOR_INIT_COMMANDS};
mod config;
pub use config::{ColorSpace, PanelConfig};
mod error;
pub use error::Error;
mod gc9b71;
pub use gc9b71::Gc9b71;
pub mod interface;
mod panel;
pub use panel::Panel;

#[cfg(test)] pub mod testing_device;
