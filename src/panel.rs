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

/// The operations every LCD panel driver offers, independent of the
/// controller.
///
/// Except [destroy()](Self::destroy), the trait is object safe, so an
/// application can drive `&mut dyn Panel<Error = E>` without knowing the
/// controller.
pub trait Panel {
    type Error;

    /// Resets the controller, with the reset line if there is one.
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Sends the initialization sequence. Blocks until the panel is on.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Writes `pixels` into `[x_start, x_end) x [y_start, y_end)`.
    ///
    /// `pixels` is packed in the configured pixel format, row by row.
    ///
    /// # Panics
    ///
    /// If the region is empty, i.e., `x_start >= x_end` or
    /// `y_start >= y_end`.
    fn draw_bitmap(&mut self, x_start: u16, y_start: u16, x_end: u16,
                   y_end: u16, pixels: &[u8]) -> Result<(), Self::Error>;

    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error>;

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool)
            -> Result<(), Self::Error>;

    fn swap_axes(&mut self, swap: bool) -> Result<(), Self::Error>;

    /// Sets the offset added to every later [draw_bitmap()](Self::draw_bitmap)
    /// window. Already drawn content doesn't move.
    fn set_gap(&mut self, x_gap: u16, y_gap: u16) -> Result<(), Self::Error>;

    fn display_on_off(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Enters (`true`) or exits (`false`) the sleep mode.
    fn sleep(&mut self, sleep: bool) -> Result<(), Self::Error>;

    /// Releases what the driver acquired and drops it.
    fn destroy(self) -> Result<(), Self::Error> where Self: Sized;
}
