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

//! GC9B71 commands in their raw form, and the vendor initialization
//! sequence.

use crate::command_structs::{MemoryAccessControl, PixelFormat};
use crate::interface::{CommandTransport, MAX_PARAMETER_LEN};

pub const SWRESET: u8 = 0x01;
pub const SLPIN: u8 = 0x10;
pub const SLPOUT: u8 = 0x11;
pub const INVOFF: u8 = 0x20;
pub const INVON: u8 = 0x21;
pub const DISPOFF: u8 = 0x28;
pub const DISPON: u8 = 0x29;
pub const CASET: u8 = 0x2A;
pub const RASET: u8 = 0x2B;
pub const RAMWR: u8 = 0x2C;
pub const MADCTL: u8 = 0x36;
pub const COLMOD: u8 = 0x3A;

/// Commands of GC9B71 in their raw form, except that the parameters
/// of each command are typed.
pub struct Commands<T> { transport: T }

impl<T> Commands<T> {
    pub fn new(transport: T) -> Self { Self{transport} }

    pub fn into_inner(self) -> T { self.transport }

    pub fn transport_mut(&mut self) -> &mut T { &mut self.transport }
}

impl<T: CommandTransport> Commands<T> {
    /// Sets the column address window as `begin` to `end`, both inclusive.
    pub fn caset(&mut self, begin: u16, end: u16) -> Result<(), T::Error> {
        self.command_with_u16_pair(CASET, begin, end)
    }

    /// Sets the row address window as `begin` to `end`, both inclusive.
    pub fn raset(&mut self, begin: u16, end: u16) -> Result<(), T::Error> {
        self.command_with_u16_pair(RASET, begin, end)
    }

    /// Writes `pixels` into the frame memory window set by
    /// [caset()](Self::caset) and [raset()](Self::raset).
    pub fn ramwr(&mut self, pixels: &[u8]) -> Result<(), T::Error> {
        self.transport.send_pixels(RAMWR, pixels)
    }

    fn command_with_u16_pair(&mut self, cmd: u8, first: u16, second: u16)
            -> Result<(), T::Error> {
        let [f0, f1] = first.to_be_bytes();
        let [s0, s1] = second.to_be_bytes();
        self.transport.send_parameters(cmd, &[f0, f1, s0, s1])
    }

    #[inline(always)]
    fn command(&mut self, cmd: u8) -> Result<(), T::Error> {
        self.transport.send_parameters(cmd, &[])
    }

    /// Sends an arbitrary command with its parameters.
    ///
    /// # Panics
    ///
    /// If `params` is longer than [MAX_PARAMETER_LEN].
    pub fn raw(&mut self, cmd: u8, params: &[u8]) -> Result<(), T::Error> {
        assert!(params.len() <= MAX_PARAMETER_LEN,
                "command {:#04x} has {} parameter bytes", cmd, params.len());
        self.transport.send_parameters(cmd, params)
    }

    /// Software-resets.
    #[inline(always)]
    pub fn swreset(&mut self) -> Result<(), T::Error> { self.command(SWRESET) }
    /// Enters the sleep mode.
    #[inline(always)]
    pub fn slpin(&mut self) -> Result<(), T::Error> { self.command(SLPIN) }
    /// Exits the sleep mode.
    #[inline(always)]
    pub fn slpout(&mut self) -> Result<(), T::Error> { self.command(SLPOUT) }
    /// Disables the inversion mode.
    #[inline(always)]
    pub fn invoff(&mut self) -> Result<(), T::Error> { self.command(INVOFF) }
    /// Enables the inversion mode.
    #[inline(always)]
    pub fn invon(&mut self) -> Result<(), T::Error> { self.command(INVON) }
    /// Turns the display/screen off.
    #[inline(always)]
    pub fn dispoff(&mut self) -> Result<(), T::Error> { self.command(DISPOFF) }
    /// Turns the display/screen on.
    #[inline(always)]
    pub fn dispon(&mut self) -> Result<(), T::Error> { self.command(DISPON) }
    /// Sets the MADCTL register.
    #[inline(always)]
    pub fn madctl(&mut self, data: MemoryAccessControl)
            -> Result<(), T::Error> {
        self.transport.send_parameters(MADCTL, &[data.into()])
    }
    /// Sets the interface pixel format.
    #[inline(always)]
    pub fn colmod(&mut self, data: PixelFormat) -> Result<(), T::Error> {
        self.transport.send_parameters(COLMOD, &[data.into()])
    }
}

/// One entry of an initialization sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitCommand {
    register: u8,
    payload: &'static [u8],
    settle: bool,
}

impl InitCommand {
    /// The wait after an entry that needs the controller to settle.
    pub const SETTLE_MS: u32 = 120;

    /// Creates an entry. Exiting sleep and turning the display on are
    /// flagged as needing [SETTLE_MS](Self::SETTLE_MS) afterwards.
    ///
    /// # Panics
    ///
    /// If `payload` is longer than [MAX_PARAMETER_LEN]; in a `const` table
    /// this is a compile error.
    pub const fn new(register: u8, payload: &'static [u8]) -> Self {
        assert!(payload.len() <= MAX_PARAMETER_LEN,
                "init command payload is too long");
        Self{register, payload, settle: register == SLPOUT || register == DISPON}
    }

    pub const fn register(&self) -> u8 { self.register }
    pub const fn payload(&self) -> &'static [u8] { self.payload }
    pub const fn requires_settle(&self) -> bool { self.settle }
}

const fn cmd(register: u8, payload: &'static [u8]) -> InitCommand {
    InitCommand::new(register, payload)
}

/// The panel vendor's initialization sequence: inter-register enable, power,
/// timing, gamma and porch settings, then exit sleep and display on.
///
/// The values are opaque; they are reproduced byte-for-byte.
pub const VENDOR_INIT_COMMANDS: &[InitCommand] = &[
    // Inter-register enable.
    cmd(0xFE, &[]),
    cmd(0xEF, &[]),
    cmd(0x80, &[0x11]),
    cmd(0x81, &[0x70]),
    cmd(0x82, &[0x09]),
    cmd(0x83, &[0x03]),
    cmd(0x84, &[0x62]),
    cmd(0x89, &[0x18]),
    cmd(0x8A, &[0x40]),
    cmd(0x8B, &[0x0A]),
    cmd(0x3A, &[0x05]),
    cmd(0x36, &[0x40]),
    cmd(0xEC, &[0x07]),
    cmd(0x74, &[0x01, 0x80, 0x00, 0x00, 0x00, 0x00]),
    cmd(0x98, &[0x3E]),
    cmd(0x99, &[0x3E]),
    cmd(0xA1, &[0x01, 0x04]),
    cmd(0xA2, &[0x01, 0x04]),
    cmd(0xCB, &[0x02]),
    cmd(0x7C, &[0xB6, 0x24]),
    cmd(0xAC, &[0x74]),
    cmd(0xF6, &[0x80]),
    cmd(0xB5, &[0x09, 0x09]),
    cmd(0xEB, &[0x01, 0x81]),
    cmd(0x60, &[0x38, 0x06, 0x13, 0x56]),
    cmd(0x63, &[0x38, 0x08, 0x13, 0x56]),
    cmd(0x61, &[0x3B, 0x1B, 0x58, 0x38]),
    cmd(0x62, &[0x3B, 0x1B, 0x58, 0x38]),
    cmd(0x64, &[0x38, 0x0A, 0x73, 0x16, 0x13, 0x56]),
    cmd(0x66, &[0x38, 0x0B, 0x73, 0x17, 0x13, 0x56]),
    cmd(0x68, &[0x00, 0x0B, 0x22, 0x0B, 0x22, 0x1C, 0x1C]),
    cmd(0x69, &[0x00, 0x0B, 0x26, 0x0B, 0x26, 0x1C, 0x1C]),
    cmd(0x6A, &[0x15, 0x00]),
    cmd(0x6E, &[
        0x08, 0x02, 0x1A, 0x00, 0x12, 0x12, 0x11, 0x11,
        0x14, 0x14, 0x13, 0x13, 0x04, 0x19, 0x1E, 0x1D,
        0x1D, 0x1E, 0x19, 0x04, 0x0B, 0x0B, 0x0C, 0x0C,
        0x09, 0x09, 0x0A, 0x0A, 0x00, 0x1A, 0x01, 0x07,
    ]),
    cmd(0x6C, &[0xCC, 0x0C, 0xCC, 0x84, 0xCC, 0x04, 0x50]),
    cmd(0x7D, &[0x72]),
    cmd(0x70, &[0x02, 0x03, 0x09, 0x07, 0x09, 0x03, 0x09, 0x07, 0x09, 0x03]),
    cmd(0x90, &[0x06, 0x06, 0x05, 0x06]),
    cmd(0x93, &[0x45, 0xFF, 0x00]),
    // Power.
    cmd(0xC3, &[0x15]),
    cmd(0xC4, &[0x36]),
    cmd(0xC9, &[0x3D]),
    // Gamma.
    cmd(0xF0, &[0x47, 0x07, 0x0A, 0x0A, 0x00, 0x29]),
    cmd(0xF2, &[0x47, 0x07, 0x0A, 0x0A, 0x00, 0x29]),
    cmd(0xF1, &[0x42, 0x91, 0x10, 0x2D, 0x2F, 0x6F]),
    cmd(0xF3, &[0x42, 0x91, 0x10, 0x2D, 0x2F, 0x6F]),
    cmd(0xF9, &[0x30]),
    cmd(0xBE, &[0x11]),
    cmd(0xFB, &[0x00, 0x00]),
    cmd(SLPOUT, &[]),
    cmd(DISPON, &[]),
    cmd(RAMWR, &[0x00, 0x00, 0x00, 0x00]),
    cmd(RAMWR, &[0x00, 0x00, 0x00, 0x00]),
];

// mod tests
