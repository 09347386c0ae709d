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

//! Traits needed to implement, in order to use [`Gc9b71`].
//!
//! The minimum is [CommandTransport]. [ResetLine] is only needed for a
//! hardware reset; without it the driver falls back to the software reset
//! command, and [NoResetLine] names the type of the absent line.
//!
//! # Transport
//!
//! The GC9B71 is commonly wired with 4-wire SPI (a `DCX` pin selects command
//! or data) or with QSPI (the command is folded into a 32-bit header). Both
//! framings are the transport's business: the driver only hands over a
//! command byte together with either a short parameter list or a pixel
//! buffer. In particular, the pixel buffer of one
//! [send_pixels()](CommandTransport::send_pixels) call can be large (a whole
//! frame), so a transport with bounded transfers (eg., DMA descriptors) must
//! split it by itself.
//!
//! [`Gc9b71`]: ../struct.Gc9b71.html

/// The longest parameter list of a single command.
pub const MAX_PARAMETER_LEN: usize = 63;

/// Defines how a command and its data reach the controller.
pub trait CommandTransport {
    type Error;

    /// Sends `command` followed by `params` (possibly empty).
    ///
    /// `params` never exceeds [MAX_PARAMETER_LEN] bytes when called by this
    /// crate.
    fn send_parameters(&mut self, command: u8, params: &[u8])
            -> Result<(), Self::Error>;

    /// Sends `command` followed by a block of pixel data.
    fn send_pixels(&mut self, command: u8, pixels: &[u8])
            -> Result<(), Self::Error>;
}

impl<T: CommandTransport + ?Sized> CommandTransport for &mut T {
    type Error = T::Error;

    fn send_parameters(&mut self, command: u8, params: &[u8])
            -> Result<(), Self::Error> {
        T::send_parameters(self, command, params)
    }

    fn send_pixels(&mut self, command: u8, pixels: &[u8])
            -> Result<(), Self::Error> {
        T::send_pixels(self, command, pixels)
    }
}

/// Defines how the `RESX` pin is acquired, driven and given back.
///
/// `configure_output()` is called once when the driver is created, and
/// `release()` once when it is released (or when creation fails after the
/// line was configured).
pub trait ResetLine {
    type Error;

    fn configure_output(&mut self) -> Result<(), Self::Error>;
    /// Drives the line HIGH if `high`, otherwise LOW.
    fn set_level(&mut self, high: bool) -> Result<(), Self::Error>;
    fn release(&mut self) -> Result<(), Self::Error>;
}

impl<R: ResetLine + ?Sized> ResetLine for &mut R {
    type Error = R::Error;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        R::configure_output(self)
    }
    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        R::set_level(self, high)
    }
    fn release(&mut self) -> Result<(), Self::Error> { R::release(self) }
}

/// A reset line that cannot exist. Use `None::<NoResetLine>` when the panel's
/// reset pin isn't wired to the MCU.
#[derive(Debug)]
pub enum NoResetLine {}

impl ResetLine for NoResetLine {
    type Error = core::convert::Infallible;

    fn configure_output(&mut self) -> Result<(), Self::Error> { match *self {} }
    fn set_level(&mut self, _high: bool) -> Result<(), Self::Error> {
        match *self {}
    }
    fn release(&mut self) -> Result<(), Self::Error> { match *self {} }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        commands: std::vec::Vec<(u8, usize)>,
    }

    impl CommandTransport for Recorder {
        type Error = ();

        fn send_parameters(&mut self, command: u8, params: &[u8])
                -> Result<(), ()> {
            self.commands.push((command, params.len()));
            Ok(())
        }

        fn send_pixels(&mut self, command: u8, pixels: &[u8])
                -> Result<(), ()> {
            self.commands.push((command, pixels.len()));
            Ok(())
        }
    }

    fn send_through<T: CommandTransport>(mut t: T) -> Result<(), T::Error> {
        t.send_parameters(0x36, &[0x08])?;
        t.send_pixels(0x2C, &[0; 6])
    }

    #[test]
    fn mut_ref_forwards() {
        let mut r = Recorder::default();
        send_through(&mut r).unwrap();
        send_through(&mut &mut r).unwrap();
        assert_eq!(r.commands,
                   [(0x36u8, 1usize), (0x2C, 6), (0x36, 1), (0x2C, 6)]);
    }

    #[derive(Default)]
    struct Line { configured: bool, level: Option<bool> }

    impl ResetLine for Line {
        type Error = ();

        fn configure_output(&mut self) -> Result<(), ()> {
            self.configured = true;
            Ok(())
        }
        fn set_level(&mut self, high: bool) -> Result<(), ()> {
            self.level = Some(high);
            Ok(())
        }
        fn release(&mut self) -> Result<(), ()> {
            self.configured = false;
            Ok(())
        }
    }

    fn pulse<R: ResetLine>(mut r: R) -> Result<(), R::Error> {
        r.configure_output()?;
        r.set_level(true)
    }

    #[test]
    fn reset_line_mut_ref_forwards() {
        let mut line = Line::default();
        pulse(&mut line).unwrap();
        assert!(line.configured);
        assert_eq!(line.level, Some(true));
        let mut r = &mut line;
        ResetLine::release(&mut r).unwrap();
        assert!(!line.configured);
    }
}
