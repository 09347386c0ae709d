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

use embedded_hal::digital::{OutputPin, PinState};

use crate::interface::ResetLine;

/// A helper to use an `embedded_hal` [OutputPin] as the [ResetLine].
///
/// A HAL pin is already an output once it exists, so configuring it does
/// nothing. Releasing leaves it at the last level; get the pin back with
/// [into_inner()](Self::into_inner) to reconfigure it.
pub struct OutputPinReset<P> { pin: P }

impl<P> OutputPinReset<P> {
    pub fn new(pin: P) -> Self { Self{pin} }

    pub fn into_inner(self) -> P { self.pin }
}

impl<P: OutputPin> ResetLine for OutputPinReset<P> {
    type Error = P::Error;

    fn configure_output(&mut self) -> Result<(), Self::Error> { Ok(()) }

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        self.pin.set_state(PinState::from(high))
    }

    fn release(&mut self) -> Result<(), Self::Error> { Ok(()) }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use super::*;

    #[derive(Default)]
    struct FakePin { levels: std::vec::Vec<bool> }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.levels.push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.levels.push(true);
            Ok(())
        }
    }

    #[test]
    fn levels_pass_through() {
        let mut r = OutputPinReset::new(FakePin::default());
        r.configure_output().unwrap();
        r.set_level(false).unwrap();
        r.set_level(true).unwrap();
        r.release().unwrap();
        assert_eq!(r.into_inner().levels, [false, true]);
    }
}
