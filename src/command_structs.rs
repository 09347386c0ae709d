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

use paste::paste;

macro_rules! define_pub_bit_type {
    ($name:ident, zero: $zero_value:ident, one: $one_value:ident,
                  doc: $doc:literal) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum $name {
            $zero_value = 0,
            $one_value = 1,
        }
        impl $name {
            fn from_bool(b: bool) -> Self {  // Private.
                if b { Self::$one_value } else { Self::$zero_value }
            }
            fn to_bool(self) -> bool {  // Private.
                match self {
                    Self::$zero_value => false,
                    Self::$one_value => true,
                }
            }
        }
        impl Default for $name {
            fn default() -> Self { Self::$zero_value }
        }
        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter)
                    -> ::core::fmt::Result {
                <Self as core::fmt::Debug>::fmt(self, f)
            }
        }
    };
}
macro_rules! bit_field {
    ($name:ident, type: $type:ty, bit_offset: $i:expr) => {
        pub fn $name(&self) -> $type {
            <$type>::from_bool((self.data >> $i) & 1 == 1)
        }
        paste! {
            pub fn [<set_ $name>](&mut self, value: $type) -> &mut Self {
                if value.to_bool() {
                    self.data |= 1 << $i;
                } else {
                    self.data &= !(1 << $i);
                }
                self
            }
        }
    }
}

/// Mirror of the `MADCTL` (36h) register: the scan direction and color order
/// of the frame memory.
///
/// Only the bits the driver programs have accessors; the refresh order bits
/// (4 and 2) stay zero.
///
/// # Example
///
/// ```
/// # use gc9b71_panel::*;
/// let mut mctl = MemoryAccessControl::default();
/// mctl.set_column_address_order(ColumnOrder::RightToLeft)
///     .set_rgb_order(ColorComponentOrder::BlueGreenRed);
/// assert_eq!(u8::from(mctl), 0x48);
/// assert_eq!(mctl.row_column_swap(), RowColumnSwap::Unswapped);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MemoryAccessControl {
    data: u8,
}
impl MemoryAccessControl {
    // Mirror Y (`MY`).
    bit_field!(row_address_order, type: RowOrder, bit_offset: 7);
    // Mirror X (`MX`).
    bit_field!(column_address_order, type: ColumnOrder, bit_offset: 6);
    // Swap X and Y (`MV`).
    bit_field!(row_column_swap, type: RowColumnSwap, bit_offset: 5);
    bit_field!(rgb_order, type: ColorComponentOrder, bit_offset: 3);
}
impl From<MemoryAccessControl> for u8 {
    fn from(mctl: MemoryAccessControl) -> u8 { mctl.data }
}
impl From<u8> for MemoryAccessControl {
    fn from(data: u8) -> Self { Self{data} }
}

define_pub_bit_type!(RowOrder, zero: TopToBottom, one: BottomToTop,
                     doc: "The row order of the LCD pixels.");
define_pub_bit_type!(ColumnOrder, zero: LeftToRight, one: RightToLeft,
                     doc: "The column order of the LCD pixels.");
define_pub_bit_type!(RowColumnSwap, zero: Unswapped, one: Swapped,
                     doc: "Whether to swap the row and column definitions, \
                     i.e., to switch between the portrait and landscape mode.");
define_pub_bit_type!(ColorComponentOrder, zero: RedGreenBlue, one: BlueGreenRed,
                     doc: "R/G/B component order inside a pixel.");

impl RowOrder {
    pub(crate) fn mirrored(mirror: bool) -> Self { Self::from_bool(mirror) }
}
impl ColumnOrder {
    pub(crate) fn mirrored(mirror: bool) -> Self { Self::from_bool(mirror) }
}
impl RowColumnSwap {
    pub(crate) fn swapped(swap: bool) -> Self { Self::from_bool(swap) }
}

/// Interface pixel format, i.e., the value of the `COLMOD` (3Ah) register.
///
/// Both the RGB interface (high nibble) and the MCU interface (low nibble)
/// are set to the same depth.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    /// 16 bits per pixel, 2 bytes on the wire.
    Rgb565 = 0x55,
    /// 18 bits per pixel.
    Rgb666 = 0x66,
}
impl PixelFormat {
    /// Maps a bit depth to its format. Only 16 and 18 are supported.
    pub fn from_bits_per_pixel(bits: u32) -> Option<Self> {
        match bits {
            16 => Some(Self::Rgb565),
            18 => Some(Self::Rgb666),
            _ => None,
        }
    }

    pub fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Rgb565 => 16,
            Self::Rgb666 => 18,
        }
    }

    /// How many bytes `pixels` pixels take, with the same rounding as the
    /// controller's byte count (`pixels * bpp / 8`).
    pub fn bytes_for(self, pixels: usize) -> usize {
        pixels * self.bits_per_pixel() as usize / 8
    }
}
impl From<PixelFormat> for u8 {
    fn from(format: PixelFormat) -> u8 { format as u8 }
}
