//! # Memory Bus Abstraction
//!
//! The interpreter reaches memory only through the [`MemoryBus`] trait, so the
//! same core can sit behind a flat 64KB array, a ROM/RAM split or a machine's
//! memory map.
//!
//! The trait follows 6502 hardware behavior:
//! - No bus errors: reads and writes always succeed
//! - Every address is a `u16`, so address arithmetic wraps at 64KB
//! - Writes are visible to the next read, including within one instruction

use std::ops::{Index, IndexMut};

use crate::LoadError;

/// Byte-addressable memory seen by the CPU.
///
/// # Examples
///
/// ```
/// use m6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use m6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],
///     rom: [u8; 0x8000],
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte. Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte. Must never panic; read-only regions may drop the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Copies a program image into memory.
    ///
    /// The first two bytes of `image` are the little-endian load address;
    /// the remaining bytes are written verbatim starting there, wrapping at
    /// `0xFFFF`. Returns the load address.
    ///
    /// # Errors
    ///
    /// [`LoadError::TooShort`] if `image` has no room for the load address.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// let start = mem.load_program(&[0x00, 0x10, 0xA9, 0xFF]).unwrap();
    ///
    /// assert_eq!(start, 0x1000);
    /// assert_eq!(mem.read(0x1000), 0xA9);
    /// assert_eq!(mem.read(0x1001), 0xFF);
    /// ```
    fn load_program(&mut self, image: &[u8]) -> Result<u16, LoadError> {
        let [lo, hi, body @ ..] = image else {
            return Err(LoadError::TooShort(image.len()));
        };
        let load_address = u16::from_le_bytes([*lo, *hi]);

        let mut addr = load_address;
        for &byte in body {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }

        log::debug!(
            "loaded {} bytes at ${:04X}",
            body.len(),
            load_address
        );
        Ok(load_address)
    }
}

/// Simple 64KB flat memory.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use m6502::FlatMemory;
///
/// let mut memory = FlatMemory::new();
/// memory[0xFFFC] = 0x00;
/// memory[0xFFFD] = 0x80;
/// assert_eq!(memory[0xFFFD], 0x80);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory with every byte zeroed.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory").finish_non_exhaustive()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

impl Index<u16> for FlatMemory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.data[addr as usize]
    }
}

impl IndexMut<u16> for FlatMemory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.data[addr as usize]
    }
}
