use embedded_hal_nb::serial::Read;
use mirror_doorbell::SerialRx;

/// Adapts any non-blocking `embedded-hal-nb` reader, such as the RP2040 UART,
/// to the doorbell's byte-at-a-time receiver.
///
/// `WouldBlock` and line errors (framing, overrun, parity) both read as "no
/// byte"; a corrupted byte never reaches the line decoder.
pub struct NbSerial<U> {
    uart: U,
}

impl<U: Read<u8>> NbSerial<U> {
    pub fn new(uart: U) -> Self {
        Self { uart }
    }
}

impl<U: Read<u8>> SerialRx for NbSerial<U> {
    fn read_byte(&mut self) -> Option<u8> {
        self.uart.read().ok()
    }
}
