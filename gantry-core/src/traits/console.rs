//! Console seam: the two output channels and transmit occupancy.

/// Byte-oriented console with separate data and error channels.
///
/// The data channel carries machine-facing replies (envelopes, protocol
/// acknowledgments); the error channel carries all human-facing text
/// (prompts, messages, banners). `tx_pending` is read by the transmit
/// flow-control gate and may be updated from interrupt context.
pub trait Console {
    /// Write to the data channel
    fn write_data(&mut self, text: &str);

    /// Write to the error channel
    fn write_err(&mut self, text: &str);

    /// Bytes queued for transmission and not yet sent
    fn tx_pending(&self) -> usize;
}
