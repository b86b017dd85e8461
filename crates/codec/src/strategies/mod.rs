mod bitpacked;
mod packed_int;
mod textual;

pub use bitpacked::{encoded_len as bit_packed_len, BitPackedCodec, HEADER_LEN};
pub use packed_int::{PackedInt, PackedIntegerCodec, PACKED_CAPACITY};
pub use textual::TextualCodec;
