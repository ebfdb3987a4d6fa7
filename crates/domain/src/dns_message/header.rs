/// Size of the fixed RFC 1035 §4.1.1 header.
pub const HEADER_SIZE: usize = 12;

const QR_BIT: u16 = 0x8000;
const OPCODE_SHIFT: u16 = 11;
const AA_BIT: u16 = 0x0400;
const TC_BIT: u16 = 0x0200;
const RD_BIT: u16 = 0x0100;
const RA_BIT: u16 = 0x0080;
const Z_BIT: u16 = 0x0040;
const AD_BIT: u16 = 0x0020;
const CD_BIT: u16 = 0x0010;
const NIBBLE: u16 = 0x000F;

/// The 16-bit flag word, split into its named fields.
///
/// `opcode` and `rcode` are 4-bit fields; higher bits are discarded on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    pub qr: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: bool,
    pub authenticated_data: bool,
    pub checking_disabled: bool,
    pub rcode: u8,
}

impl HeaderFlags {
    pub fn from_word(word: u16) -> Self {
        Self {
            qr: word & QR_BIT != 0,
            opcode: ((word >> OPCODE_SHIFT) & NIBBLE) as u8,
            authoritative: word & AA_BIT != 0,
            truncated: word & TC_BIT != 0,
            recursion_desired: word & RD_BIT != 0,
            recursion_available: word & RA_BIT != 0,
            z: word & Z_BIT != 0,
            authenticated_data: word & AD_BIT != 0,
            checking_disabled: word & CD_BIT != 0,
            rcode: (word & NIBBLE) as u8,
        }
    }

    pub fn to_word(&self) -> u16 {
        let mut word = ((self.opcode as u16) & NIBBLE) << OPCODE_SHIFT;
        word |= (self.rcode as u16) & NIBBLE;
        for (set, bit) in [
            (self.qr, QR_BIT),
            (self.authoritative, AA_BIT),
            (self.truncated, TC_BIT),
            (self.recursion_desired, RD_BIT),
            (self.recursion_available, RA_BIT),
            (self.z, Z_BIT),
            (self.authenticated_data, AD_BIT),
            (self.checking_disabled, CD_BIT),
        ] {
            if set {
                word |= bit;
            }
        }
        word
    }

    /// Flags of an outgoing reply: QR set, everything else zero.
    pub fn response() -> Self {
        Self {
            qr: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: HeaderFlags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl MessageHeader {
    pub fn is_response(&self) -> bool {
        self.flags.qr
    }
}
