//! Core types shared by the multiplexer and the command processor.

/// Number of digit positions on the display.
pub const DIGIT_COUNT: usize = 4;

/// Number of segment lines per digit (a..g plus the decimal point).
pub const SEGMENT_COUNT: usize = 8;

/// One of the eight segment elements, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    /// Decimal point.
    Dp,
}

impl Segment {
    /// All segments in wire order (a, b, c, d, e, f, g, dp).
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::Dp,
    ];

    /// Position of this segment in a frame payload and in a [`Pattern`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Logic level of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Electrical wiring of the display, which decides the "on" level of every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Segment anodes are driven, digit commons sink current.
    ///
    /// Lit segment = High, active digit = Low.
    #[default]
    CommonCathode,

    /// Digit commons source current, segment cathodes sink it.
    ///
    /// Lit segment = Low, active digit = High.
    CommonAnode,
}

impl Polarity {
    /// Level to drive a segment line to for the given lit state.
    #[inline]
    pub const fn segment_level(self, lit: bool) -> Level {
        match (self, lit) {
            (Polarity::CommonCathode, true) | (Polarity::CommonAnode, false) => Level::High,
            _ => Level::Low,
        }
    }

    /// Level to drive a digit-select line to for the given active state.
    #[inline]
    pub const fn digit_level(self, active: bool) -> Level {
        match (self, active) {
            (Polarity::CommonAnode, true) | (Polarity::CommonCathode, false) => Level::High,
            _ => Level::Low,
        }
    }
}

/// Hexadecimal numerals 0-F as segment bitmasks (bit 0 = a ... bit 6 = g).
const NUMERALS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, // 0-7
    0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, // 8-F
];

/// Lit/unlit state of the eight segments of one digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pattern([bool; SEGMENT_COUNT]);

impl Pattern {
    /// Every segment unlit.
    pub const BLANK: Pattern = Pattern([false; SEGMENT_COUNT]);

    /// Every segment lit, decimal point included ("8.").
    pub const FULL: Pattern = Pattern([true; SEGMENT_COUNT]);

    /// Creates a pattern from explicit segment states in wire order.
    #[inline]
    pub const fn new(segments: [bool; SEGMENT_COUNT]) -> Self {
        Pattern(segments)
    }

    /// Builds a pattern from frame payload bytes. Any nonzero byte is lit.
    pub fn from_payload(payload: &[u8; SEGMENT_COUNT]) -> Self {
        let mut segments = [false; SEGMENT_COUNT];
        for (lit, byte) in segments.iter_mut().zip(payload) {
            *lit = *byte != 0;
        }
        Pattern(segments)
    }

    /// Builds a pattern from a bitmask, bit 0 = a through bit 7 = dp.
    pub const fn from_bits(bits: u8) -> Self {
        let mut segments = [false; SEGMENT_COUNT];
        let mut i = 0;
        while i < SEGMENT_COUNT {
            segments[i] = bits & (1 << i) != 0;
            i += 1;
        }
        Pattern(segments)
    }

    /// Pattern for a hexadecimal numeral, or `None` above 15.
    pub fn numeral(value: u8) -> Option<Self> {
        NUMERALS.get(value as usize).map(|bits| Pattern::from_bits(*bits))
    }

    /// Returns this pattern with the decimal point set as requested.
    #[must_use]
    pub const fn with_dot(mut self, lit: bool) -> Self {
        self.0[Segment::Dp.index()] = lit;
        self
    }

    /// Whether the given segment is lit.
    #[inline]
    pub const fn is_lit(&self, segment: Segment) -> bool {
        self.0[segment.index()]
    }

    /// Encodes the pattern as frame payload bytes (1 = lit, 0 = unlit).
    pub fn to_payload(&self) -> [u8; SEGMENT_COUNT] {
        let mut payload = [0u8; SEGMENT_COUNT];
        for (byte, lit) in payload.iter_mut().zip(&self.0) {
            *byte = u8::from(*lit);
        }
        payload
    }
}

/// Errors returned by direct display-state accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The digit index is not on the display.
    DigitOutOfRange {
        /// Requested digit index.
        digit: usize,
        /// Number of digits on the display.
        count: usize,
    },
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::DigitOutOfRange { digit, count } => {
                write!(f, "digit {} is out of range, display has {} digits", digit, count)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DisplayError {}
