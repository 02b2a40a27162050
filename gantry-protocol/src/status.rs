//! Status vocabulary shared by every task and protocol parser.
//!
//! Each value carries a stable numeric code (the `st` field of the
//! structured envelope) and exactly one canonical human-readable message.
//! The code space is a published contract; new values may only be appended.
//!
//! Three values are flow-control signals rather than outcomes:
//! [`Status::Eagain`] (not finished, re-poll), [`Status::Noop`] (nothing to
//! do), and [`Status::EndOfFile`] (input source exhausted). They are never
//! surfaced to the user as failures.

/// Number of defined status values (codes `0..STATUS_COUNT`)
pub const STATUS_COUNT: u8 = 32;

/// Closed status enumeration returned by tasks and parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
    /// Operation completed
    Ok = 0,
    /// Generic failure
    Error = 1,
    /// Not finished yet; caller should retry on the next poll
    Eagain = 2,
    /// Nothing to do this poll
    Noop = 3,
    /// Multi-poll operation ran to completion
    Complete = 4,
    /// Line terminator reached
    EndOfLine = 5,
    /// Input source exhausted (file-like sources only)
    EndOfFile = 6,
    /// Fixture or file source is not open
    FileNotOpen = 7,
    /// File source exceeds the maximum supported size
    MaxFileSizeExceeded = 8,
    /// Unknown device identifier
    NoSuchDevice = 9,
    /// Read attempted on an empty buffer
    BufferEmpty = 10,
    /// Buffer overrun that cannot be recovered
    BufferFullFatal = 11,
    /// Buffer overrun recovered by discarding input
    BufferFullNonFatal = 12,
    /// Session terminated by request
    Quit = 13,
    /// Command letter not recognized by any parser
    UnrecognizedCommand = 14,
    /// Numeric value outside its permitted range
    NumberRangeError = 15,
    /// Parser expected a command letter
    ExpectedCommandLetter = 16,
    /// Structured-data document failed to parse
    JsonSyntaxError = 17,
    /// Input line longer than the input buffer
    InputExceedsMaxLength = 18,
    /// Reply longer than the output buffer
    OutputExceedsMaxLength = 19,
    /// Invariant violation inside the firmware
    InternalError = 20,
    /// Malformed numeric literal
    BadNumberFormat = 21,
    /// Floating point computation failed
    FloatingPointError = 22,
    /// Arc parameters do not describe a valid arc
    ArcSpecificationError = 23,
    /// Motion command describes a zero-length move
    ZeroLengthLine = 24,
    /// Gcode block failed to parse
    GcodeInputError = 25,
    /// Feedrate missing or invalid for the requested motion
    GcodeFeedrateError = 26,
    /// Motion command carries no axis words
    GcodeAxisWordMissing = 27,
    /// Conflicting gcode words in one block
    GcodeModalGroupViolation = 28,
    /// Homing cycle did not complete
    HomingCycleFailed = 29,
    /// Target position outside machine travel
    MaxTravelExceeded = 30,
    /// Requested spindle speed above the configured limit
    MaxSpindleSpeedExceeded = 31,
}

impl Status {
    /// Stable numeric code for this status
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a status by its numeric code
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Status::Ok,
            1 => Status::Error,
            2 => Status::Eagain,
            3 => Status::Noop,
            4 => Status::Complete,
            5 => Status::EndOfLine,
            6 => Status::EndOfFile,
            7 => Status::FileNotOpen,
            8 => Status::MaxFileSizeExceeded,
            9 => Status::NoSuchDevice,
            10 => Status::BufferEmpty,
            11 => Status::BufferFullFatal,
            12 => Status::BufferFullNonFatal,
            13 => Status::Quit,
            14 => Status::UnrecognizedCommand,
            15 => Status::NumberRangeError,
            16 => Status::ExpectedCommandLetter,
            17 => Status::JsonSyntaxError,
            18 => Status::InputExceedsMaxLength,
            19 => Status::OutputExceedsMaxLength,
            20 => Status::InternalError,
            21 => Status::BadNumberFormat,
            22 => Status::FloatingPointError,
            23 => Status::ArcSpecificationError,
            24 => Status::ZeroLengthLine,
            25 => Status::GcodeInputError,
            26 => Status::GcodeFeedrateError,
            27 => Status::GcodeAxisWordMissing,
            28 => Status::GcodeModalGroupViolation,
            29 => Status::HomingCycleFailed,
            30 => Status::MaxTravelExceeded,
            31 => Status::MaxSpindleSpeedExceeded,
            _ => return None,
        })
    }

    /// Canonical human-readable message for this status
    ///
    /// Exhaustive by construction: every status value has exactly one
    /// message, so positional message tables cannot go out of sync.
    pub const fn message(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Error => "Error",
            Status::Eagain => "Eagain",
            Status::Noop => "Noop",
            Status::Complete => "Complete",
            Status::EndOfLine => "End of line",
            Status::EndOfFile => "End of file",
            Status::FileNotOpen => "File not open",
            Status::MaxFileSizeExceeded => "Max file size exceeded",
            Status::NoSuchDevice => "No such device",
            Status::BufferEmpty => "Buffer empty",
            Status::BufferFullFatal => "Buffer full - fatal",
            Status::BufferFullNonFatal => "Buffer full - non-fatal",
            Status::Quit => "Quit",
            Status::UnrecognizedCommand => "Unrecognized command",
            Status::NumberRangeError => "Number range error",
            Status::ExpectedCommandLetter => "Expected command letter",
            Status::JsonSyntaxError => "JSON syntax error",
            Status::InputExceedsMaxLength => "Input exceeds max length",
            Status::OutputExceedsMaxLength => "Output exceeds max length",
            Status::InternalError => "Internal error",
            Status::BadNumberFormat => "Bad number format",
            Status::FloatingPointError => "Floating point error",
            Status::ArcSpecificationError => "Arc specification error",
            Status::ZeroLengthLine => "Zero length line",
            Status::GcodeInputError => "Gcode input error",
            Status::GcodeFeedrateError => "Gcode feedrate error",
            Status::GcodeAxisWordMissing => "Gcode axis word missing",
            Status::GcodeModalGroupViolation => "Gcode modal group violation",
            Status::HomingCycleFailed => "Homing cycle failed",
            Status::MaxTravelExceeded => "Max travel exceeded",
            Status::MaxSpindleSpeedExceeded => "Max spindle speed exceeded",
        }
    }

    /// Scheduling signal rather than an operation outcome
    pub const fn is_flow_control(self) -> bool {
        matches!(self, Status::Eagain | Status::Noop | Status::EndOfFile)
    }

    /// User-actionable failure (anything that is not a success or a
    /// flow-control signal)
    pub const fn is_error(self) -> bool {
        !matches!(
            self,
            Status::Ok
                | Status::Eagain
                | Status::Noop
                | Status::Complete
                | Status::EndOfLine
                | Status::EndOfFile
        )
    }
}
