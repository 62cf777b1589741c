// Record opcodes for the Uberducky script format
pub const OP_NOP: u8 = 0x00;
pub const OP_KEY: u8 = 0x01;
pub const OP_DELAY: u8 = 0x02;
pub const OP_STRING: u8 = 0x03;
pub const OP_REPEAT: u8 = 0x04;

// Key record kinds (first payload byte of OP_KEY)
pub const KEY_CHAR: u8 = 0x00;
pub const KEY_ENTER: u8 = 0x01;
pub const KEY_TAB: u8 = 0x02;
pub const KEY_ESC: u8 = 0x03;
pub const KEY_BACKSPACE: u8 = 0x04;
pub const KEY_RAW: u8 = 0x05;

// HID usage codes carried by KEY_RAW records
pub const SCAN_NONE: u8 = 0x00;
pub const SCAN_F1: u8 = 0x3A;
pub const SCAN_F12: u8 = 0x45;
pub const SCAN_PRINTSCREEN: u8 = 0x46;
pub const SCAN_RIGHT: u8 = 0x4F;
pub const SCAN_UP: u8 = 0x52;
pub const SCAN_MENU: u8 = 0x76;

// Modifier bits (second payload byte of OP_KEY)
pub const MOD_CONTROL: u8 = 0x01;
pub const MOD_SHIFT: u8 = 0x02;
pub const MOD_ALT: u8 = 0x04;
pub const MOD_WINDOWS: u8 = 0x08;

/// Size of the little-endian length prefix in front of every script
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Largest body (and largest string payload) a 16-bit length can describe
pub const MAX_SCRIPT_BODY: usize = u16::MAX as usize;
