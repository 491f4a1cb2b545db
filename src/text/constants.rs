// Width used when the caller does not pick one.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

// Characters a line may be broken at. Tabs are not breakpoints.
pub const BREAKPOINTS: [char; 3] = [' ', '\n', '\r'];

// A break is never taken within the first two characters of a line.
pub const MIN_BREAK_OFFSET: usize = 2;

pub const DEFAULT_UNDERLINE: char = '=';
