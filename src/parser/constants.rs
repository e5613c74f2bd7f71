// Combined depth of parentheses and prefix operators the parser will descend into
pub const MAX_NESTING_DEPTH: usize = 256;
