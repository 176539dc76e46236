//! Buffer capacities that always fit a stringified value.

/// Capacity for any `i64`: `-9223372036854775808` is 20 bytes, plus one for a
/// caller-appended terminator.
pub const INT_BUF_LEN: usize = 21;

/// Capacity for any `f64` in shortest round-trip form. The longest outputs,
/// such as `-2.2250738585072014e-308`, are 24 bytes.
pub const FLOAT_BUF_LEN: usize = 32;

/// Capacity for `false`.
pub const BOOL_BUF_LEN: usize = 5;
