// Token precision
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places
