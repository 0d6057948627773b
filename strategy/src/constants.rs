// Token precision
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places

// Share of harvested native routed to the fee recipient
pub const PERFORMANCE_FEE: i128 = 0_0450000; // 4.5% in SCALAR_7
