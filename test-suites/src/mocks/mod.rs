mod gauge;
pub use gauge::{MockGauge, MockGaugeClient};

mod minter;
pub use minter::{MockMinter, MockMinterClient};

mod pool;
pub use pool::{MockPool, MockPoolClient};
