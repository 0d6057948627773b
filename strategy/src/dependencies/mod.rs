mod gauge;
pub use gauge::{Client as GaugeClient, GaugeInterface};

mod minter;
pub use minter::{Client as MinterClient, MinterInterface};

mod pool;
pub use pool::{Client as PoolClient, PoolInterface};
