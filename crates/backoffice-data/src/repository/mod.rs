//! Repository 계층.
//!
//! 각 repository는 주입된 `Database` 풀을 소유하며 호출마다 연결을 빌려 씁니다.

pub mod broker_data;
pub mod lookups;
pub mod security_price;

pub use broker_data::BrokerDataRepository;
pub use lookups::LookupRepository;
pub use security_price::{DailySaveReport, SecurityPriceRepository, StepStatus};
