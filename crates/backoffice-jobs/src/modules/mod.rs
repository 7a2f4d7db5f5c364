//! 작업 모듈.

pub mod fx;
pub mod health;
pub mod imbalance;
pub mod prices;
pub mod report;
pub mod snapshot;

pub use fx::{calc_fx_returns, load_fx_rates};
pub use health::health_check;
pub use imbalance::load_shares_imbalance;
pub use prices::{key_by_ticker, load_month_end_prices, load_security_prices, save_daily_prices};
pub use report::{export_records, export_report, list_reports, ExportFormat};
pub use snapshot::{read_snapshot, read_snapshot_file};
