//! 스냅샷 CSV 읽기.
//!
//! 헤더 행의 컬럼 이름이 레코드 필드 이름과 같아야 합니다. 빈 칸은 `None`입니다.

use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::Result;

/// 리더에서 레코드를 모두 읽습니다. 한 행이라도 잘못되면 전체가 실패합니다.
pub fn read_snapshot<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(rows)
}

/// 파일에서 레코드를 모두 읽습니다.
pub fn read_snapshot_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = std::fs::File::open(path)?;
    let rows = read_snapshot(file)?;
    debug!(path = %path.display(), rows = rows.len(), "스냅샷 파일 읽기 완료");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_data::{DailyPrice, SecurityPrice};
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_empty_cells_are_none() {
        let data = "ticker,bid,ask,last,source,trade_time,is_real_time\n\
                    ABC US, 10.01 ,10.03,,NEOVEST,2024-05-01T15:59:00,true\n\
                    XYZ,,,99.5,,,false\n";

        let rows: Vec<SecurityPrice> = read_snapshot(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bid, Some(dec!(10.01)));
        assert_eq!(rows[0].last, None);
        assert!(rows[0].is_real_time);
        assert_eq!(rows[1].source, None);
        assert_eq!(rows[1].trade_time, None);
    }

    #[test]
    fn test_malformed_row_fails_whole_file() {
        let data = "ticker,price_date,close_price,currency,source\n\
                    ABC,2024-05-31,10.5,USD,\n\
                    XYZ,not-a-date,1,USD,\n";

        let result: Result<Vec<DailyPrice>> = read_snapshot(data.as_bytes());
        assert!(matches!(result, Err(crate::JobError::Csv(_))));
    }

    #[test]
    fn test_read_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ticker,price_date,close_price,currency,source").unwrap();
        writeln!(file, "ARCC,2024-05-31,20.11,USD,BBG").unwrap();

        let rows: Vec<DailyPrice> = read_snapshot_file(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].close_price, Some(dec!(20.11)));
    }
}
