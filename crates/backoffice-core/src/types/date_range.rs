//! 리포트 조회 기간.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// 호출자가 넘기는 날짜 문자열에서 허용하는 형식.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y%m%d"];

/// 양 끝을 포함하는 조회 기간.
///
/// 리포트 쿼리는 `BETWEEN start AND end`로 바인딩되므로 시작일이
/// 종료일보다 늦은 기간은 생성 단계에서 거부합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// 역직렬화 입력. `DateRange::new`의 검증을 거칩니다.
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = CoreError;

    fn try_from(raw: RawDateRange) -> CoreResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// 새 조회 기간을 생성합니다.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::InvalidInput(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// 하루짜리 기간.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// 문자열 두 개에서 기간을 파싱합니다.
    ///
    /// 지원 형식: `YYYY-MM-DD`, `MM/DD/YYYY`, `YYYYMMDD`.
    pub fn parse(start: &str, end: &str) -> CoreResult<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// 날짜가 기간 안에 있는지 확인합니다.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 기간에 포함된 일수 (양 끝 포함).
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// 날짜 문자열을 파싱합니다.
pub fn parse_date(raw: &str) -> CoreResult<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| CoreError::InvalidInput(format!("unrecognized date: {:?}", raw)))
}
