//! 리포트 선언 매크로.

/// 브로커 리포트 선언 매크로
///
/// 레코드 구조체와 원천 테이블 정보를 한 번에 선언합니다. 필드 이름이 곧
/// 테이블 컬럼 이름이며, 선언 순서대로 SELECT 목록이 만들어집니다.
///
/// # 원천 필드
/// - `table`: 원천 테이블
/// - `date`: 조회 기간을 적용하고 정렬에 쓰는 날짜 컬럼
/// - `fund`: 펀드 별칭을 적용할 브로커 계좌 컬럼 (`Some("...")` / `None`).
///   지정하면 레코드에 `fund_name: String` 필드가 있어야 합니다.
/// - `ticker`: 티커 필터를 적용할 컬럼 (`Some("...")` / `None`)
///
/// # 예시
/// ```ignore
/// broker_report! {
///     /// JPM 마진 상세.
///     JpmMargin => JpmMarginRecord {
///         table: "jpm_margin_detail",
///         date: "file_date",
///         fund: Some("account_number"),
///         ticker: None,
///     }
///     {
///         fund_name: String,
///         file_date: NaiveDate,
///         net_equity: Option<Decimal>,
///     }
/// }
/// ```
macro_rules! broker_report {
    (
        $(#[$meta:meta])*
        $kind:ident => $name:ident {
            table: $table:literal,
            date: $date:literal,
            fund: $fund:expr,
            ticker: $ticker:expr $(,)?
        }
        {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::sqlx::FromRow)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $crate::reports::BrokerReport for $name {
            const KIND: $crate::reports::ReportKind = $crate::reports::ReportKind::$kind;
            const SOURCE: $crate::reports::ReportSource = $crate::reports::ReportSource {
                table: $table,
                date_column: $date,
                fund_column: $fund,
                ticker_column: $ticker,
                order: $crate::reports::SortOrder::Descending,
            };
            const COLUMNS: &'static [&'static str] = &[$(stringify!($field)),*];
        }
    };
}

/// 리포트 카탈로그 매크로
///
/// `ReportKind` 열거형과 종류별 이름/컬럼/원천 조회, 그리고 제네릭 방문자
/// 디스패치를 생성합니다. CLI처럼 리포트 이름을 문자열로 받는 쪽에서
/// 제네릭 조회 함수로 연결할 때 사용합니다.
macro_rules! report_catalog {
    (
        $( $(#[$meta:meta])* $kind:ident => $slug:literal => $record:ty ),* $(,)?
    ) => {
        /// 리포트 종류.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ReportKind {
            $( $(#[$meta])* $kind, )*
        }

        impl ReportKind {
            /// 카탈로그의 모든 리포트.
            pub const ALL: &'static [ReportKind] = &[$(ReportKind::$kind),*];

            /// kebab-case 이름 (예: "jpm-margin").
            pub fn as_str(self) -> &'static str {
                match self {
                    $(ReportKind::$kind => $slug,)*
                }
            }

            /// 레코드 컬럼 목록 (선언 순서).
            pub fn columns(self) -> &'static [&'static str] {
                match self {
                    $(ReportKind::$kind => <$record as $crate::reports::BrokerReport>::COLUMNS,)*
                }
            }

            /// 원천 테이블 정보.
            pub fn source(self) -> $crate::reports::ReportSource {
                match self {
                    $(ReportKind::$kind => <$record as $crate::reports::BrokerReport>::SOURCE,)*
                }
            }

            /// 종류에 해당하는 레코드 타입으로 방문자를 호출합니다.
            pub fn visit<V: $crate::reports::ReportVisitor>(self, visitor: V) -> V::Output {
                match self {
                    $(ReportKind::$kind => visitor.visit::<$record>(),)*
                }
            }
        }

        impl ::std::str::FromStr for ReportKind {
            type Err = $crate::error::DataError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase().replace('_', "-");
                ReportKind::ALL
                    .iter()
                    .copied()
                    .find(|kind| kind.as_str() == wanted)
                    .ok_or_else(|| {
                        $crate::error::DataError::InvalidInput(format!("unknown report: {}", s))
                    })
            }
        }
    };
}
