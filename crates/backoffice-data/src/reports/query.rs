//! 리포트 SELECT 문 생성.
//!
//! 호출자가 넘긴 값(기간, 펀드, 티커, 별칭)은 모두 `?` 파라미터로 바인딩하고,
//! SQL 텍스트에는 카탈로그에 선언된 식별자만 들어갑니다.

use backoffice_core::{normalize_ticker, FundAliasMap};
use sqlx::{MySql, QueryBuilder};

use super::{BrokerReport, ReportQuery, FUND_NAME_COLUMN};
use crate::error::{DataError, Result};

/// MySQL 식별자를 백틱으로 감쌉니다.
pub fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// 리포트 조회 SELECT 문을 생성합니다.
///
/// ```text
/// SELECT COALESCE(CASE `account` WHEN ? THEN ? ... ELSE `account` END, '') AS fund_name, `file_date`, ...
/// FROM `table`
/// WHERE `file_date` BETWEEN ? AND ? [AND <fund expr> = ?] [AND `ticker` = ?]
/// ORDER BY `file_date` DESC
/// ```
pub fn select_statement<R: BrokerReport>(
    aliases: &FundAliasMap,
    query: &ReportQuery,
) -> Result<QueryBuilder<'static, MySql>> {
    let source = R::SOURCE;
    let mut builder: QueryBuilder<'static, MySql> = QueryBuilder::new("SELECT ");

    for (i, column) in R::COLUMNS.iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        match source.fund_column {
            Some(account) if *column == FUND_NAME_COLUMN => {
                push_fund_expr(&mut builder, aliases, account);
                builder.push(" AS ");
                builder.push(quote_ident(FUND_NAME_COLUMN));
            }
            _ => {
                builder.push(quote_ident(column));
            }
        }
    }

    builder.push(" FROM ");
    builder.push(quote_ident(source.table));
    builder.push(" WHERE ");
    builder.push(quote_ident(source.date_column));
    builder.push(" BETWEEN ");
    builder.push_bind(query.range.start());
    builder.push(" AND ");
    builder.push_bind(query.range.end());

    if let Some(fund) = &query.fund {
        let account = source.fund_column.ok_or_else(|| {
            DataError::InvalidInput(format!("report {} has no fund column", R::KIND))
        })?;
        builder.push(" AND ");
        push_fund_expr(&mut builder, aliases, account);
        builder.push(" = ");
        builder.push_bind(fund.trim().to_string());
    }

    if let Some(ticker) = &query.ticker {
        let column = source.ticker_column.ok_or_else(|| {
            DataError::InvalidInput(format!("report {} has no ticker column", R::KIND))
        })?;
        builder.push(" AND ");
        builder.push(quote_ident(column));
        builder.push(" = ");
        builder.push_bind(normalize_ticker(ticker));
    }

    builder.push(" ORDER BY ");
    builder.push(quote_ident(source.date_column));
    builder.push(" ");
    builder.push(source.order.as_sql());

    Ok(builder)
}

/// 계좌 컬럼에 별칭을 적용하는 식을 추가합니다.
fn push_fund_expr(builder: &mut QueryBuilder<'static, MySql>, aliases: &FundAliasMap, account: &str) {
    let column = quote_ident(account);

    if aliases.is_empty() {
        builder.push(format!("COALESCE({}, '')", column));
        return;
    }

    builder.push(format!("COALESCE(CASE {}", column));
    for (from, to) in aliases.iter() {
        builder.push(" WHEN ");
        builder.push_bind(from.to_string());
        builder.push(" THEN ");
        builder.push_bind(to.to_string());
    }
    builder.push(format!(" ELSE {} END, '')", column));
}
