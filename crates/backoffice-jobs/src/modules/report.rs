//! 리포트 내보내기.

use backoffice_data::{BrokerDataRepository, ProcedureReport, ReportKind, ReportQuery, ReportTable};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use tracing::info;

use crate::Result;

/// 내보내기 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// 카탈로그 리포트를 조회해 기록합니다. 내보낸 행 수를 반환합니다.
pub async fn export_report<W: Write>(
    repo: &BrokerDataRepository,
    kind: ReportKind,
    query: &ReportQuery,
    format: ExportFormat,
    writer: W,
) -> Result<usize> {
    let table = repo.fetch_table(kind, query).await?;
    info!(report = %kind, rows = table.len(), range = %query.range, "리포트 조회 완료");

    write_table(&table, format, writer)?;
    Ok(table.len())
}

/// 표를 지정 형식으로 기록합니다. CSV는 행이 없어도 헤더를 씁니다.
pub fn write_table<W: Write>(table: &ReportTable, format: ExportFormat, mut writer: W) -> Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &table.rows)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            csv.write_record(&table.columns)?;
            for row in &table.rows {
                csv.write_record(table.columns.iter().map(|c| cell(&row[*c])))?;
            }
            csv.flush()?;
        }
    }
    Ok(())
}

/// 프로시저 리포트 레코드를 기록합니다. CSV는 행이 없어도 헤더를 씁니다.
pub fn export_records<T: ProcedureReport + Serialize, W: Write>(
    records: &[T],
    format: ExportFormat,
    mut writer: W,
) -> Result<usize> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
        ExportFormat::Csv => {
            let mut csv = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);
            csv.write_record(T::COLUMNS)?;
            for record in records {
                csv.serialize(record)?;
            }
            csv.flush()?;
        }
    }
    Ok(records.len())
}

/// 카탈로그 목록을 기록합니다 (이름, 테이블, 펀드/티커 필터 지원 여부).
pub fn list_reports<W: Write>(mut writer: W) -> Result<()> {
    for kind in ReportKind::ALL {
        let source = kind.source();
        writeln!(
            writer,
            "{:<24} {:<24} fund={:<5} ticker={}",
            kind.as_str(),
            source.table,
            source.fund_column.is_some(),
            source.ticker_column.is_some()
        )?;
    }
    Ok(())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_data::reports::vendor::BdcResearchRecord;
    use backoffice_data::{FundSummaryRecord, SecurityMarginHistoryRecord};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample_table() -> ReportTable {
        let record = BdcResearchRecord {
            as_of_date: NaiveDate::from_ymd_opt(2024, 3, 29).unwrap(),
            ticker: "ARCC".to_string(),
            company_name: Some("Ares Capital, Inc.".to_string()),
            nav_per_share: Some(dec!(19.63)),
            price_to_nav: None,
            dividend_yield: None,
            net_investment_income: None,
            non_accrual_pct: None,
            analyst_rating: None,
        };
        ReportTable::from_records(&[record]).unwrap()
    }

    #[test]
    fn test_csv_keeps_column_order_and_blanks_nulls() {
        let mut out = Vec::new();
        write_table(&sample_table(), ExportFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next().unwrap(),
            "as_of_date,ticker,company_name,nav_per_share,price_to_nav,dividend_yield,net_investment_income,non_accrual_pct,analyst_rating"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-03-29,ARCC,\"Ares Capital, Inc.\",19.63,,,,,"
        );
    }

    #[test]
    fn test_json_export_is_array_of_rows() {
        let mut out = Vec::new();
        write_table(&sample_table(), ExportFormat::Json, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 1);
        assert_eq!(parsed[0]["ticker"], "ARCC");
        assert!(parsed[0]["price_to_nav"].is_null());
    }

    #[test]
    fn test_empty_procedure_export_writes_header() {
        let mut out = Vec::new();
        let rows = export_records::<FundSummaryRecord, _>(&[], ExportFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(rows, 0);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("fund_name,as_of_date,nav,"));
    }

    #[test]
    fn test_procedure_export_has_single_header() {
        let record = SecurityMarginHistoryRecord {
            as_of_date: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            ticker: "ABC".to_string(),
            fund_name: Some("OPP".to_string()),
            broker: Some("JPM".to_string()),
            quantity: Some(dec!(100)),
            market_value: Some(dec!(2500)),
            margin_requirement: Some(dec!(750)),
            margin_pct: Some(dec!(0.30)),
        };
        let mut out = Vec::new();
        export_records(&[record], ExportFormat::Csv, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], SecurityMarginHistoryRecord::COLUMNS.join(","));
        assert_eq!(lines[1], "2024-05-31,ABC,OPP,JPM,100,2500,750,0.30");
    }

    #[test]
    fn test_list_reports_covers_catalog() {
        let mut out = Vec::new();
        list_reports(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), ReportKind::ALL.len());
        assert!(text.contains("jpm-margin"));
        assert!(text.contains("bdc_research"));
    }
}
