//! Back-office job runner CLI.

use anyhow::Context;
use backoffice_core::{init_logging, AppConfig, DateRange, LogConfig};
use backoffice_data::{ReportKind, ReportQuery};
use backoffice_jobs::modules::{self, ExportFormat};
use backoffice_jobs::JobContext;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backoffice-jobs")]
#[command(about = "Back-office ingest and report jobs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 설정 파일 경로 (TOML). 없으면 기본값과 환경 변수만 사용
    #[arg(long, env = "BACKOFFICE_CONFIG")]
    config: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error). 설정 파일 값보다 우선
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// 실시간 가격 스냅샷 적재 (neovest_prices_staging → spPopulateNeovestPrices)
    LoadPrices {
        /// 스냅샷 CSV 파일
        file: PathBuf,
    },

    /// 실시간 환율 적재 (live_fx_rates_staging → spPopulateLiveFXRates)
    LoadFxRates { file: PathBuf },

    /// 주문 불균형 적재 (단일 트랜잭션)
    LoadSharesImbalance { file: PathBuf },

    /// 월말 가격 적재
    LoadMonthEndPrices { file: PathBuf },

    /// 일간 가격 저장 후 FX 수익률 계산 (단계 실패는 기록 후 계속)
    SaveDailyPrices {
        file: PathBuf,

        /// 기준일 (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// 실패한 단계가 있으면 0이 아닌 코드로 종료
        #[arg(long)]
        strict: bool,
    },

    /// FX 수익률 계산 (spCalcFXReturns)
    CalcFxReturns {
        #[arg(long)]
        date: String,
    },

    /// 카탈로그 리포트 내보내기
    Report {
        /// 리포트 이름 (예: jpm-margin). 목록은 list-reports
        kind: ReportKind,

        #[command(flatten)]
        range: RangeArgs,

        /// 펀드 코드 필터 (별칭 적용 후, 예: OPP)
        #[arg(long)]
        fund: Option<String>,

        /// 티커 필터 (" US" 접미사는 제거됨)
        #[arg(long)]
        ticker: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// 펀드 요약 내보내기 (spGetFundSummary)
    FundSummary {
        fund: String,

        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// 종목별 마진 이력 내보내기 (spGetSecurityMarginHistory)
    MarginHistory {
        ticker: String,

        #[command(flatten)]
        range: RangeArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// 리포트 카탈로그 출력
    ListReports,

    /// 데이터베이스 연결 확인
    HealthCheck,
}

#[derive(Args)]
struct RangeArgs {
    /// 시작일 (YYYY-MM-DD, MM/DD/YYYY, YYYYMMDD)
    #[arg(long)]
    start: String,

    /// 종료일 (포함)
    #[arg(long)]
    end: String,
}

impl RangeArgs {
    fn parse(&self) -> anyhow::Result<DateRange> {
        Ok(DateRange::parse(&self.start, &self.end)?)
    }
}

#[derive(Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// 출력 파일. 없으면 표준 출력
    #[arg(long, short)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
            )),
            None => Box::new(std::io::stdout().lock()),
        })
    }
}

fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    Ok(backoffice_core::parse_date(value)?)
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load(path),
        None => AppConfig::from_env(),
    };
    Ok(config?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // 설정 로드
    let config = load_config(cli.config.as_ref())?;

    // 로깅 초기화
    let mut log_config: LogConfig = config.logging.to_log_config();
    if let Some(level) = &cli.log_level {
        log_config.level = level.clone();
    }
    init_logging(log_config).map_err(|e| anyhow::anyhow!("logging init failed: {}", e))?;

    // DB가 필요 없는 명령
    if let Commands::ListReports = cli.command {
        modules::list_reports(std::io::stdout().lock())?;
        return Ok(());
    }

    tracing::info!("Back-office job runner 시작");
    let ctx = JobContext::connect(config).await?;

    let result = run(&ctx, cli.command).await;

    ctx.close().await;
    tracing::info!("Back-office job runner 종료");

    result
}

async fn run(ctx: &JobContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::LoadPrices { file } => {
            let rows = modules::read_snapshot_file(&file)?;
            let stats = modules::load_security_prices(&ctx.prices(), rows).await?;
            stats.log_summary("실시간 가격 적재");
        }
        Commands::LoadFxRates { file } => {
            let rows = modules::read_snapshot_file(&file)?;
            let stats = modules::load_fx_rates(&ctx.prices(), rows).await?;
            stats.log_summary("환율 적재");
        }
        Commands::LoadSharesImbalance { file } => {
            let rows = modules::read_snapshot_file(&file)?;
            let stats = modules::load_shares_imbalance(&ctx.prices(), rows).await?;
            stats.log_summary("주문 불균형 적재");
        }
        Commands::LoadMonthEndPrices { file } => {
            let rows = modules::read_snapshot_file(&file)?;
            let stats = modules::load_month_end_prices(&ctx.prices(), rows).await?;
            stats.log_summary("월말 가격 적재");
        }
        Commands::SaveDailyPrices { file, date, strict } => {
            let date = parse_date(&date)?;
            let rows = modules::read_snapshot_file(&file)?;
            let stats = modules::save_daily_prices(&ctx.prices(), date, rows).await?;
            stats.log_summary("일간 가격 저장");
            if strict {
                stats.ensure_success("일간 가격 저장")?;
            }
        }
        Commands::CalcFxReturns { date } => {
            let date = parse_date(&date)?;
            let stats = modules::calc_fx_returns(&ctx.prices(), date).await?;
            stats.log_summary("FX 수익률 계산");
        }
        Commands::Report {
            kind,
            range,
            fund,
            ticker,
            output,
        } => {
            let mut query = ReportQuery::new(range.parse()?);
            query.fund = fund;
            query.ticker = ticker;

            let rows = modules::export_report(
                &ctx.broker_data(),
                kind,
                &query,
                output.format,
                output.writer()?,
            )
            .await?;
            tracing::info!(report = %kind, rows, "리포트 내보내기 완료");
        }
        Commands::FundSummary {
            fund,
            range,
            output,
        } => {
            let records = ctx.broker_data().fund_summary(&fund, &range.parse()?).await?;
            let rows = modules::export_records(&records, output.format, output.writer()?)?;
            tracing::info!(fund = %fund, rows, "펀드 요약 내보내기 완료");
        }
        Commands::MarginHistory {
            ticker,
            range,
            output,
        } => {
            let records = ctx
                .broker_data()
                .security_margin_history(&ticker, &range.parse()?)
                .await?;
            let rows = modules::export_records(&records, output.format, output.writer()?)?;
            tracing::info!(ticker = %ticker, rows, "마진 이력 내보내기 완료");
        }
        Commands::HealthCheck => {
            let latency = modules::health_check(&ctx.db).await?;
            println!("ok ({} ms)", latency.as_millis());
        }
        Commands::ListReports => modules::list_reports(std::io::stdout().lock())?,
    }

    Ok(())
}
