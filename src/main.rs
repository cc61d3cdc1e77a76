use std::panic;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use smc_scout::config::BINANCE;
use smc_scout::utils::TimeUtils;
use smc_scout::{BinanceProvider, Cli, MarketSnapshot, ScoutEngine};

#[tokio::main]
async fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("smc_scout"), my_code_level)
        .init();

    let args = Cli::parse();
    let limit = args.limit.unwrap_or(BINANCE.limits.klines_limit);

    let provider = BinanceProvider::new()?;
    let engine = ScoutEngine::new(Box::new(provider));

    if args.watch {
        log::info!(
            "🔭 watching {} {} every {}s",
            args.symbol,
            args.timeframe,
            BINANCE.refresh_interval_sec
        );

        let mut refresh = tokio::time::interval(Duration::from_secs(BINANCE.refresh_interval_sec));
        loop {
            refresh.tick().await;
            match engine.snapshot(args.symbol, args.timeframe, limit).await {
                Ok(snapshot) => print_snapshot(&snapshot),
                Err(err) => log::error!("snapshot failed: {:#}", err),
            }
        }
    }

    let snapshot = engine.snapshot(args.symbol, args.timeframe, limit).await?;
    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &MarketSnapshot) {
    println!();
    println!("==============================================================");
    println!(
        " {} {} | {} ({:+.2}% 24h)",
        snapshot.symbol,
        snapshot.timeframe,
        snapshot.ticker.last_price,
        snapshot.ticker.change_24h_pct
    );
    if let Some(last_ts) = snapshot.series.last_timestamp() {
        println!(" last candle {}", TimeUtils::epoch_ms_to_utc(last_ts));
    }
    println!("==============================================================");

    println!("Trend map:");
    if snapshot.timeframe_trends.is_empty() {
        println!("  (no timeframe data)");
    }
    for trend in &snapshot.timeframe_trends {
        println!("  {:<4} {:<8} {}", trend.timeframe, trend.bias, trend.last_price);
    }

    if let Some(last_ema) = snapshot.ema.last() {
        println!("EMA: {:.4} over {} candles", last_ema, snapshot.series.klines());
    }

    println!();
    println!("Zones (newest last):");
    if snapshot.structure.zones.is_empty() {
        println!("  none detected");
    }
    for zone in &snapshot.structure.zones {
        println!(
            "  {:<4} {:<8} {} to {} | mid {} | width {:.4} | since {}",
            zone.kind,
            zone.bias,
            zone.bottom,
            zone.top,
            zone.midpoint(),
            zone.height(),
            TimeUtils::epoch_ms_to_utc(zone.start_time)
        );
    }

    println!();
    println!("Trendlines:");
    if snapshot.structure.trend_lines.is_empty() {
        println!("  none detected");
    }
    for line in &snapshot.structure.trend_lines {
        println!(
            "  {:<10} {} {} to {} {}",
            line.direction,
            TimeUtils::epoch_ms_to_utc(line.x1),
            line.y1,
            TimeUtils::epoch_ms_to_utc(line.x2),
            line.y2
        );
    }
    println!();
}
