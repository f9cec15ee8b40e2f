// Desktop host crate: unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod feed;
mod frame_loop;
mod framebuffer;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ticker_core::config::Velocity;
use ticker_core::NextFrame;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::feed::Feed;
use crate::frame_loop::{demo_config, FrameLoop, FrameStats};
use crate::framebuffer::Framebuffer;

#[derive(Parser, Debug)]
#[command(name = "ticker-demo")]
#[command(about = "Drive a horizontal ticker with a random label feed", long_about = None)]
#[command(version)]
struct Cli {
    /// Display width in pixels
    #[arg(long, default_value_t = 296)]
    width: u32,
    /// Display height in pixels
    #[arg(long, default_value_t = 24)]
    height: u32,
    /// Frames to run
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Travel per frame in pixels
    #[arg(long, default_value_t = Velocity::DEFAULT.get())]
    velocity: u32,
    /// Gap between labels in pixels
    #[arg(long, default_value_t = 10)]
    divider: u32,
    /// Seed for the random feed
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Frame rate; 0 runs unthrottled
    #[arg(long, default_value_t = 30)]
    fps: u32,
    /// Longest pause between labels, in frames
    #[arg(long, default_value_t = 450)]
    max_delay_frames: u32,
    /// Save the last frame as a PNG
    #[arg(long)]
    screenshot: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let velocity = Velocity::new(cli.velocity).context("invalid --velocity")?;

    let mut frames = FrameLoop::new(
        demo_config(velocity, cli.divider),
        Framebuffer::new(cli.width, cli.height),
        Feed::new(cli.seed, cli.max_delay_frames),
    );
    info!(
        width = cli.width,
        height = cli.height,
        velocity = cli.velocity,
        divider = cli.divider,
        seed = cli.seed,
        "ticker demo starting"
    );

    let stats = run(&mut frames, cli.frames, cli.fps).await;
    info!(
        frames = stats.frames,
        active = stats.active_frames,
        enqueued = stats.enqueued,
        rejected = stats.rejected,
        retired = stats.retired,
        on_screen = frames.ticker().child_count(),
        queued = frames.ticker().queued_len(),
        inked_pixels = frames.framebuffer().inked_pixels(),
        "ticker demo finished"
    );

    if let Some(path) = cli.screenshot {
        frames.framebuffer().screenshot(&path)?;
        info!(path = %path.display(), "screenshot saved");
    }
    Ok(())
}

/// Step `frames` times, paced at `fps` (unthrottled when zero).
async fn run(frames: &mut FrameLoop, count: u64, fps: u32) -> FrameStats {
    let mut pacer = Duration::from_secs(1).checked_div(fps).map(|period| {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        interval
    });

    for _ in 0..count {
        if let Some(interval) = pacer.as_mut() {
            interval.tick().await;
        }
        if frames.step() == NextFrame::Idle {
            tracing::trace!("ticker idle");
        }
    }
    frames.stats()
}
