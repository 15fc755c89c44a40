// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use decode_caps::app::insights::render_descriptors;
use decode_caps::{
    CapabilityOracle, CapabilityReport, CheckState, CodecRegistry, CodecRole, DeviceClass,
    RegistryView, SnapshotRegistry,
};

/// Decoder capability oracle
#[derive(Parser, Debug)]
#[command(name = "decode-caps", version, about, long_about = None)]
struct Args {
    /// JSON codec registry snapshot
    #[arg(short, long, env = "DECODE_CAPS_REGISTRY")]
    registry: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check one (mime, role, profile, level) tuple
    Query {
        /// Codec mime type (e.g., video/hevc)
        #[arg(short, long)]
        mime: String,
        #[arg(long, value_enum, default_value = "decoder")]
        role: RoleArg,
        /// Profile code, decimal or 0x-prefixed hex
        #[arg(short, long, value_parser = parse_code)]
        profile: i32,
        /// Level code, decimal or 0x-prefixed hex
        #[arg(short, long, value_parser = parse_code)]
        level: i32,
    },
    /// Run the named decoder checks and print the derived playback conditions
    Checks {
        #[arg(long, value_enum, default_value_t = DeviceClass::Generic)]
        device: DeviceClass,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also cap audio channels for video streams
        #[arg(long)]
        max_audio_channels: Option<u32>,
    },
    /// List codecs in the snapshot
    List {
        /// Include codecs outside the regular view
        #[arg(long)]
        all: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum RoleArg {
    Decoder,
    Encoder,
}

impl From<RoleArg> for CodecRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Decoder => CodecRole::Decoder,
            RoleArg::Encoder => CodecRole::Encoder,
        }
    }
}

fn parse_code(s: &str) -> Result<i32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => i32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid code {s:?}: {e}"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,decode_caps=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let registry = SnapshotRegistry::from_path(&args.registry)?;

    match args.command {
        Command::Query {
            mime,
            role,
            profile,
            level,
        } => {
            let oracle = CapabilityOracle::new(&registry);
            let supported = oracle.query(&mime, role.into(), profile, level);
            println!("{}", CheckState::from(supported).label());
        }
        Command::Checks {
            device,
            json,
            max_audio_channels,
        } => {
            let oracle = CapabilityOracle::new(&registry);
            let mut report = CapabilityReport::collect(&oracle, device);
            if let Some(channels) = max_audio_channels {
                report = report.with_max_audio_channels(channels);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
        }
        Command::List { all, json } => {
            let view = if all {
                RegistryView::All
            } else {
                RegistryView::Regular
            };
            let descriptors = registry.codec_infos(view);
            if json {
                println!("{}", serde_json::to_string_pretty(&descriptors)?);
            } else {
                print!("{}", render_descriptors(&descriptors));
            }
        }
    }

    Ok(())
}
