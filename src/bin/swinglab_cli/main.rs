// ABOUTME: SwingLab CLI - command-line front end for the swing scoring engine
// ABOUTME: Normalizes sensor files, scores metrics and series, prescribes drills, scores sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
//!
//! Usage:
//! ```bash
//! # Normalize raw sensor swings (object or array)
//! swinglab normalize swings.json --sdk-version 2.4.1
//!
//! # 4B scores for a metrics document
//! swinglab score metrics.json --bracket 14u
//!
//! # Kinetic fingerprint of a momentum series
//! swinglab fingerprint frames.json --contact 42
//!
//! # Drills for leak flags
//! swinglab prescribe --flags flag_casting,flag_no_brake --profile WHIPPER
//!
//! # Full session report (object or array of sessions)
//! swinglab session session.json
//! ```
//!
//! JSON results go to stdout and logs to stderr. `-` reads the input from stdin.

mod commands;
mod helpers;

use anyhow::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use swinglab::config::EngineConfig;
use swinglab::constants::service_names;
use swinglab::errors::{AppError, ErrorCode};
use swinglab::logging::LoggingConfig;
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "swinglab",
    about = "SwingLab swing scoring CLI",
    long_about = "Normalize bat-sensor data, score swings with the 4B and kinetic fingerprint \
                  scorers, and prescribe drills."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Normalize raw sensor records into canonical swings
    Normalize {
        /// JSON file holding one record or an array of records
        input: PathBuf,

        /// Session the swings belong to (random when omitted)
        #[arg(long)]
        session_id: Option<Uuid>,

        /// SDK version tag to attach
        #[arg(long)]
        sdk_version: Option<String>,

        /// Swing numbers start after this offset
        #[arg(long, default_value = "0")]
        offset: u32,
    },

    /// Score a SwingMetrics document with the 4B scorer
    Score {
        /// JSON file holding SwingMetrics
        input: PathBuf,

        /// Age bracket key (10u, 12u, 14u, hs, college, pro)
        #[arg(long)]
        bracket: Option<String>,
    },

    /// Score a momentum series with the kinetic fingerprint scorer
    Fingerprint {
        /// JSON file holding an array of momentum frames
        input: PathBuf,

        /// Known contact frame index
        #[arg(long)]
        contact: Option<usize>,
    },

    /// Prescribe drills for leak flags
    Prescribe {
        /// Comma-separated flag tokens
        #[arg(long)]
        flags: String,

        /// Motor profile (SPINNER, WHIPPER, SLINGSHOTTER, TITAN)
        #[arg(long)]
        profile: Option<String>,
    },

    /// Score a full session
    Session {
        /// JSON file holding one session or an array of sessions
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::from(exit_status(&error))
        }
    }
}

/// Process status for a failed command; engine errors map through their code
fn exit_status(error: &Error) -> u8 {
    let code = error
        .downcast_ref::<AppError>()
        .map_or(ErrorCode::InternalError, |app_error| app_error.code);
    u8::try_from(code.exit_code()).unwrap_or(1)
}

fn run(cli: Cli) -> Result<()> {

    let logging = LoggingConfig::from_env().with_service_name(service_names::SWINGLAB_CLI);
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = EngineConfig::from_env()?;
    debug!(config = %config.summary(), "SwingLab CLI");

    match cli.command {
        Command::Normalize {
            input,
            session_id,
            sdk_version,
            offset,
        } => commands::sensor::normalize(&config, &input, session_id, sdk_version, offset),
        Command::Score { input, bracket } => {
            commands::score::four_b(&config, &input, bracket.as_deref())
        }
        Command::Fingerprint { input, contact } => {
            commands::score::fingerprint(&config, &input, contact)
        }
        Command::Prescribe { flags, profile } => {
            commands::prescribe::prescribe(&config, &flags, profile.as_deref())
        }
        Command::Session { input } => commands::session::score(&config, &input),
    }
}
