// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
// ABOUTME: `swinglab session` command
// ABOUTME: Scores one session document, or an array of sessions in parallel

use crate::helpers::io::{print_json, read_json};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use swinglab::config::EngineConfig;
use swinglab::errors::{AppError, AppResult, ErrorResponse};
use swinglab::pipeline::{ScoringPipeline, SessionInput, SessionReport};
use tracing::warn;
use uuid::Uuid;

/// One entry of the batch output, positioned like its input session
#[derive(Serialize)]
#[serde(untagged)]
enum SessionOutcome {
    Scored(Box<SessionReport>),
    Failed {
        session_id: Uuid,
        #[serde(flatten)]
        response: ErrorResponse,
    },
}

/// Score a session file
///
/// A batch prints one entry per input session; failed sessions carry their
/// error and make the command exit with the first failure's code.
pub fn score(config: &EngineConfig, input: &Path) -> Result<()> {
    let pipeline = ScoringPipeline::with_config(config);
    let document: Value = read_json(input)?;

    if !document.is_array() {
        let session: SessionInput = serde_json::from_value(document)?;
        return print_json(&pipeline.score_session(&session)?);
    }

    let sessions: Vec<SessionInput> = serde_json::from_value(document)?;
    let mut first_failure = None;
    let mut failed = 0_usize;
    let outcomes: Vec<SessionOutcome> = pipeline
        .score_sessions(&sessions)
        .into_iter()
        .zip(&sessions)
        .map(|(result, session)| {
            let outcome = outcome_for(result, session);
            if let SessionOutcome::Failed { response, .. } = &outcome {
                failed += 1;
                first_failure.get_or_insert(response.error.code);
            }
            outcome
        })
        .collect();
    print_json(&outcomes)?;

    match first_failure {
        Some(code) => Err(AppError::new(
            code,
            format!("{failed} of {} sessions failed to score", sessions.len()),
        )
        .into()),
        None => Ok(()),
    }
}

fn outcome_for(result: AppResult<SessionReport>, session: &SessionInput) -> SessionOutcome {
    match result {
        Ok(report) => SessionOutcome::Scored(Box::new(report)),
        Err(error) => {
            warn!(session_id = %session.session_id, error = %error, "Session failed to score");
            SessionOutcome::Failed {
                session_id: session.session_id,
                response: ErrorResponse::from(error),
            }
        }
    }
}
