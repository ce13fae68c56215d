// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a match's action log.

use crate::error::ApiError;
use courtlog::MatchLog;
use courtlog_domain::ActionRecord;

const HEADER: [&str; 11] = [
    "action_id",
    "possession_number",
    "team_side",
    "attack_type",
    "action_origin",
    "event_kind",
    "finalization_detail",
    "launch_zone",
    "event_detail",
    "possession_changed",
    "match_id",
];

/// Renders a match's action log as CSV, oldest action first.
///
/// Optional fields are left empty rather than filled with a sentinel.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the CSV writer fails.
pub fn export_match_actions(log: &MatchLog) -> Result<String, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(HEADER).map_err(csv_error)?;
    for action in &log.actions {
        writer.write_record(action_record_fields(action)).map_err(csv_error)?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| ApiError::Internal {
            message: format!("Failed to flush CSV writer: {err}"),
        })?;
    String::from_utf8(bytes).map_err(|err| ApiError::Internal {
        message: format!("CSV output was not valid UTF-8: {err}"),
    })
}

fn action_record_fields(action: &ActionRecord) -> [String; 11] {
    [
        action.action_id.map(|id| id.to_string()).unwrap_or_default(),
        action.possession_number.to_string(),
        action.team_side.as_str().to_string(),
        action.attack_type.as_str().to_string(),
        action.action_origin.as_str().to_string(),
        action.event_kind.as_str().to_string(),
        action
            .finalization_detail
            .map(|d| d.as_str().to_string())
            .unwrap_or_default(),
        action
            .launch_zone
            .map(|z| z.as_str().to_string())
            .unwrap_or_default(),
        action
            .event_detail
            .map(|d| d.as_str().to_string())
            .unwrap_or_default(),
        action.possession_changed.to_string(),
        action.match_id.to_string(),
    ]
}

fn csv_error(err: csv::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to write CSV record: {err}"),
    }
}
