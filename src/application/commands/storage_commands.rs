// src/application/commands/storage_commands.rs
//
// Local store diagnostics

use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::db::{get_connection, get_database_stats, verify_database_integrity, DatabaseStats};
use crate::error::AppResult;

fn inspect(state: &AppState) -> AppResult<DatabaseStats> {
    let conn = get_connection(&state.pool)?;
    verify_database_integrity(&conn)?;
    get_database_stats(&conn)
}

/// Integrity check, then sizes and row counts
pub fn storage_info(state: &AppState) -> Result<DatabaseStats, String> {
    inspect(state).to_error_response()
}
