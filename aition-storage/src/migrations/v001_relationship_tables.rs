//! v001: causal_relationships.

use rusqlite::Connection;

use aition_core::errors::AitionResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> AitionResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS causal_relationships (
            id            TEXT PRIMARY KEY,
            agent_id      TEXT NOT NULL,
            session_id    TEXT,
            timestamp     TEXT NOT NULL,
            relation_type TEXT NOT NULL,
            category      TEXT NOT NULL,
            strength      REAL NOT NULL,
            confidence    REAL NOT NULL,
            cause_id      TEXT NOT NULL,
            effect_id     TEXT NOT NULL,
            document      TEXT NOT NULL,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_rel_agent_time
            ON causal_relationships(agent_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_rel_cause ON causal_relationships(cause_id);
        CREATE INDEX IF NOT EXISTS idx_rel_effect ON causal_relationships(effect_id);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
