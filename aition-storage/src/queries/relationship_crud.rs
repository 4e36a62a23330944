//! Insert, point lookup, revision, counts.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use aition_core::errors::{AitionError, AitionResult, StorageError};
use aition_core::relationship::{CausalRelationship, Revision};

use super::enum_tag;
use crate::to_storage_err;

/// Insert a single relationship document. The document column is the
/// source of truth; the remaining columns are indexed projections of it.
pub fn insert_relationship(conn: &Connection, relationship: &CausalRelationship) -> AitionResult<()> {
    let document = serde_json::to_string(relationship)?;
    let relation_type = enum_tag(&relationship.relation_type)?;
    let category = enum_tag(&relationship.category)?;

    conn.execute(
        "INSERT INTO causal_relationships (
            id, agent_id, session_id, timestamp, relation_type, category,
            strength, confidence, cause_id, effect_id, document,
            created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            relationship.id,
            relationship.agent_id,
            relationship.session_id,
            relationship.timestamp.to_rfc3339(),
            relation_type,
            category,
            relationship.strength,
            relationship.confidence,
            relationship.cause.id,
            relationship.effect.id,
            document,
            relationship.created_at.to_rfc3339(),
            relationship.updated_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Fetch one relationship by id.
pub fn get_relationship(conn: &Connection, id: &str) -> AitionResult<Option<CausalRelationship>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT document FROM causal_relationships WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Learning update: revise strength/confidence in place and append one
/// revision entry. Identity and cause/effect ids never change.
pub fn revise_strength(
    conn: &Connection,
    id: &str,
    strength: f64,
    confidence: f64,
) -> AitionResult<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("revise begin: {e}")))?;

    let raw: Option<String> = tx
        .query_row(
            "SELECT document FROM causal_relationships WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some(raw) = raw else {
        return Err(AitionError::Storage(StorageError::UnknownRelationship {
            id: id.to_string(),
        }));
    };

    let mut document: CausalRelationship = serde_json::from_str(&raw)?;
    let now = Utc::now();
    document.strength = strength;
    document.confidence = confidence;
    document.updated_at = now;
    document.learning.revision_count += 1;
    document.learning.last_revised = Some(now);
    document.learning.revisions.push(Revision {
        timestamp: now,
        strength,
        confidence,
    });

    let updated = serde_json::to_string(&document)?;
    tx.execute(
        "UPDATE causal_relationships
            SET document = ?2, strength = ?3, confidence = ?4, updated_at = ?5
          WHERE id = ?1",
        params![id, updated, strength, confidence, now.to_rfc3339()],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("revise commit: {e}")))?;
    Ok(())
}

/// Number of relationships owned by an agent.
pub fn count_by_agent(conn: &Connection, agent_id: &str) -> AitionResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM causal_relationships WHERE agent_id = ?1",
            params![agent_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
