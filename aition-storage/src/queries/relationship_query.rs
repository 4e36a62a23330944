//! Agent-scoped filtered queries and the two expansion primitives.

use rusqlite::{params, Connection, Statement};

use aition_core::errors::AitionResult;
use aition_core::relationship::{CausalRelationship, RelationshipFilter};

use super::enum_tag;
use crate::to_storage_err;

/// All relationships for an agent passing the filter, most recent first.
/// Every filter predicate maps onto an indexed projection column, so the
/// document JSON is only parsed for rows that match.
pub fn query_by_agent(
    conn: &Connection,
    agent_id: &str,
    filter: &RelationshipFilter,
) -> AitionResult<Vec<CausalRelationship>> {
    fn push(
        clause: &str,
        value: Box<dyn rusqlite::types::ToSql>,
        sql: &mut String,
        dyn_params: &mut Vec<Box<dyn rusqlite::types::ToSql>>,
    ) {
        dyn_params.push(value);
        sql.push_str(&format!(" AND {} ?{}", clause, dyn_params.len()));
    }

    let mut sql = String::from(
        "SELECT document FROM causal_relationships WHERE agent_id = ?1",
    );
    let mut dyn_params: Vec<Box<dyn rusqlite::types::ToSql>> =
        vec![Box::new(agent_id.to_string())];

    if let Some(relation_type) = filter.relation_type {
        let tag = enum_tag(&relation_type)?;
        push("relation_type =", Box::new(tag), &mut sql, &mut dyn_params);
    }
    if let Some(category) = filter.category {
        let tag = enum_tag(&category)?;
        push("category =", Box::new(tag), &mut sql, &mut dyn_params);
    }
    if let Some(min) = filter.min_strength {
        push("strength >=", Box::new(min), &mut sql, &mut dyn_params);
    }
    if let Some(max) = filter.max_strength {
        push("strength <=", Box::new(max), &mut sql, &mut dyn_params);
    }
    if let Some(min) = filter.min_confidence {
        push("confidence >=", Box::new(min), &mut sql, &mut dyn_params);
    }
    if let Some(max) = filter.max_confidence {
        push("confidence <=", Box::new(max), &mut sql, &mut dyn_params);
    }
    if let Some(since) = filter.since {
        push(
            "timestamp >=",
            Box::new(since.to_rfc3339()),
            &mut sql,
            &mut dyn_params,
        );
    }
    if let Some(until) = filter.until {
        push(
            "timestamp <=",
            Box::new(until.to_rfc3339()),
            &mut sql,
            &mut dyn_params,
        );
    }

    sql.push_str(" ORDER BY timestamp DESC, created_at DESC");

    let mut stmt = conn.prepare(&sql).map_err(|e| to_storage_err(e.to_string()))?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        dyn_params.iter().map(|p| p.as_ref()).collect();
    collect_documents(&mut stmt, params_refs.as_slice())
}

/// Relationships whose cause node is `cause_id` (forward expansion).
pub fn find_by_cause(conn: &Connection, cause_id: &str) -> AitionResult<Vec<CausalRelationship>> {
    let mut stmt = conn
        .prepare(
            "SELECT document FROM causal_relationships
              WHERE cause_id = ?1
              ORDER BY timestamp DESC, created_at DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    collect_documents_plain(&mut stmt, cause_id)
}

/// Relationships whose effect node is `effect_id` (backward expansion).
pub fn find_by_effect(conn: &Connection, effect_id: &str) -> AitionResult<Vec<CausalRelationship>> {
    let mut stmt = conn
        .prepare(
            "SELECT document FROM causal_relationships
              WHERE effect_id = ?1
              ORDER BY timestamp DESC, created_at DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    collect_documents_plain(&mut stmt, effect_id)
}

fn collect_documents(
    stmt: &mut Statement<'_>,
    params: &[&dyn rusqlite::types::ToSql],
) -> AitionResult<Vec<CausalRelationship>> {
    let rows = stmt
        .query_map(params, |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(serde_json::from_str(&raw)?);
    }
    Ok(results)
}

fn collect_documents_plain(
    stmt: &mut Statement<'_>,
    key: &str,
) -> AitionResult<Vec<CausalRelationship>> {
    let rows = stmt
        .query_map(params![key], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push(serde_json::from_str(&raw)?);
    }
    Ok(results)
}
