//! The built-in statement catalog for the Sparkify star schema.
//!
//! Drops and creates run staging tables first, then the fact table,
//! then the dimensions. Inserts run the fact table first so a join
//! failure surfaces before any dimension is touched.

use crate::{
    error::CatalogError,
    render::RenderVars,
    statement::{Statement, StatementKind, StatementSet},
};

const CREATE_STAGING_EVENTS_SQL: &str = include_str!("sql/create_staging_events.sql");
const CREATE_STAGING_SONGS_SQL: &str = include_str!("sql/create_staging_songs.sql");
const CREATE_SONGPLAYS_SQL: &str = include_str!("sql/create_songplays.sql");
const CREATE_USERS_SQL: &str = include_str!("sql/create_users.sql");
const CREATE_SONGS_SQL: &str = include_str!("sql/create_songs.sql");
const CREATE_ARTISTS_SQL: &str = include_str!("sql/create_artists.sql");
const CREATE_TIME_SQL: &str = include_str!("sql/create_time.sql");

const COPY_STAGING_EVENTS_SQL: &str = include_str!("sql/copy_staging_events.sql");
const COPY_STAGING_SONGS_SQL: &str = include_str!("sql/copy_staging_songs.sql");

const INSERT_SONGPLAYS_SQL: &str = include_str!("sql/insert_songplays.sql");
const INSERT_USERS_SQL: &str = include_str!("sql/insert_users.sql");
const INSERT_SONGS_SQL: &str = include_str!("sql/insert_songs.sql");
const INSERT_ARTISTS_SQL: &str = include_str!("sql/insert_artists.sql");
const INSERT_TIME_SQL: &str = include_str!("sql/insert_time.sql");

const DROP_TABLES: [(&str, &str); 7] = [
    ("staging_events", "DROP TABLE IF EXISTS staging_events;"),
    ("staging_songs", "DROP TABLE IF EXISTS staging_songs;"),
    ("songplays", "DROP TABLE IF EXISTS songplays;"),
    ("users", "DROP TABLE IF EXISTS users;"),
    ("songs", "DROP TABLE IF EXISTS songs;"),
    ("artists", "DROP TABLE IF EXISTS artists;"),
    ("time", "DROP TABLE IF EXISTS time;"),
];

const CREATE_TABLES: [(&str, &str); 7] = [
    ("staging_events", CREATE_STAGING_EVENTS_SQL),
    ("staging_songs", CREATE_STAGING_SONGS_SQL),
    ("songplays", CREATE_SONGPLAYS_SQL),
    ("users", CREATE_USERS_SQL),
    ("songs", CREATE_SONGS_SQL),
    ("artists", CREATE_ARTISTS_SQL),
    ("time", CREATE_TIME_SQL),
];

const COPY_TABLES: [(&str, &str); 2] = [
    ("staging_events", COPY_STAGING_EVENTS_SQL),
    ("staging_songs", COPY_STAGING_SONGS_SQL),
];

const INSERT_TABLES: [(&str, &str); 5] = [
    ("songplays", INSERT_SONGPLAYS_SQL),
    ("users", INSERT_USERS_SQL),
    ("songs", INSERT_SONGS_SQL),
    ("artists", INSERT_ARTISTS_SQL),
    ("time", INSERT_TIME_SQL),
];

/// Renders the full built-in catalog with the given substitution values.
///
/// Only the copy statements carry placeholders; the rest render as-is.
pub fn statement_set(vars: &RenderVars) -> Result<StatementSet, CatalogError> {
    Ok(StatementSet {
        drops: render_group(vars, StatementKind::Drop, &DROP_TABLES)?,
        creates: render_group(vars, StatementKind::Create, &CREATE_TABLES)?,
        copies: render_group(vars, StatementKind::Copy, &COPY_TABLES)?,
        inserts: render_group(vars, StatementKind::Insert, &INSERT_TABLES)?,
    })
}

fn render_group(
    vars: &RenderVars,
    kind: StatementKind,
    templates: &[(&str, &str)],
) -> Result<Vec<Statement>, CatalogError> {
    templates
        .iter()
        .map(|(name, template)| {
            let sql = vars.render(&format!("{kind} {name}"), template)?;
            Ok(Statement::new(*name, kind, sql))
        })
        .collect()
}
