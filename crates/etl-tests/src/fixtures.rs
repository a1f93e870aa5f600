//! Postgres-flavored statements for running the pipeline against a
//! local database. The built-in catalog emits Redshift DDL (IDENTITY,
//! DISTKEY, SORTKEY) that vanilla Postgres rejects, and its COPY
//! statements pull from object storage, so the load phase here seeds
//! the staging tables with plain inserts instead.

use catalog::statement::{Statement, StatementKind, StatementSet};

const STAGING_EVENTS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS staging_events (
    artist          VARCHAR,
    auth            VARCHAR,
    first_name      VARCHAR,
    gender          VARCHAR,
    item_in_session INTEGER,
    last_name       VARCHAR,
    length          FLOAT,
    level           VARCHAR,
    location        VARCHAR,
    method          VARCHAR,
    page            VARCHAR,
    registration    BIGINT,
    session_id      INTEGER,
    song            VARCHAR,
    status          INTEGER,
    ts              BIGINT,
    user_agent      VARCHAR,
    user_id         INTEGER
);"#;

const STAGING_SONGS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS staging_songs (
    num_songs        INTEGER,
    artist_id        VARCHAR,
    artist_latitude  FLOAT,
    artist_longitude FLOAT,
    artist_location  VARCHAR,
    artist_name      VARCHAR,
    song_id          VARCHAR,
    title            VARCHAR,
    duration         FLOAT,
    year             INTEGER
);"#;

const SONGPLAYS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS songplays (
    songplay_id SERIAL PRIMARY KEY,
    start_time  TIMESTAMP NOT NULL,
    user_id     INTEGER NOT NULL,
    level       VARCHAR,
    song_id     VARCHAR,
    artist_id   VARCHAR,
    session_id  INTEGER,
    location    VARCHAR,
    user_agent  VARCHAR
);"#;

const USERS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS users (
    user_id    INTEGER PRIMARY KEY,
    first_name VARCHAR,
    last_name  VARCHAR,
    gender     VARCHAR,
    level      VARCHAR
);"#;

const SONGS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS songs (
    song_id   VARCHAR PRIMARY KEY,
    title     VARCHAR NOT NULL,
    artist_id VARCHAR NOT NULL,
    year      INTEGER,
    duration  FLOAT
);"#;

const ARTISTS_DDL: &str = r#"CREATE TABLE IF NOT EXISTS artists (
    artist_id VARCHAR PRIMARY KEY,
    name      VARCHAR NOT NULL,
    location  VARCHAR,
    latitude  FLOAT,
    longitude FLOAT
);"#;

const TIME_DDL: &str = r#"CREATE TABLE IF NOT EXISTS time (
    start_time TIMESTAMP PRIMARY KEY,
    hour       INTEGER NOT NULL,
    day        INTEGER NOT NULL,
    week       INTEGER NOT NULL,
    month      INTEGER NOT NULL,
    year       INTEGER NOT NULL,
    weekday    INTEGER NOT NULL
);"#;

/// Two songs whose title and artist line up with the seeded events.
const SEED_STAGING_SONGS: &str = r#"INSERT INTO staging_songs
    (num_songs, artist_id, artist_latitude, artist_longitude, artist_location,
     artist_name, song_id, title, duration, year)
VALUES
    (1, 'AR0001', NULL, NULL, 'San Francisco, CA',
     'The Lowlands', 'SO0001', 'Night Drive', 210.5, 2014),
    (1, 'AR0002', 37.77, -122.41, 'Oakland, CA',
     'Marla Vane', 'SO0002', 'Paper Moon', 183.2, 2011);"#;

/// Three events: two NextSong plays that match the seeded songs and one
/// Home page view that every transform should skip.
const SEED_STAGING_EVENTS: &str = r#"INSERT INTO staging_events
    (artist, auth, first_name, gender, item_in_session, last_name, length,
     level, location, method, page, registration, session_id, song, status,
     ts, user_agent, user_id)
VALUES
    ('The Lowlands', 'Logged In', 'Ava', 'F', 0, 'Moreno', 210.5,
     'paid', 'Portland, OR', 'PUT', 'NextSong', 1541016707796, 101, 'Night Drive', 200,
     1542241826796, 'Mozilla/5.0', 8),
    ('Marla Vane', 'Logged In', 'Noah', 'M', 1, 'Chavez', 183.2,
     'free', 'Salinas, CA', 'PUT', 'NextSong', 1540919166796, 102, 'Paper Moon', 200,
     1542242001234, 'Mozilla/5.0', 15),
    (NULL, 'Logged In', 'Ava', 'F', 2, 'Moreno', NULL,
     'paid', 'Portland, OR', 'GET', 'Home', 1541016707796, 101, NULL, 200,
     1542242100000, 'Mozilla/5.0', 8);"#;

const INSERT_SONGPLAYS: &str = r#"INSERT INTO songplays
    (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
SELECT DISTINCT
    TIMESTAMP 'epoch' + e.ts / 1000 * INTERVAL '1 second' AS start_time,
    e.user_id,
    e.level,
    s.song_id,
    s.artist_id,
    e.session_id,
    e.location,
    e.user_agent
FROM staging_events e
JOIN staging_songs s
  ON e.song = s.title
 AND e.artist = s.artist_name
WHERE e.page = 'NextSong';"#;

const INSERT_USERS: &str = r#"INSERT INTO users (user_id, first_name, last_name, gender, level)
SELECT DISTINCT user_id, first_name, last_name, gender, level
FROM staging_events
WHERE page = 'NextSong' AND user_id IS NOT NULL;"#;

const INSERT_SONGS: &str = r#"INSERT INTO songs (song_id, title, artist_id, year, duration)
SELECT DISTINCT song_id, title, artist_id, year, duration
FROM staging_songs
WHERE song_id IS NOT NULL;"#;

const INSERT_ARTISTS: &str = r#"INSERT INTO artists (artist_id, name, location, latitude, longitude)
SELECT DISTINCT artist_id, artist_name, artist_location, artist_latitude, artist_longitude
FROM staging_songs
WHERE artist_id IS NOT NULL;"#;

// EXTRACT(dow ...) here; the Redshift catalog says weekday instead.
const INSERT_TIME: &str = r#"INSERT INTO time (start_time, hour, day, week, month, year, weekday)
SELECT
    start_time,
    EXTRACT(hour FROM start_time),
    EXTRACT(day FROM start_time),
    EXTRACT(week FROM start_time),
    EXTRACT(month FROM start_time),
    EXTRACT(year FROM start_time),
    EXTRACT(dow FROM start_time)
FROM (
    SELECT DISTINCT TIMESTAMP 'epoch' + ts / 1000 * INTERVAL '1 second' AS start_time
    FROM staging_events
    WHERE page = 'NextSong'
) AS event_times;"#;

/// The full catalog, re-targeted at vanilla Postgres.
pub fn pg_statement_set() -> StatementSet {
    StatementSet {
        drops: statements(
            StatementKind::Drop,
            &[
                ("staging_events", "DROP TABLE IF EXISTS staging_events;"),
                ("staging_songs", "DROP TABLE IF EXISTS staging_songs;"),
                ("songplays", "DROP TABLE IF EXISTS songplays;"),
                ("users", "DROP TABLE IF EXISTS users;"),
                ("songs", "DROP TABLE IF EXISTS songs;"),
                ("artists", "DROP TABLE IF EXISTS artists;"),
                ("time", "DROP TABLE IF EXISTS time;"),
            ],
        ),
        creates: statements(
            StatementKind::Create,
            &[
                ("staging_events", STAGING_EVENTS_DDL),
                ("staging_songs", STAGING_SONGS_DDL),
                ("songplays", SONGPLAYS_DDL),
                ("users", USERS_DDL),
                ("songs", SONGS_DDL),
                ("artists", ARTISTS_DDL),
                ("time", TIME_DDL),
            ],
        ),
        copies: statements(
            StatementKind::Copy,
            &[
                ("staging_events", SEED_STAGING_EVENTS),
                ("staging_songs", SEED_STAGING_SONGS),
            ],
        ),
        inserts: statements(
            StatementKind::Insert,
            &[
                ("songplays", INSERT_SONGPLAYS),
                ("users", INSERT_USERS),
                ("songs", INSERT_SONGS),
                ("artists", INSERT_ARTISTS),
                ("time", INSERT_TIME),
            ],
        ),
    }
}

fn statements(kind: StatementKind, pairs: &[(&str, &str)]) -> Vec<Statement> {
    pairs
        .iter()
        .map(|(name, sql)| Statement::new(*name, kind, *sql))
        .collect()
}
