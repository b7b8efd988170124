//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to enable foreign keys and create all tables.
///
/// `foreign_keys` is a per-connection setting, so this runs on every open.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    name TEXT
);

-- Saunas table, keyed by the provider's place id
CREATE TABLE IF NOT EXISTS saunas (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    address TEXT NOT NULL,
    prefecture TEXT NOT NULL,
    latitude REAL,
    longitude REAL
);

-- Posts table
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    sauna_id TEXT NOT NULL,
    content TEXT,
    created_at TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (sauna_id) REFERENCES saunas(id) ON DELETE CASCADE
);

-- Favorites table
CREATE TABLE IF NOT EXISTS favorites (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    sauna_id TEXT NOT NULL,
    UNIQUE (user_id, sauna_id),
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
    FOREIGN KEY (sauna_id) REFERENCES saunas(id) ON DELETE CASCADE
);

-- Indexes for efficient queries
CREATE INDEX IF NOT EXISTS idx_posts_user_id ON posts(user_id);
CREATE INDEX IF NOT EXISTS idx_posts_sauna_id ON posts(sauna_id);
CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts(created_at);
CREATE INDEX IF NOT EXISTS idx_favorites_user_id ON favorites(user_id);
"#;

// User queries
pub const UPSERT_USER: &str = r#"
INSERT INTO users (id, email, name)
VALUES (?1, ?2, ?3)
ON CONFLICT (id) DO UPDATE SET email = excluded.email, name = excluded.name
"#;

pub const SELECT_USER_BY_ID: &str = r#"
SELECT id, email, name
FROM users
WHERE id = ?1
"#;

pub const SELECT_USERS: &str = r#"
SELECT id, email, name
FROM users
ORDER BY id ASC
"#;

pub const DELETE_USER: &str = r#"
DELETE FROM users
WHERE id = ?1
"#;

// Sauna queries
pub const INSERT_SAUNA: &str = r#"
INSERT INTO saunas (id, name, address, prefecture, latitude, longitude)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_SAUNA_BY_ID: &str = r#"
SELECT id, name, address, prefecture, latitude, longitude
FROM saunas
WHERE id = ?1
"#;

pub const SELECT_SAUNAS: &str = r#"
SELECT id, name, address, prefecture, latitude, longitude
FROM saunas
ORDER BY id ASC
"#;

pub const UPDATE_SAUNA: &str = r#"
UPDATE saunas
SET name = ?2, address = ?3, prefecture = ?4, latitude = ?5, longitude = ?6
WHERE id = ?1
"#;

pub const DELETE_SAUNA: &str = r#"
DELETE FROM saunas
WHERE id = ?1
"#;

// Post queries
pub const INSERT_POST: &str = r#"
INSERT INTO posts (user_id, sauna_id, content, created_at)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const SELECT_POST_BY_ID: &str = r#"
SELECT id, user_id, sauna_id, content, created_at
FROM posts
WHERE id = ?1
"#;

/// Absent filters are bound as NULL and match every row.
pub const SELECT_POST_VIEWS: &str = r#"
SELECT p.id, p.user_id, p.sauna_id, p.content, p.created_at, u.name, s.name
FROM posts p
INNER JOIN users u ON u.id = p.user_id
INNER JOIN saunas s ON s.id = p.sauna_id
WHERE (?1 IS NULL OR p.sauna_id = ?1)
  AND (?2 IS NULL OR p.user_id = ?2)
ORDER BY p.created_at DESC, p.id DESC
"#;

pub const DELETE_POST: &str = r#"
DELETE FROM posts
WHERE id = ?1
"#;

// Favorite queries
pub const INSERT_FAVORITE: &str = r#"
INSERT INTO favorites (user_id, sauna_id)
VALUES (?1, ?2)
"#;

pub const SELECT_FAVORITE_BY_ID: &str = r#"
SELECT id, user_id, sauna_id
FROM favorites
WHERE id = ?1
"#;

pub const SELECT_FAVORITE_BY_PAIR: &str = r#"
SELECT id, user_id, sauna_id
FROM favorites
WHERE user_id = ?1 AND sauna_id = ?2
"#;

pub const SELECT_FAVORITES: &str = r#"
SELECT id, user_id, sauna_id
FROM favorites
ORDER BY id ASC
"#;

pub const SELECT_FAVORITE_SAUNAS_FOR_USER: &str = r#"
SELECT s.id, s.name, s.address, s.prefecture, s.latitude, s.longitude
FROM saunas s
INNER JOIN favorites f ON s.id = f.sauna_id
WHERE f.user_id = ?1
ORDER BY f.id ASC
"#;

pub const DELETE_FAVORITE: &str = r#"
DELETE FROM favorites
WHERE id = ?1
"#;
