use crate::error::ConfigError;
use std::{collections::HashMap, fmt, fs, path::Path};

/// Region used for COPY when the config file does not name one.
pub const DEFAULT_REGION: &str = "us-west-2";

const CLUSTER: &str = "CLUSTER";
const IAM_ROLE: &str = "IAM_ROLE";
const S3: &str = "S3";

/// The [CLUSTER] block: where the warehouse lives and how to log in.
#[derive(Clone)]
pub struct ClusterConfig {
    pub host: String,
    pub db_name: String,
    pub user: String,
    pub password: String,
    pub port: u16,
}

impl ClusterConfig {
    /// Key=value connection string in the form the Postgres driver accepts.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} dbname={} user={} password={} port={}",
            self.host, self.db_name, self.user, self.password, self.port
        )
    }
}

// Hand-rolled so the password never lands in log output.
impl fmt::Debug for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("host", &self.host)
            .field("db_name", &self.db_name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

/// The [S3] block: where the source data lives.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub log_data: String,
    pub log_jsonpath: String,
    pub song_data: String,
    pub region: String,
}

/// Everything the pipeline needs from a dwh.cfg file.
#[derive(Debug, Clone)]
pub struct WarehouseConfig {
    pub cluster: ClusterConfig,
    pub iam_role_arn: String,
    pub storage: StorageConfig,
}

impl WarehouseConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let ini = IniFile::parse(content)?;

        let port_raw = ini.require(CLUSTER, "DB_PORT")?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort {
                value: port_raw.to_string(),
            })?;

        let cluster = ClusterConfig {
            host: ini.require(CLUSTER, "HOST")?.to_string(),
            db_name: ini.require(CLUSTER, "DB_NAME")?.to_string(),
            user: ini.require(CLUSTER, "DB_USER")?.to_string(),
            password: ini.require(CLUSTER, "DB_PASSWORD")?.to_string(),
            port,
        };

        let storage = StorageConfig {
            log_data: ini.require(S3, "LOG_DATA")?.to_string(),
            log_jsonpath: ini.require(S3, "LOG_JSONPATH")?.to_string(),
            song_data: ini.require(S3, "SONG_DATA")?.to_string(),
            region: ini.get(S3, "REGION").unwrap_or(DEFAULT_REGION).to_string(),
        };

        Ok(Self {
            cluster,
            iam_role_arn: ini.require(IAM_ROLE, "ARN")?.to_string(),
            storage,
        })
    }
}

/// Minimal INI reader covering what dwh.cfg files actually use.
///
/// Section and key lookup is case-insensitive; values keep their case.
#[derive(Debug, Clone, Default)]
struct IniFile {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniFile {
    fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for (line_num, raw) in content.lines().enumerate() {
            let line = raw.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            // [SECTION] header
            if line.starts_with('[') {
                if !line.ends_with(']') || line.len() < 3 {
                    return Err(ConfigError::MalformedLine { line: line_num + 1 });
                }
                let name = line[1..line.len() - 1].trim().to_uppercase();
                if name.is_empty() {
                    return Err(ConfigError::MalformedLine { line: line_num + 1 });
                }
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            // KEY=VALUE pair
            if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim();
                let value = line[eq_pos + 1..].trim();

                if key.is_empty() {
                    return Err(ConfigError::EmptyKey { line: line_num + 1 });
                }
                match current.as_ref() {
                    Some(section) => {
                        sections
                            .entry(section.clone())
                            .or_default()
                            .insert(key.to_uppercase(), unquote_value(value));
                    }
                    None => {
                        return Err(ConfigError::KeyOutsideSection { line: line_num + 1 });
                    }
                }
            } else {
                return Err(ConfigError::MalformedLine { line: line_num + 1 });
            }
        }

        Ok(Self { sections })
    }

    fn require(&self, section: &str, key: &str) -> Result<&str, ConfigError> {
        let values = self
            .sections
            .get(section)
            .ok_or_else(|| ConfigError::MissingSection(section.to_string()))?;
        values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }

    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }
}

fn unquote_value(value: &str) -> String {
    let value = value.trim();

    // Handle double quotes
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        return value[1..value.len() - 1].to_string();
    }

    // Handle single quotes
    if value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2 {
        return value[1..value.len() - 1].to_string();
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
# Warehouse connection settings
[CLUSTER]
HOST=warehouse.example.us-west-2.redshift.amazonaws.com
DB_NAME=analytics
DB_USER=loader
DB_PASSWORD='Pa55word'
DB_PORT=5439

[IAM_ROLE]
ARN='arn:aws:iam::000000000000:role/warehouse'

[S3]
LOG_DATA='s3://example-data/log_data'
LOG_JSONPATH='s3://example-data/log_json_path.json'
SONG_DATA='s3://example-data/song_data'
"#;

    #[test]
    fn parse_reads_all_sections() {
        let config = WarehouseConfig::parse(SAMPLE).unwrap();
        assert_eq!(
            config.cluster.host,
            "warehouse.example.us-west-2.redshift.amazonaws.com"
        );
        assert_eq!(config.cluster.db_name, "analytics");
        assert_eq!(config.cluster.port, 5439);
        assert_eq!(config.cluster.password, "Pa55word");
        assert_eq!(
            config.iam_role_arn,
            "arn:aws:iam::000000000000:role/warehouse"
        );
        assert_eq!(config.storage.song_data, "s3://example-data/song_data");
        assert_eq!(config.storage.region, DEFAULT_REGION);
    }

    #[test]
    fn connection_string_matches_driver_format() {
        let config = WarehouseConfig::parse(SAMPLE).unwrap();
        assert_eq!(
            config.cluster.connection_string(),
            "host=warehouse.example.us-west-2.redshift.amazonaws.com dbname=analytics \
             user=loader password=Pa55word port=5439"
        );
    }

    #[test]
    fn region_override_is_honored() {
        let sample = format!("{SAMPLE}REGION=eu-west-1\n");
        let config = WarehouseConfig::parse(&sample).unwrap();
        assert_eq!(config.storage.region, "eu-west-1");
    }

    #[test]
    fn section_and_key_lookup_is_case_insensitive() {
        let sample = SAMPLE
            .replace("[CLUSTER]", "[cluster]")
            .replace("DB_USER", "db_user");
        let config = WarehouseConfig::parse(&sample).unwrap();
        assert_eq!(config.cluster.user, "loader");
    }

    #[test]
    fn missing_key_is_reported_with_section() {
        let sample = SAMPLE.replace("DB_PASSWORD='Pa55word'", "");
        let err = WarehouseConfig::parse(&sample).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingKey { ref section, ref key }
                if section == "CLUSTER" && key == "DB_PASSWORD"
        ));
    }

    #[test]
    fn missing_section_is_reported_by_name() {
        let sample = "[CLUSTER]\n\
                      HOST=localhost\n\
                      DB_NAME=analytics\n\
                      DB_USER=loader\n\
                      DB_PASSWORD=secret\n\
                      DB_PORT=5439\n";
        let err = WarehouseConfig::parse(sample).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSection(ref section) if section == "S3"));
    }

    #[test]
    fn key_before_any_section_is_rejected() {
        let err = WarehouseConfig::parse("HOST=example\n").unwrap_err();
        assert!(matches!(err, ConfigError::KeyOutsideSection { line: 1 }));
    }

    #[test]
    fn empty_key_is_reported_with_line_number() {
        let err = WarehouseConfig::parse("[CLUSTER]\n=5439\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyKey { line: 2 }));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let sample = SAMPLE.replace("DB_PORT=5439", "DB_PORT=54x9");
        let err = WarehouseConfig::parse(&sample).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }

    #[test]
    fn malformed_line_is_reported_with_line_number() {
        let sample = "[CLUSTER]\nHOST=localhost\nNO EQUALS SIGN HERE\n";
        let err = WarehouseConfig::parse(sample).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedLine { line: 3 }));
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let config = WarehouseConfig::parse(SAMPLE).unwrap();
        let debug = format!("{:?}", config.cluster);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("Pa55word"));
    }

    #[test]
    fn from_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = WarehouseConfig::from_file(file.path()).unwrap();
        assert_eq!(config.cluster.db_name, "analytics");
    }
}
