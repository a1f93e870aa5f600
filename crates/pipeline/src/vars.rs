use catalog::render::RenderVars;
use warehouse::config::WarehouseConfig;

/// Builds the substitution values the built-in catalog expects from a
/// loaded config file.
pub fn render_vars(config: &WarehouseConfig) -> RenderVars {
    let mut vars = RenderVars::new();
    vars.set("log_data", &config.storage.log_data)
        .set("log_jsonpath", &config.storage.log_jsonpath)
        .set("song_data", &config.storage.song_data)
        .set("region", &config.storage.region)
        .set("iam_role", &config.iam_role_arn);
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::builtin;

    const SAMPLE: &str = r#"
[CLUSTER]
HOST=localhost
DB_NAME=analytics
DB_USER=loader
DB_PASSWORD=secret
DB_PORT=5439

[IAM_ROLE]
ARN='arn:aws:iam::000000000000:role/warehouse'

[S3]
LOG_DATA='s3://example-data/log_data'
LOG_JSONPATH='s3://example-data/log_json_path.json'
SONG_DATA='s3://example-data/song_data'
"#;

    #[test]
    fn config_values_flow_into_copy_statements() {
        let config = WarehouseConfig::parse(SAMPLE).unwrap();
        let set = builtin::statement_set(&render_vars(&config)).unwrap();

        let events = &set.copies[0];
        assert!(events.sql.contains("FROM 's3://example-data/log_data'"));
        assert!(
            events
                .sql
                .contains("aws_iam_role=arn:aws:iam::000000000000:role/warehouse")
        );
        assert!(events.sql.contains("REGION 'us-west-2'"));
    }
}
