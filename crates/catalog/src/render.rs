use crate::error::CatalogError;
use std::collections::BTreeMap;

/// Substitution values for `{placeholder}` tokens in statement templates.
#[derive(Debug, Clone, Default)]
pub struct RenderVars {
    vars: BTreeMap<String, String>,
}

impl RenderVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Substitutes every known placeholder in `template`, failing if any
    /// `{token}` survives the pass.
    pub fn render(&self, statement: &str, template: &str) -> Result<String, CatalogError> {
        let mut sql = template.to_string();
        for (key, value) in &self.vars {
            sql = sql.replace(&format!("{{{key}}}"), value);
        }
        if let Some(placeholder) = find_placeholder(&sql) {
            return Err(CatalogError::UnresolvedPlaceholder {
                statement: statement.to_string(),
                placeholder: placeholder.to_string(),
            });
        }
        Ok(sql)
    }
}

/// Finds the first `{token}` made of lowercase letters and underscores.
fn find_placeholder(sql: &str) -> Option<&str> {
    let bytes = sql.as_bytes();
    let mut start = None;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'{' => start = Some(i),
            b'}' => {
                if let Some(open) = start.take() {
                    if i > open + 1 {
                        return Some(&sql[open + 1..i]);
                    }
                }
            }
            b'a'..=b'z' | b'_' => {}
            _ => start = None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_occurrence() {
        let mut vars = RenderVars::new();
        vars.set("table", "staging_events").set("region", "us-west-2");
        let sql = vars
            .render("copy", "COPY {table} REGION '{region}' -- {table}")
            .unwrap();
        assert_eq!(sql, "COPY staging_events REGION 'us-west-2' -- staging_events");
    }

    #[test]
    fn render_rejects_leftover_placeholder() {
        let vars = RenderVars::new();
        let err = vars.render("copy_events", "COPY x FROM '{log_data}'").unwrap_err();
        match err {
            CatalogError::UnresolvedPlaceholder {
                statement,
                placeholder,
            } => {
                assert_eq!(statement, "copy_events");
                assert_eq!(placeholder, "log_data");
            }
        }
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut vars = RenderVars::new();
        vars.set("region", "us-east-1");
        vars.set("region", "eu-central-1");
        assert_eq!(vars.get("region"), Some("eu-central-1"));
    }
}
