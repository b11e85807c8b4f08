use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("Required environment variable not found: {0}")]
    RequiredVarNotFound(String),

    #[error("Recursive interpolation limit exceeded")]
    RecursionLimit,
}

pub type InterpolationResult<T> = Result<T, InterpolationError>;

const MAX_RECURSION_DEPTH: usize = 10;

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").expect("Invalid regex pattern")
});

/// Written as `$${` to keep a literal `${` in the output
const ESCAPED_OPEN: &str = "$${";

/// Stands in for escaped openers while variables are expanded
const ESCAPE_MARKER: &str = "\u{E000}{";

/// Expands `${VAR}` and `${VAR:-default}` from the process environment
///
/// Values are expanded again until no variables remain, at most
/// `MAX_RECURSION_DEPTH` times.
pub fn interpolate(input: &str) -> InterpolationResult<String> {
    let masked = input.replace(ESCAPED_OPEN, ESCAPE_MARKER);
    let expanded = interpolate_with_depth(&masked, 0)?;
    Ok(expanded.replace(ESCAPE_MARKER, "${"))
}

fn interpolate_with_depth(input: &str, depth: usize) -> InterpolationResult<String> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(InterpolationError::RecursionLimit);
    }

    let mut result = input.to_string();
    let mut passes = 0;

    while has_variables(&result) {
        passes += 1;
        if passes > MAX_RECURSION_DEPTH {
            return Err(InterpolationError::RecursionLimit);
        }

        let matches: Vec<(String, String, Option<String>)> = VAR_PATTERN
            .captures_iter(&result)
            .map(|cap| {
                (
                    cap[0].to_string(),
                    cap[1].to_string(),
                    cap.get(2).map(|m| m.as_str().to_string()),
                )
            })
            .collect();

        for (full_match, var_name, default) in matches.into_iter().rev() {
            let replacement = match std::env::var(&var_name) {
                Ok(value) => value,
                Err(_) => match default {
                    Some(def) => interpolate_with_depth(&def, depth + 1)?,
                    None => {
                        return Err(InterpolationError::RequiredVarNotFound(var_name));
                    }
                },
            };

            result = result.replace(&full_match, &replacement);
        }
    }

    Ok(result)
}

pub fn interpolate_toml(value: &mut toml::Value) -> InterpolationResult<()> {
    match value {
        toml::Value::String(s) => {
            *s = interpolate(s)?;
        }
        toml::Value::Array(arr) => {
            for item in arr {
                interpolate_toml(item)?;
            }
        }
        toml::Value::Table(table) => {
            for (_, v) in table.iter_mut() {
                interpolate_toml(v)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Interpolates every string value of a YAML document; keys are left alone
pub fn interpolate_yaml(value: &mut serde_yaml::Value) -> InterpolationResult<()> {
    match value {
        serde_yaml::Value::String(s) => {
            *s = interpolate(s)?;
        }
        serde_yaml::Value::Sequence(seq) => {
            for item in seq {
                interpolate_yaml(item)?;
            }
        }
        serde_yaml::Value::Mapping(map) => {
            for (_, v) in map.iter_mut() {
                interpolate_yaml(v)?;
            }
        }
        serde_yaml::Value::Tagged(tagged) => {
            interpolate_yaml(&mut tagged.value)?;
        }
        _ => {}
    }
    Ok(())
}

pub fn has_variables(input: &str) -> bool {
    VAR_PATTERN.is_match(input)
}
