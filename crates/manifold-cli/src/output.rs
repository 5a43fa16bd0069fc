//! Formatted output helpers for CLI commands.

use manifold_common::types::DeployableObject;

/// Serializes objects as a multi-document YAML stream, one `---`-prefixed
/// document per object, in render order.
///
/// # Errors
///
/// Returns an error if an object cannot be represented as YAML.
pub fn to_yaml_stream(objects: &[DeployableObject]) -> Result<String, serde_yaml::Error> {
    let mut stream = String::new();
    for object in objects {
        stream.push_str("---\n");
        stream.push_str(&serde_yaml::to_string(object)?);
    }
    Ok(stream)
}
