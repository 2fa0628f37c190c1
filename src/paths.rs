/// Where `~`, an empty operand and a fresh session all point.
pub const HOME_DIR: &str = "/home/user";

/// Turn user input into an absolute, normalized path.
///
/// Never fails: `..` past the root stays at the root, and the result always
/// starts with exactly one `/`.
pub fn resolve_path(input: &str, cwd: &str) -> String {
    if input.is_empty() || input == "~" {
        return HOME_DIR.to_string();
    }

    if input.starts_with('/') {
        normalize_path(input)
    } else {
        normalize_path(&format!("{}/{}", cwd, input))
    }
}

/// Collapse `.`, `..` and empty components of an absolute path.
pub fn normalize_path(path: &str) -> String {
    let mut components: Vec<&str> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => continue,
            ".." => {
                components.pop();
            }
            comp => components.push(comp),
        }
    }
    format!("/{}", components.join("/"))
}
