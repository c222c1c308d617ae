use std::path::PathBuf;

/// Renders the included relative paths as a box-drawing tree, directories
/// first, names sorted case-insensitively. Only directories that contain
/// included files appear, since the tree is derived from the file list.
pub fn render(rel_paths: &[PathBuf]) -> String {
    let mut root = Node::default();
    for rel in rel_paths {
        let comps: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if let Some((file, dirs)) = comps.split_last() {
            let mut node = &mut root;
            for dir in dirs {
                node = node.child(dir);
            }
            node.files.push(file.clone());
        }
    }
    root.sort();

    let mut out = String::new();
    render_node(&root, "", &mut out);
    out
}

#[derive(Debug, Default)]
struct Node {
    dirs: Vec<(String, Node)>,
    files: Vec<String>,
}

impl Node {
    fn child(
        &mut self,
        name: &str,
    ) -> &mut Node {
        let idx = match self.dirs.iter().position(|(n, _)| n == name) {
            Some(idx) => idx,
            None => {
                self.dirs.push((name.to_string(), Node::default()));
                self.dirs.len() - 1
            }
        };
        &mut self.dirs[idx].1
    }

    fn sort(&mut self) {
        self.dirs.sort_by_key(|(n, _)| n.to_lowercase());
        self.files.sort_by_key(|n| n.to_lowercase());
        for (_, child) in &mut self.dirs {
            child.sort();
        }
    }
}

fn render_node(
    node: &Node,
    prefix: &str,
    out: &mut String,
) {
    let total = node.dirs.len() + node.files.len();
    let mut index = 0usize;

    for (name, child) in &node.dirs {
        index += 1;
        let last = index == total;
        let connector = if last { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push_str("/\n");
        let extension = if last { "    " } else { "│   " };
        render_node(child, &format!("{prefix}{extension}"), out);
    }

    for name in &node.files {
        index += 1;
        let connector = if index == total { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn paths(rels: &[&str]) -> Vec<PathBuf> {
        rels.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn directories_come_before_files() {
        let tree = render(&paths(&["zz.py", "aa/inner.py"]));
        let lines: Vec<_> = tree.lines().collect();
        assert_eq!(lines[0], "├── aa/");
        assert_eq!(lines[1], "│   └── inner.py");
        assert_eq!(lines[2], "└── zz.py");
    }

    #[test]
    fn sorting_is_case_insensitive() {
        let tree = render(&paths(&["Beta.py", "alpha.py"]));
        let lines: Vec<_> = tree.lines().collect();
        assert_eq!(lines[0], "├── alpha.py");
        assert_eq!(lines[1], "└── Beta.py");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(&[]), "");
    }
}
