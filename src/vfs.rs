use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    File {
        content: String,
    },
    Directory {
        children: BTreeMap<String, VfsNode>,
    },
}

impl VfsNode {
    pub fn file(content: &str) -> Self {
        VfsNode::File { content: content.to_string() }
    }

    /// Build a directory from `(name, child)` pairs. Later duplicates win.
    pub fn dir<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, VfsNode)>,
    {
        VfsNode::Directory {
            children: entries
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
        }
    }

    pub fn empty_dir() -> Self {
        VfsNode::Directory { children: BTreeMap::new() }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }

    /// Byte length for files, the customary 4096 for directories.
    pub fn display_size(&self) -> usize {
        match self {
            VfsNode::File { content } => content.len(),
            VfsNode::Directory { .. } => 4096,
        }
    }
}

/// Read-only in-memory tree backing the terminal. Built once per session.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    pub root: VfsNode,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::seeded()
    }
}

impl VirtualFileSystem {
    /// An empty tree containing only `/`.
    pub fn new() -> Self {
        Self { root: VfsNode::empty_dir() }
    }

    pub fn with_root(root: VfsNode) -> Self {
        Self { root }
    }

    /// The stock tree every terminal session starts with.
    pub fn seeded() -> Self {
        let documents = VfsNode::dir([
            ("readme.txt", VfsNode::file("Welcome to ai2b Terminal!\n2B or Not 2B.")),
            ("notes.txt", VfsNode::file("Important system notes and configurations.")),
            (
                "projects",
                VfsNode::dir([
                    (
                        "web",
                        VfsNode::dir([
                            ("index.html", VfsNode::file("<html><body>Hello ai2b</body></html>")),
                            (
                                "styles.css",
                                VfsNode::file("body { background: black; color: #B1B762; }"),
                            ),
                        ]),
                    ),
                    (
                        "data",
                        VfsNode::dir([(
                            "stats.csv",
                            VfsNode::file("date,value\n2024-01-01,100\n2024-01-02,150"),
                        )]),
                    ),
                ]),
            ),
        ]);

        let user = VfsNode::dir([
            ("documents", documents),
            (
                "downloads",
                VfsNode::dir([
                    ("sample.pdf", VfsNode::file("[PDF Content]")),
                    ("image.jpg", VfsNode::file("[Image Content]")),
                ]),
            ),
            (
                ".config",
                VfsNode::dir([(
                    "settings.json",
                    VfsNode::file(r#"{"theme": "dark", "font": "mono"}"#),
                )]),
            ),
        ]);

        let etc = VfsNode::dir([
            ("hosts", VfsNode::file("127.0.0.1 localhost\n192.168.1.1 router")),
            (
                "passwd",
                VfsNode::file(
                    "root:x:0:0:root:/root:/bin/bash\nuser:x:1000:1000::/home/user:/bin/bash",
                ),
            ),
        ]);

        let usr = VfsNode::dir([
            (
                "bin",
                VfsNode::dir([
                    ("python", VfsNode::file("[Binary]")),
                    ("node", VfsNode::file("[Binary]")),
                ]),
            ),
            ("lib", VfsNode::dir([("node_modules", VfsNode::empty_dir())])),
        ]);

        Self::with_root(VfsNode::dir([
            ("home", VfsNode::dir([("user", user)])),
            ("etc", etc),
            ("usr", usr),
        ]))
    }

    /// Find the node at an absolute, normalized path.
    ///
    /// Descent stops at the first file it meets: whatever segments follow a
    /// file are ignored, so `/etc/hosts/anything` yields `/etc/hosts`.
    pub fn lookup<'a>(&'a self, path: &str) -> Option<&'a VfsNode> {
        let mut node = &self.root;
        for comp in path.split('/').filter(|c| !c.is_empty()) {
            match node {
                VfsNode::Directory { children } => {
                    node = children.get(comp)?;
                }
                VfsNode::File { .. } => return Some(node),
            }
        }
        Some(node)
    }

    /// A directory's children, in name order. `None` when `path` is missing
    /// or names a file.
    pub fn list_dir(&self, path: &str) -> Option<Vec<(&str, &VfsNode)>> {
        match self.lookup(path)? {
            VfsNode::Directory { children } => {
                Some(children.iter().map(|(name, node)| (name.as_str(), node)).collect())
            }
            VfsNode::File { .. } => None,
        }
    }

    /// Every file leaf under `path`, depth-first in name order. A path that
    /// names a file yields just itself. `None` when nothing is there.
    pub fn walk_files(&self, path: &str) -> Option<Vec<String>> {
        let start = self.lookup(path)?;
        let mut out = Vec::new();
        collect_files(start, path, &mut out);
        Some(out)
    }
}

fn collect_files(node: &VfsNode, path: &str, out: &mut Vec<String>) {
    match node {
        VfsNode::File { .. } => out.push(path.to_string()),
        VfsNode::Directory { children } => {
            for (name, child) in children {
                let child_path = if path == "/" {
                    format!("/{}", name)
                } else {
                    format!("{}/{}", path, name)
                };
                collect_files(child, &child_path, out);
            }
        }
    }
}
