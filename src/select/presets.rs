use std::path::Path;

/// A named preset mapping a project flavour to the extensions worth exporting.
#[derive(Debug, Clone, Copy)]
pub struct ProjectType {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub description: &'static str,
}

pub const PROJECT_TYPES: &[ProjectType] = &[
    ProjectType {
        name: "python",
        extensions: &[".py", ".pyi", ".pyw"],
        description: "Python projects",
    },
    ProjectType {
        name: "arduino",
        extensions: &[".ino", ".cpp", ".c", ".h", ".hpp"],
        description: "Arduino/C++ projects",
    },
    ProjectType {
        name: "vue",
        extensions: &[
            ".vue", ".js", ".ts", ".jsx", ".tsx", ".json", ".css", ".scss", ".sass", ".less",
        ],
        description: "Vue.js projects",
    },
    ProjectType {
        name: "react",
        extensions: &[
            ".jsx", ".tsx", ".js", ".ts", ".json", ".css", ".scss", ".sass", ".less",
        ],
        description: "React.js projects",
    },
    ProjectType {
        name: "web",
        extensions: &[".html", ".htm", ".css", ".scss", ".sass", ".less", ".js", ".ts"],
        description: "Web projects (HTML/CSS/JS)",
    },
    ProjectType {
        name: "php",
        extensions: &[".php", ".phtml", ".php3", ".php4", ".php5", ".phps"],
        description: "PHP projects",
    },
    ProjectType {
        name: "node",
        extensions: &[".js", ".ts", ".mjs", ".cjs", ".json"],
        description: "Node.js projects",
    },
    ProjectType {
        name: "flutter",
        extensions: &[".dart", ".yaml", ".json"],
        description: "Flutter/Dart projects",
    },
    ProjectType {
        name: "rust",
        extensions: &[".rs", ".toml"],
        description: "Rust projects",
    },
    ProjectType {
        name: "go",
        extensions: &[".go", ".mod", ".sum"],
        description: "Go projects",
    },
    ProjectType {
        name: "java",
        extensions: &[".java", ".xml", ".gradle", ".properties"],
        description: "Java projects",
    },
    ProjectType {
        name: "csharp",
        extensions: &[".cs", ".csproj", ".sln", ".xaml"],
        description: "C# projects",
    },
    ProjectType {
        name: "config",
        extensions: &[".json", ".yaml", ".yml", ".toml", ".ini", ".cfg", ".conf", ".env"],
        description: "Configuration files",
    },
    ProjectType {
        name: "docs",
        extensions: &[".md", ".rst", ".txt", ".adoc"],
        description: "Documentation files",
    },
];

/// Case-insensitive preset lookup.
pub fn lookup(name: &str) -> Option<&'static ProjectType> {
    PROJECT_TYPES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Prints every preset with its description and extension list.
pub fn print_types() {
    println!("\nAvailable project types:\n");
    for t in PROJECT_TYPES {
        println!("  {:<12} - {}", t.name, t.description);
        println!("               Extensions: {}\n", t.extensions.join(", "));
    }
}

/// Fence language for a file, by special filename first, then extension.
pub fn fence_language(path: &Path) -> &'static str {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    // Files without a useful extension but a well-known name
    if name == "dockerfile" {
        return "dockerfile";
    }
    if name == "makefile" {
        return "makefile";
    }
    if name.starts_with(".env") {
        return "dotenv";
    }
    if name == ".gitignore" {
        return "gitignore";
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "py" | "pyi" | "pyw" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" => "typescript",
        "jsx" => "jsx",
        "tsx" => "tsx",
        "vue" => "vue",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "less" => "less",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "xml" => "xml",
        "md" => "markdown",
        "rst" => "rst",
        "php" | "phtml" => "php",
        "c" | "h" => "c",
        "cpp" | "hpp" | "ino" => "cpp",
        "rs" => "rust",
        "go" => "go",
        "dart" => "dart",
        "java" => "java",
        "kt" => "kotlin",
        "cs" => "csharp",
        "rb" => "ruby",
        "sh" | "bash" => "bash",
        "zsh" => "zsh",
        "fish" => "fish",
        "ps1" => "powershell",
        "sql" => "sql",
        "graphql" => "graphql",
        "dockerfile" => "dockerfile",
        "ini" | "cfg" | "conf" => "ini",
        "env" => "dotenv",
        "gitignore" => "gitignore",
        _ => "",
    }
}
