use assert_fs::TempDir;
use assert_fs::prelude::*;

/// Builds a fixture tree:
/// root/
///   src/main.py
///   src/util.py
///   assets/style.css
///   README.md
///   node_modules/dep.js   (# default-excluded)
///   .git/config           (# default-excluded)
///   debug.log             (# default-excluded via *.log)
pub fn python_project() -> TempDir {
    let td = TempDir::new().unwrap();

    td.child("src").create_dir_all().unwrap();
    td.child("src/main.py")
        .write_str("def main():\n    print(\"hello\")\n")
        .unwrap();
    td.child("src/util.py")
        .write_str("def helper():\n    return 42\n")
        .unwrap();

    td.child("assets").create_dir_all().unwrap();
    td.child("assets/style.css")
        .write_str("body { margin: 0; }\n")
        .unwrap();

    td.child("README.md").write_str("# readme\n").unwrap();

    td.child("node_modules").create_dir_all().unwrap();
    td.child("node_modules/dep.js")
        .write_str("module.exports = {};\n")
        .unwrap();

    td.child(".git").create_dir_all().unwrap();
    td.child(".git/config").write_str("[core]\n").unwrap();

    td.child("debug.log").write_str("noise\n").unwrap();

    td
}
