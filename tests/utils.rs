use catkin_create::cli::{run, Args};
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Files below `dir`, relative to it. Symlinked folders are followed.
fn relative_files(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints files present in only one directory and the content of files that differ.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = relative_files(dir1);
    let files2 = relative_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let actual = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let expected = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if actual != expected {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", actual);
            println!("  --- Expected content:\n{}", expected);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Arguments for a non-interactive run writing into `path`.
pub fn args_for(name: &str, path: &Path) -> Args {
    Args {
        name: Some(name.to_string()),
        dependencies: Vec::new(),
        path: path.to_path_buf(),
        description: None,
        licenses: Vec::new(),
        authors: Vec::new(),
        maintainers: vec!["Jo Smith".to_string()],
        pkg_version: None,
        rosdistro: "groovy".to_string(),
        templates_dir: None,
        metadata: None,
        verbose: 2,
        dry_run: false,
    }
}

/// Runs the CLI workflow and asserts that the created package matches `expected_dir`.
pub fn run_and_assert(args: Args, expected_dir: &str) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let name = args.name.clone().unwrap();
    let args = Args { path: tmp_dir.path().to_path_buf(), ..args };
    run(args).unwrap();

    let actual = tmp_dir.path().join(name);
    match dir_diff::is_different(&actual, expected_dir) {
        Ok(true) => {
            print_dir_diff(&actual, expected_dir.as_ref());
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare directories");
        }
    }
}
