// tests/network_boundary.rs
// Fails if network calls are made outside the API client boundary.
// All reqwest usage must live in src/api; everything else goes through ApiClient.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

fn is_whitelisted(path: &Path) -> bool {
    let p = path.to_string_lossy();
    p.contains("/api/") || p.contains("\\api\\")
}

#[test]
fn reqwest_confined_to_api_module() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);

    let mut offenders: Vec<String> = Vec::new();

    for file in files {
        if is_whitelisted(&file) {
            continue;
        }
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        if content.contains("reqwest::") || content.contains("use reqwest") {
            offenders.push(file.to_string_lossy().to_string());
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("Direct network calls found outside src/api:\n");
        for file in offenders {
            msg.push_str(&format!("  {}: route through ApiClient instead\n", file));
        }
        panic!("{}", msg);
    }
}
