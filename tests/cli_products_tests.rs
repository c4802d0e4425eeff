//! End-to-end tests for the `tonematch products` command.

use std::fs;
use std::process::Command;

use serde_json::json;
use tempfile::TempDir;

/// Path to the tonematch binary
fn tonematch_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tonematch")
}

/// Writes a catalog fixture and returns its path with the temp dir kept alive.
fn write_catalog() -> (std::path::PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("products.json");

    let catalog = json!([
        {"product": "Silk Liquid Foundation", "brand": "Arbelle", "price": "$24.99", "mst": "Monk 3"},
        {"product_name": "Velvet Lipstick", "Brand": "Tonal", "mst": "Monk 7"},
        {"Product Name": "Hydra Makeup Primer"},
        {"product": "Garden Trowel", "brand": "Toolco"}
    ]);
    fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

    (path, temp_dir)
}

#[test]
fn test_products_lists_makeup_only() {
    let (path, _temp) = write_catalog();

    let output = Command::new(tonematch_bin())
        .args(["products", "--catalog", path.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["total_items"], 3);
    let data = result["data"].as_array().unwrap();
    assert!(data.iter().all(|p| p["name"] != "Garden Trowel"));
}

#[test]
fn test_products_mst_filter() {
    let (path, _temp) = write_catalog();

    let output = Command::new(tonematch_bin())
        .args([
            "products",
            "--catalog",
            path.to_str().unwrap(),
            "--mst",
            "monk 3",
            "--json",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["total_items"], 1);
    assert_eq!(result["data"][0]["name"], "Silk Liquid Foundation");
}

#[test]
fn test_products_missing_catalog_exits_nonzero() {
    let output = Command::new(tonematch_bin())
        .args(["products", "--catalog", "/nonexistent/products.json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(2),
        "I/O failures should exit with the io code"
    );
}
