//! Tests for storage module

use super::*;
use bytes::Bytes;
use object_store::memory::InMemory;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn memory_zone() -> StorageZone {
    StorageZone::from_store(Arc::new(InMemory::new()), "s3", "raw-bucket")
}

async fn seed(zone: &StorageZone, keys: &[&str]) {
    for key in keys {
        zone.put_bytes(key, Bytes::from_static(b"x")).await.unwrap();
    }
}

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_parse_local_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().to_str().unwrap();
    let zone = StorageZone::parse(path).unwrap();
    assert_eq!(zone.scheme(), "file");
    assert!(!zone.is_cloud());
}

#[test]
fn test_parse_local_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested = temp_dir.path().join("curated-bc");
    StorageZone::parse(&format!("file://{}", nested.display())).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn test_parse_memory() {
    let zone = StorageZone::parse("memory://scratch/base").unwrap();
    assert_eq!(zone.scheme(), "memory");
    assert_eq!(zone.bucket(), "scratch");
    assert_eq!(zone.uri("a/b"), "memory://scratch/base/a/b");
}

#[test]
fn test_uri() {
    let zone = memory_zone();
    assert_eq!(
        zone.uri("salesforce-data/2024-01-05T120000/"),
        "s3://raw-bucket/salesforce-data/2024-01-05T120000/"
    );
    assert!(zone.is_cloud());
}

// ============================================================================
// Folder Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_folders_one_level() {
    let zone = memory_zone();
    seed(
        &zone,
        &[
            "ds/2024-01-05T120000/part-0.parquet",
            "ds/2024-01-05T120000/part-1.parquet",
            "ds/2024-01-06T080000/nested/part-0.parquet",
            "ds/loose-file.parquet",
            "other/2024-01-01T000000/part-0.parquet",
        ],
    )
    .await;

    let folders = zone.list_folders("ds/").await.unwrap();
    assert_eq!(
        folders,
        vec!["ds/2024-01-05T120000/", "ds/2024-01-06T080000/"]
    );
}

#[tokio::test]
async fn test_list_folders_empty_prefix() {
    let zone = memory_zone();
    seed(&zone, &["other/batch/part-0.parquet"]).await;

    let folders = zone.list_folders("missing/").await.unwrap();
    assert!(folders.is_empty());
}

#[tokio::test]
async fn test_list_folders_does_not_match_sibling_prefix() {
    let zone = memory_zone();
    seed(
        &zone,
        &[
            "salesforce-data/b1/part.parquet",
            "salesforce-data1/b2/part.parquet",
        ],
    )
    .await;

    let folders = zone.list_folders("salesforce-data/").await.unwrap();
    assert_eq!(folders, vec!["salesforce-data/b1/"]);
}

#[tokio::test]
async fn test_list_folders_root() {
    let zone = memory_zone();
    seed(&zone, &["a/x", "b/y"]).await;

    let folders = zone.list_folders("").await.unwrap();
    assert_eq!(folders, vec!["a/", "b/"]);
}

// ============================================================================
// Object Tests
// ============================================================================

#[tokio::test]
async fn test_list_objects_recursive_sorted() {
    let zone = memory_zone();
    seed(&zone, &["ds/b/2", "ds/a/1", "ds/b/deep/3", "elsewhere/4"]).await;

    let keys = zone.list_objects("ds/").await.unwrap();
    assert_eq!(keys, vec!["ds/a/1", "ds/b/2", "ds/b/deep/3"]);
}

#[tokio::test]
async fn test_put_and_read_bytes() {
    let zone = memory_zone();
    let uri = zone
        .put_bytes("dir/file.bin", Bytes::from_static(b"hello"))
        .await
        .unwrap();
    assert_eq!(uri, "s3://raw-bucket/dir/file.bin");

    let data = zone.read_bytes("dir/file.bin").await.unwrap();
    assert_eq!(data, Bytes::from_static(b"hello"));
}

#[tokio::test]
async fn test_read_missing_object() {
    let zone = memory_zone();
    let err = zone.read_bytes("nope").await.unwrap_err();
    assert!(matches!(err, crate::Error::Storage(_)));
}

#[tokio::test]
async fn test_delete_prefix() {
    let zone = memory_zone();
    seed(&zone, &["out/day=01/a", "out/day=01/b", "out/day=02/c"]).await;

    let removed = zone.delete_prefix("out/day=01/").await.unwrap();
    assert_eq!(removed, 2);
    assert_eq!(zone.list_objects("out/").await.unwrap(), vec!["out/day=02/c"]);
}

#[tokio::test]
async fn test_invalid_key_rejected() {
    let zone = memory_zone();
    let err = zone
        .put_bytes("a//b", Bytes::from_static(b"x"))
        .await
        .unwrap_err();
    assert!(matches!(err, crate::Error::InvalidPath { .. }));
}

#[tokio::test]
async fn test_prefixed_zone_keys_are_relative() {
    let zone = StorageZone::parse("memory://scratch/base/").unwrap();
    zone.put_bytes("ds/batch/part", Bytes::from_static(b"x"))
        .await
        .unwrap();

    assert_eq!(zone.list_folders("ds/").await.unwrap(), vec!["ds/batch/"]);
    assert_eq!(zone.list_objects("").await.unwrap(), vec!["ds/batch/part"]);
    assert_eq!(zone.uri("ds/batch/"), "memory://scratch/base/ds/batch/");
}
