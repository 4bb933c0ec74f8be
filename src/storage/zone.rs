//! Storage zone backed by an object store (S3, GCS, Azure, local, memory)

use crate::error::{Error, Result, ResultExt};
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::sync::Arc;
use tracing::debug;

/// One bucket (or container, or directory) holding a storage zone
///
/// Keys passed to and returned from a zone are relative to the zone root and
/// use `/` as the delimiter. Folder-like keys carry a trailing `/`.
#[derive(Debug, Clone)]
pub struct StorageZone {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Bucket, container or directory name, for display
    bucket: String,
    /// Base path prefix within the bucket
    prefix: String,
    /// URL scheme for display
    scheme: String,
}

impl StorageZone {
    /// Parse a zone URL and create the matching object store
    ///
    /// Supported formats:
    /// - `s3://bucket/optional/prefix` - AWS S3
    /// - `gs://bucket/...` - Google Cloud Storage
    /// - `az://container/...` - Azure Blob Storage
    /// - `memory://name` - in-process store, empty on creation
    /// - `/local/path` or `file:///local/path` - local filesystem
    pub fn parse(url: &str) -> Result<Self> {
        if let Some(rest) = url.strip_prefix("s3://") {
            let (bucket, prefix) = split_bucket(rest);
            let store = AmazonS3Builder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| Error::config(format!("Failed to create s3 client: {e}")))?;
            Ok(Self::new(Arc::new(store), "s3", bucket, prefix))
        } else if let Some(rest) = url.strip_prefix("gs://") {
            let (bucket, prefix) = split_bucket(rest);
            let store = GoogleCloudStorageBuilder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| Error::config(format!("Failed to create GCS client: {e}")))?;
            Ok(Self::new(Arc::new(store), "gs", bucket, prefix))
        } else if let Some(rest) = url.strip_prefix("az://") {
            let (container, prefix) = split_bucket(rest);
            let store = MicrosoftAzureBuilder::from_env()
                .with_container_name(container)
                .build()
                .map_err(|e| Error::config(format!("Failed to create Azure client: {e}")))?;
            Ok(Self::new(Arc::new(store), "az", container, prefix))
        } else if let Some(rest) = url.strip_prefix("memory://") {
            let (name, prefix) = split_bucket(rest);
            Ok(Self::new(Arc::new(InMemory::new()), "memory", name, prefix))
        } else {
            Self::parse_local(url)
        }
    }

    /// Parse local filesystem path
    fn parse_local(path: &str) -> Result<Self> {
        let path = path.strip_prefix("file://").unwrap_or(path);

        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {path}"))?;

        let store = LocalFileSystem::new_with_prefix(path)
            .map_err(|e| Error::config(format!("Failed to create local store: {e}")))?;

        Ok(Self::new(Arc::new(store), "file", path, ""))
    }

    /// Wrap an existing object store
    pub fn from_store(
        store: Arc<dyn ObjectStore>,
        scheme: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self::new(store, scheme, bucket, "")
    }

    fn new(
        store: Arc<dyn ObjectStore>,
        scheme: impl Into<String>,
        bucket: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            prefix: prefix.into().trim_matches('/').to_string(),
            scheme: scheme.into(),
        }
    }

    /// Get the scheme (s3, gs, az, memory, file)
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the bucket, container or directory name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Check if this is a cloud zone (not local or in-memory)
    pub fn is_cloud(&self) -> bool {
        !matches!(self.scheme.as_str(), "file" | "memory")
    }

    /// Full display URI for a key, e.g. `s3://bucket/dataset/batch/`
    pub fn uri(&self, key: &str) -> String {
        let bucket = self.bucket.trim_end_matches('/');
        if self.prefix.is_empty() {
            format!("{}://{bucket}/{key}", self.scheme)
        } else {
            format!("{}://{bucket}/{}/{key}", self.scheme, self.prefix)
        }
    }

    /// List the folders (common prefixes) directly under `prefix`
    ///
    /// The store pages through continuation tokens internally; every page is
    /// collected. Returned keys end with `/` and are sorted.
    pub async fn list_folders(&self, prefix: &str) -> Result<Vec<String>> {
        let location = self.location(prefix)?;
        let listing = self.store.list_with_delimiter(location.as_ref()).await?;

        let mut folders: Vec<String> = listing
            .common_prefixes
            .iter()
            .map(|p| format!("{}/", self.relative(p)))
            .collect();
        folders.sort();

        debug!("Listed {} folders under {}", folders.len(), self.uri(prefix));
        Ok(folders)
    }

    /// Recursively list every object key under `prefix`, sorted
    pub async fn list_objects(&self, prefix: &str) -> Result<Vec<String>> {
        let location = self.location(prefix)?;
        let metas: Vec<_> = self
            .store
            .list(location.as_ref())
            .try_collect()
            .await?;

        let mut keys: Vec<String> = metas.iter().map(|m| self.relative(&m.location)).collect();
        keys.sort();
        Ok(keys)
    }

    /// Read a whole object into memory
    pub async fn read_bytes(&self, key: &str) -> Result<Bytes> {
        let path = self.object_path(key)?;
        let bytes = self.store.get(&path).await?.bytes().await?;
        Ok(bytes)
    }

    /// Write an object, replacing any previous content
    ///
    /// Returns the display URI of the written object.
    pub async fn put_bytes(&self, key: &str, data: Bytes) -> Result<String> {
        let path = self.object_path(key)?;
        self.store.put(&path, data.into()).await?;
        Ok(self.uri(key))
    }

    /// Delete every object under `prefix`, returning how many were removed
    pub async fn delete_prefix(&self, prefix: &str) -> Result<usize> {
        let keys = self.list_objects(prefix).await?;
        for key in &keys {
            let path = self.object_path(key)?;
            self.store.delete(&path).await?;
        }
        Ok(keys.len())
    }

    /// Object path for a key, including the zone prefix
    fn object_path(&self, key: &str) -> Result<ObjectPath> {
        let full = if self.prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}/{key}", self.prefix)
        };
        ObjectPath::parse(&full).map_err(|e| Error::invalid_path(full, e.to_string()))
    }

    /// Listing location for a prefix; `None` means the zone root
    fn location(&self, prefix: &str) -> Result<Option<ObjectPath>> {
        let path = self.object_path(prefix)?;
        Ok(if path.as_ref().is_empty() {
            None
        } else {
            Some(path)
        })
    }

    /// Strip the zone prefix from a store path
    fn relative(&self, path: &ObjectPath) -> String {
        let raw = path.as_ref();
        if self.prefix.is_empty() {
            return raw.to_string();
        }
        raw.strip_prefix(&self.prefix)
            .map_or(raw, |rest| rest.trim_start_matches('/'))
            .to_string()
    }
}

/// Split `bucket/rest/of/prefix` into bucket and prefix
fn split_bucket(without_scheme: &str) -> (&str, &str) {
    match without_scheme.find('/') {
        Some(idx) => (&without_scheme[..idx], &without_scheme[idx + 1..]),
        None => (without_scheme, ""),
    }
}
